mod action;
mod reducer;
mod state;

pub use action::{create_group_action, fetch_groups_action, GroupsAction};
pub use reducer::GroupsReducer;
pub use state::{Group, GroupsState};
