mod action;
mod reducer;
mod state;

pub use action::{login_action, logout_action, register_action, UserAction};
pub use reducer::UserReducer;
pub use state::{User, UserState};
