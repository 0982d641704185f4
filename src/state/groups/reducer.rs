use crate::mvi::Reducer;
use crate::state::AppAction;

use super::action::GroupsAction;
use super::state::GroupsState;

pub struct GroupsReducer;

impl Reducer for GroupsReducer {
    type State = GroupsState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        let AppAction::Groups(action) = action else {
            return state;
        };

        match action {
            GroupsAction::Fetch { groups } | GroupsAction::Create { groups } => GroupsState {
                groups: groups.clone(),
            },
        }
    }
}
