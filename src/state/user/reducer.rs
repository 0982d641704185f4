use crate::mvi::Reducer;
use crate::state::AppAction;

use super::action::UserAction;
use super::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        let AppAction::User(action) = action else {
            return state;
        };

        match action {
            UserAction::Login { user, token } | UserAction::Register { user, token } => {
                UserState::signed_in(user.clone(), token.clone())
            }
            UserAction::Logout => UserState::default(),
        }
    }
}
