use crate::mvi::Reducer;
use crate::state::user::UserAction;
use crate::state::AppAction;

use super::action::PostsAction;
use super::state::PostsState;

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::Posts(action) => match action {
                PostsAction::Fetch {
                    group_name,
                    posts,
                    sequence,
                }
                | PostsAction::Create {
                    group_name,
                    posts,
                    sequence,
                } => state.replace(group_name, posts.clone(), *sequence),
            },
            AppAction::User(UserAction::Logout) => PostsState::default(),
            _ => state,
        }
    }
}
