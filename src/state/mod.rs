//! State tree, actions, and reducers.
//!
//! The tree is a record of independently reduced slices. Every dispatch
//! runs every slice reducer; a slice ignores actions it does not handle.
//!
//! ```text
//! AppState
//! ├── alerts  (AlertsReducer)
//! ├── user    (UserReducer)
//! ├── posts   (PostsReducer)
//! └── groups  (GroupsReducer)
//! ```

pub mod alerts;
pub mod groups;
pub mod posts;
pub mod user;

use std::fmt;

use serde::Serialize;

use crate::mvi::{Action, Reducer, SliceState};

use alerts::{AlertAction, AlertsReducer, AlertsState};
use groups::{GroupsAction, GroupsReducer, GroupsState};
use posts::{PostsAction, PostsReducer, PostsState};
use user::{UserAction, UserReducer, UserState};

/// Every message the store accepts, tagged by the slice that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    User(UserAction),
    Posts(PostsAction),
    Groups(GroupsAction),
    Alerts(AlertAction),
}

impl Action for AppAction {}

/// Flat action type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    Login,
    Register,
    Logout,
    FetchPosts,
    CreatePost,
    FetchGroups,
    CreateGroup,
    ErrorAlert,
    InfoAlert,
    WarningAlert,
    SuccessAlert,
    ClearAlert,
}

impl ActionKind {
    pub const ALL: [ActionKind; 12] = [
        ActionKind::Login,
        ActionKind::Register,
        ActionKind::Logout,
        ActionKind::FetchPosts,
        ActionKind::CreatePost,
        ActionKind::FetchGroups,
        ActionKind::CreateGroup,
        ActionKind::ErrorAlert,
        ActionKind::InfoAlert,
        ActionKind::WarningAlert,
        ActionKind::SuccessAlert,
        ActionKind::ClearAlert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Login => "LOGIN",
            ActionKind::Register => "REGISTER",
            ActionKind::Logout => "LOGOUT",
            ActionKind::FetchPosts => "FETCH_POSTS",
            ActionKind::CreatePost => "CREATE_POST",
            ActionKind::FetchGroups => "FETCH_GROUPS",
            ActionKind::CreateGroup => "CREATE_GROUP",
            ActionKind::ErrorAlert => "ERROR_ALERT",
            ActionKind::InfoAlert => "INFO_ALERT",
            ActionKind::WarningAlert => "WARNING_ALERT",
            ActionKind::SuccessAlert => "SUCCESS_ALERT",
            ActionKind::ClearAlert => "CLEAR_ALERT",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            AppAction::User(UserAction::Login { .. }) => ActionKind::Login,
            AppAction::User(UserAction::Register { .. }) => ActionKind::Register,
            AppAction::User(UserAction::Logout) => ActionKind::Logout,
            AppAction::Posts(PostsAction::Fetch { .. }) => ActionKind::FetchPosts,
            AppAction::Posts(PostsAction::Create { .. }) => ActionKind::CreatePost,
            AppAction::Groups(GroupsAction::Fetch { .. }) => ActionKind::FetchGroups,
            AppAction::Groups(GroupsAction::Create { .. }) => ActionKind::CreateGroup,
            AppAction::Alerts(AlertAction::Error { .. }) => ActionKind::ErrorAlert,
            AppAction::Alerts(AlertAction::Info { .. }) => ActionKind::InfoAlert,
            AppAction::Alerts(AlertAction::Warning { .. }) => ActionKind::WarningAlert,
            AppAction::Alerts(AlertAction::Success { .. }) => ActionKind::SuccessAlert,
            AppAction::Alerts(AlertAction::Clear) => ActionKind::ClearAlert,
        }
    }
}

/// The whole state tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub alerts: AlertsState,
    pub user: UserState,
    pub posts: PostsState,
    pub groups: GroupsState,
}

impl SliceState for AppState {}

/// Structural combination of the slice reducers.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        let AppState {
            alerts,
            user,
            posts,
            groups,
        } = state;

        AppState {
            alerts: AlertsReducer::reduce(alerts, action),
            user: UserReducer::reduce(user, action),
            posts: PostsReducer::reduce(posts, action),
            groups: GroupsReducer::reduce(groups, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::alerts::create_error_alert;
    use crate::state::posts::fetch_posts_action;
    use crate::state::user::{login_action, logout_action, User};

    #[test]
    fn action_kind_labels_are_unique() {
        let mut labels: Vec<&str> = ActionKind::ALL.iter().map(ActionKind::as_str).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ActionKind::ALL.len());
    }

    #[test]
    fn logout_resets_user_and_posts_only() {
        let state = AppReducer::reduce(AppState::default(), &login_action(User::default(), "t"));
        let state = AppReducer::reduce(state, &fetch_posts_action("cats", Vec::new()));
        let state = AppReducer::reduce(state, &create_error_alert("boom"));

        let state = AppReducer::reduce(state, &logout_action());

        assert_eq!(state.user, UserState::default());
        assert_eq!(state.posts, PostsState::default());
        assert_eq!(state.alerts.error.as_deref(), Some("boom"));
    }
}
