use crate::state::AppAction;

use super::state::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Login { user: User, token: String },
    Register { user: User, token: String },
    Logout,
}

pub fn login_action(user: User, token: impl Into<String>) -> AppAction {
    AppAction::User(UserAction::Login {
        user,
        token: token.into(),
    })
}

pub fn register_action(user: User, token: impl Into<String>) -> AppAction {
    AppAction::User(UserAction::Register {
        user,
        token: token.into(),
    })
}

/// Ends the session. Also resets the posts slice.
pub fn logout_action() -> AppAction {
    AppAction::User(UserAction::Logout)
}
