use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// Account details returned by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Session slice.
///
/// `token` is `Some` exactly when `is_signed_in` is true. Only the user
/// reducer builds non-default values, and it always sets both together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub is_signed_in: bool,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SliceState for UserState {}

impl UserState {
    pub(crate) fn signed_in(user: User, token: String) -> Self {
        Self {
            is_signed_in: true,
            user: Some(user),
            token: Some(token),
        }
    }
}
