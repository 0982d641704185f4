use crate::api::{AuthApi, AuthResponse};
use crate::lifetime::ScopeHandle;
use crate::state::user::{login_action, logout_action, register_action, User};
use crate::store::Store;
use crate::validation::{validate_login, validate_registration};

use super::{require_token, surface, FlowError, LOGIN_FAILED, REGISTER_FAILED};

/// Login, registration and logout.
#[derive(Clone)]
pub struct SessionController {
    store: Store,
    auth: AuthApi,
    scope: ScopeHandle,
}

impl SessionController {
    pub fn new(store: Store, auth: AuthApi, scope: ScopeHandle) -> Self {
        Self { store, auth, scope }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, FlowError> {
        validate_login(email, password)?;

        let result = self
            .scope
            .run(self.auth.login(email, password))
            .await
            .ok_or(FlowError::Cancelled)?;

        match result {
            Ok(AuthResponse { user, token }) => {
                tracing::info!(user_id = %user.user_id, "Signed in");
                self.store.dispatch(login_action(user.clone(), token));
                Ok(user)
            }
            Err(e) => Err(surface(&self.store, e, LOGIN_FAILED)),
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User, FlowError> {
        validate_registration(username, email, password, confirm_password)?;

        let result = self
            .scope
            .run(self.auth.register(username, email, password))
            .await
            .ok_or(FlowError::Cancelled)?;

        match result {
            Ok(AuthResponse { user, token }) => {
                tracing::info!(user_id = %user.user_id, "Registered");
                self.store.dispatch(register_action(user.clone(), token));
                Ok(user)
            }
            Err(e) => Err(surface(&self.store, e, REGISTER_FAILED)),
        }
    }

    /// Ends the session if the service accepts the logout.
    ///
    /// Returns whether the session was ended. A refused logout leaves the
    /// session untouched and raises no alert.
    pub async fn logout(&self) -> Result<bool, FlowError> {
        let token = require_token(&self.store)?;

        let accepted = self
            .scope
            .run(self.auth.logout(&token))
            .await
            .ok_or(FlowError::Cancelled)?;

        if accepted {
            tracing::info!("Signed out");
            self.store.dispatch(logout_action());
        }
        Ok(accepted)
    }

    /// Profile of any user, e.g. for showing who wrote a post.
    pub async fn fetch_user(&self, user_id: &str) -> Result<User, FlowError> {
        let token = require_token(&self.store)?;

        self.scope
            .run(self.auth.fetch_user(user_id, &token))
            .await
            .ok_or(FlowError::Cancelled)?
            .map_err(FlowError::Api)
    }
}
