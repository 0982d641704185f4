use serde::Deserialize;
use serde_json::json;

use crate::state::user::User;

use super::client::{decode_enveloped, succeeded, ServiceClient};
use super::error::ApiError;

/// Body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Client for `/api/v1/auth`.
#[derive(Clone)]
pub struct AuthApi {
    client: ServiceClient,
}

impl AuthApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({
            "user": {
                "email": email,
                "password": password,
            }
        });
        let value = self.client.post(&["login"], &body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = json!({
            "user": {
                "email": email,
                "username": username,
                "password": password,
            }
        });
        let value = self.client.post(&["register"], &body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn logout(&self, token: &str) -> bool {
        succeeded(self.client.post(&["logout"], &json!({ "token": token })).await)
    }

    pub async fn fetch_user(&self, user_id: &str, token: &str) -> Result<User, ApiError> {
        let value = self
            .client
            .get(&["user", user_id], &[("token", token)])
            .await?;
        decode_enveloped(value, "user")
    }
}
