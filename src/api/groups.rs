use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::controllers::MembershipGateway;
use crate::state::groups::Group;

use super::client::{decode_enveloped, succeeded, ServiceClient};
use super::error::ApiError;

/// Group header as returned by `GET /groups/:name`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "created_by")]
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Client for `/api/v1/groups`.
#[derive(Clone)]
pub struct GroupsApi {
    client: ServiceClient,
}

impl GroupsApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    pub async fn fetch_groups(&self, token: &str) -> Result<Vec<Group>, ApiError> {
        let value = self.client.get(&[], &[("token", token)]).await?;
        decode_enveloped(value, "groups")
    }

    pub async fn fetch_group_details(
        &self,
        group_name: &str,
        token: &str,
    ) -> Result<GroupDetail, ApiError> {
        let value = self.client.get(&[group_name], &[("token", token)]).await?;
        decode_enveloped(value, "group")
    }

    /// Creates a group and returns it as it should appear in the list.
    ///
    /// The service may answer with the full group or only its id; in the
    /// latter case the group is rebuilt from the request and `created_by`
    /// is left empty for the caller to fill in.
    pub async fn create_group(
        &self,
        name: &str,
        description: &str,
        token: &str,
    ) -> Result<Group, ApiError> {
        let body = json!({
            "token": token,
            "group": {
                "name": name,
                "description": description,
            }
        });
        let value = self.client.post(&[], &body).await?;
        Ok(created_group(value, name, description))
    }

    pub async fn is_member(&self, group_name: &str, user_id: &str, token: &str) -> bool {
        succeeded(
            self.client
                .get(&[group_name, "members", user_id], &[("token", token)])
                .await,
        )
    }

    pub async fn add_membership(&self, group_name: &str, token: &str) -> bool {
        succeeded(
            self.client
                .post(&[group_name, "members"], &json!({ "token": token }))
                .await,
        )
    }

    pub async fn remove_membership(&self, group_name: &str, token: &str) -> bool {
        succeeded(
            self.client
                .delete(&[group_name, "members"], &json!({ "token": token }))
                .await,
        )
    }
}

fn created_group(value: Value, name: &str, description: &str) -> Group {
    let candidate = match value {
        Value::Object(mut map) if map.contains_key("group") => map.remove("group"),
        other => Some(other),
    };

    candidate
        .and_then(|v| serde_json::from_value::<Group>(v).ok())
        .filter(|group| !group.group_name.is_empty())
        .unwrap_or_else(|| Group {
            group_name: name.to_string(),
            description: description.to_string(),
            created_by: String::new(),
        })
}

impl MembershipGateway for GroupsApi {
    async fn is_member(&self, group_name: &str, user_id: &str, token: &str) -> bool {
        GroupsApi::is_member(self, group_name, user_id, token).await
    }

    async fn add_membership(&self, group_name: &str, token: &str) -> bool {
        GroupsApi::add_membership(self, group_name, token).await
    }

    async fn remove_membership(&self, group_name: &str, token: &str) -> bool {
        GroupsApi::remove_membership(self, group_name, token).await
    }
}
