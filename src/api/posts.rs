use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::controllers::VoteGateway;
use crate::state::posts::Post;

use super::client::{decode_enveloped, succeeded, ServiceClient};
use super::error::ApiError;

/// A response (reply) to a post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(default)]
    pub response_id: String,
    #[serde(default)]
    pub post_id: String,
    #[serde(default, alias = "reponse")]
    pub response: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub posted_by: String,
}

/// Upvote or downvote; both live under the same post with their own path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteKind {
    Upvote,
    Downvote,
}

impl VoteKind {
    pub fn segment(&self) -> &'static str {
        match self {
            VoteKind::Upvote => "upvotes",
            VoteKind::Downvote => "downvotes",
        }
    }
}

/// Client for `/api/v1/posts`.
#[derive(Clone)]
pub struct PostsApi {
    client: ServiceClient,
}

impl PostsApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// The signed-in user's home feed.
    pub async fn fetch_feed(&self, token: &str) -> Result<Vec<Post>, ApiError> {
        let value = self.client.get(&["feed"], &[("token", token)]).await?;
        decode_enveloped(value, "posts")
    }

    pub async fn fetch_group_posts(&self, group_name: &str, token: &str) -> Result<Vec<Post>, ApiError> {
        let value = self
            .client
            .get(&[], &[("group", group_name), ("token", token)])
            .await?;
        decode_enveloped(value, "posts")
    }

    pub async fn create_post(
        &self,
        title: &str,
        body: &str,
        group_name: &str,
        token: &str,
    ) -> Result<Post, ApiError> {
        let request = json!({
            "post": {
                "title": title,
                "post": body,
                "groupName": group_name,
            },
            "token": token,
        });
        let value = self.client.post(&[], &request).await?;
        decode_enveloped(value, "post")
    }

    /// Current count; the body is `{"upvotes": n}` or `{"downvotes": n}`.
    pub async fn vote_count(&self, kind: VoteKind, post_id: &str, token: &str) -> Result<i64, ApiError> {
        let value = self
            .client
            .get(&[post_id, kind.segment(), "count"], &[("token", token)])
            .await?;
        decode_enveloped(value, kind.segment())
    }

    pub async fn add_vote(&self, kind: VoteKind, post_id: &str, token: &str) -> bool {
        succeeded(
            self.client
                .post(&[post_id, kind.segment()], &json!({ "token": token }))
                .await,
        )
    }

    pub async fn remove_vote(&self, kind: VoteKind, post_id: &str, token: &str) -> bool {
        succeeded(
            self.client
                .delete(&[post_id, kind.segment()], &json!({ "token": token }))
                .await,
        )
    }

    pub async fn upvote_count(&self, post_id: &str, token: &str) -> Result<i64, ApiError> {
        self.vote_count(VoteKind::Upvote, post_id, token).await
    }

    pub async fn add_upvote(&self, post_id: &str, token: &str) -> bool {
        self.add_vote(VoteKind::Upvote, post_id, token).await
    }

    pub async fn remove_upvote(&self, post_id: &str, token: &str) -> bool {
        self.remove_vote(VoteKind::Upvote, post_id, token).await
    }

    /// Any 2xx answer counts as "yes".
    pub async fn has_upvoted(&self, post_id: &str, token: &str) -> bool {
        succeeded(
            self.client
                .get(&[post_id, VoteKind::Upvote.segment()], &[("token", token)])
                .await,
        )
    }

    pub async fn downvote_count(&self, post_id: &str, token: &str) -> Result<i64, ApiError> {
        self.vote_count(VoteKind::Downvote, post_id, token).await
    }

    pub async fn add_downvote(&self, post_id: &str, token: &str) -> bool {
        self.add_vote(VoteKind::Downvote, post_id, token).await
    }

    pub async fn remove_downvote(&self, post_id: &str, token: &str) -> bool {
        self.remove_vote(VoteKind::Downvote, post_id, token).await
    }

    pub async fn fetch_responses(&self, post_id: &str, token: &str) -> Result<Vec<PostResponse>, ApiError> {
        let value = self
            .client
            .get(&[post_id, "responses"], &[("token", token)])
            .await?;
        decode_enveloped(value, "responses")
    }

    pub async fn create_response(
        &self,
        post_id: &str,
        text: &str,
        token: &str,
    ) -> Result<PostResponse, ApiError> {
        let body = json!({
            "token": token,
            "response": text,
        });
        let value = self.client.post(&[post_id, "responses"], &body).await?;
        decode_enveloped(value, "response")
    }
}

impl VoteGateway for PostsApi {
    async fn vote_count(&self, kind: VoteKind, post_id: &str, token: &str) -> Result<i64, ApiError> {
        PostsApi::vote_count(self, kind, post_id, token).await
    }

    async fn add_vote(&self, kind: VoteKind, post_id: &str, token: &str) -> bool {
        PostsApi::add_vote(self, kind, post_id, token).await
    }

    async fn remove_vote(&self, kind: VoteKind, post_id: &str, token: &str) -> bool {
        PostsApi::remove_vote(self, kind, post_id, token).await
    }
}
