use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{PostResponse, PostsApi};
use crate::lifetime::ScopeHandle;
use crate::store::Store;
use crate::validation::require;

use super::{require_token, surface, FlowError, RESPONSES_FETCH_FAILED, RESPONSE_CREATE_FAILED};

/// Responses to one post, kept locally rather than in the store.
#[derive(Clone)]
pub struct ResponsesController {
    store: Store,
    posts: PostsApi,
    scope: ScopeHandle,
    post_id: String,
    responses: Arc<Mutex<Vec<PostResponse>>>,
}

impl ResponsesController {
    pub fn new(store: Store, posts: PostsApi, scope: ScopeHandle, post_id: impl Into<String>) -> Self {
        Self {
            store,
            posts,
            scope,
            post_id: post_id.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    /// Snapshot of the local list, newest first after a [`respond`].
    ///
    /// [`respond`]: Self::respond
    pub fn responses(&self) -> Vec<PostResponse> {
        self.responses.lock().clone()
    }

    pub async fn load(&self) -> Result<Vec<PostResponse>, FlowError> {
        let token = require_token(&self.store)?;

        let result = self
            .scope
            .run(self.posts.fetch_responses(&self.post_id, &token))
            .await
            .ok_or(FlowError::Cancelled)?;

        match result {
            Ok(responses) => {
                *self.responses.lock() = responses.clone();
                Ok(responses)
            }
            Err(e) => Err(surface(&self.store, e, RESPONSES_FETCH_FAILED)),
        }
    }

    pub async fn respond(&self, text: &str) -> Result<PostResponse, FlowError> {
        require("Response", text)?;
        let token = require_token(&self.store)?;

        let result = self
            .scope
            .run(self.posts.create_response(&self.post_id, text, &token))
            .await
            .ok_or(FlowError::Cancelled)?;

        match result {
            Ok(response) => {
                self.responses.lock().insert(0, response.clone());
                Ok(response)
            }
            Err(e) => Err(surface(&self.store, e, RESPONSE_CREATE_FAILED)),
        }
    }
}
