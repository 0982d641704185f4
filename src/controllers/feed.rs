use crate::api::PostsApi;
use crate::lifetime::ScopeHandle;
use crate::selectors;
use crate::state::posts::{create_post_action, fetch_posts_action, sequenced, Post, FEED_KEY};
use crate::state::AppAction;
use crate::store::Store;
use crate::validation::require;

use super::{
    require_same_session, require_token, surface, FlowError, FEED_FAILED, POST_CREATE_FAILED,
};

/// Post lists: the home feed and per-group lists.
#[derive(Clone)]
pub struct FeedController {
    store: Store,
    posts: PostsApi,
    scope: ScopeHandle,
    sequence_guard: bool,
}

impl FeedController {
    pub fn new(store: Store, posts: PostsApi, scope: ScopeHandle, sequence_guard: bool) -> Self {
        Self {
            store,
            posts,
            scope,
            sequence_guard,
        }
    }

    /// Fetches the list for `key` ([`FEED_KEY`] or a group name) and
    /// replaces it in the store.
    ///
    /// Without the sequence guard, concurrent loads for the same key apply
    /// in the order they resolve.
    pub async fn load(&self, key: &str) -> Result<Vec<Post>, FlowError> {
        let token = require_token(&self.store)?;
        let ticket = self.ticket(key);

        let request = async {
            if key == FEED_KEY {
                self.posts.fetch_feed(&token).await
            } else {
                self.posts.fetch_group_posts(key, &token).await
            }
        };

        let result = self.scope.run(request).await.ok_or(FlowError::Cancelled)?;

        match result {
            Ok(posts) => {
                require_same_session(&self.store, &token)?;
                tracing::debug!(key, count = posts.len(), ?ticket, "Loaded posts");
                self.dispatch(fetch_posts_action(key, posts.clone()), ticket);
                Ok(posts)
            }
            Err(e) => Err(surface(&self.store, e, FEED_FAILED)),
        }
    }

    /// Creates a post and prepends it to the group's list as it stands when
    /// the response arrives.
    pub async fn create_post(&self, group_name: &str, title: &str, body: &str) -> Result<Post, FlowError> {
        require("Group name", group_name)?;
        require("Title", title)?;
        require("Post", body)?;
        let token = require_token(&self.store)?;

        let result = self
            .scope
            .run(self.posts.create_post(title, body, group_name, &token))
            .await
            .ok_or(FlowError::Cancelled)?;

        match result {
            Ok(post) => {
                require_same_session(&self.store, &token)?;
                let mut posts = Vec::with_capacity(1);
                posts.push(post.clone());
                posts.extend_from_slice(selectors::posts_for(&self.store.state(), group_name));

                let ticket = self.ticket(group_name);
                self.dispatch(create_post_action(group_name, posts), ticket);
                Ok(post)
            }
            Err(e) => Err(surface(&self.store, e, POST_CREATE_FAILED)),
        }
    }

    fn ticket(&self, key: &str) -> Option<u64> {
        self.sequence_guard.then(|| self.store.issue_ticket(key))
    }

    fn dispatch(&self, action: AppAction, ticket: Option<u64>) {
        let action = match ticket {
            Some(ticket) => sequenced(action, ticket),
            None => action,
        };
        self.store.dispatch(action);
    }
}
