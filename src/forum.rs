//! One handle wiring config, gateways and the store together.

use crate::api::{ApiError, Gateway, GroupsApi, PostsApi, VoteKind};
use crate::config::Config;
use crate::controllers::{
    FeedController, GroupsController, MembershipToggle, ResponsesController, SessionController,
    VoteToggle,
};
use crate::lifetime::ScopeHandle;
use crate::store::Store;

/// Entry point for consumers.
///
/// Cloning shares the store and the HTTP connection pool.
#[derive(Clone)]
pub struct Forum {
    store: Store,
    gateway: Gateway,
    sequence_guard: bool,
}

impl Forum {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_store(config, Store::new())
    }

    pub fn with_store(config: &Config, store: Store) -> Result<Self, ApiError> {
        let gateway = Gateway::from_config(&config.api)?;
        tracing::debug!(
            base_url = %config.api.base_url,
            sequence_guard = config.api.sequence_guard,
            "Forum client ready"
        );
        Ok(Self {
            store,
            gateway,
            sequence_guard: config.api.sequence_guard,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn session(&self, scope: ScopeHandle) -> SessionController {
        SessionController::new(self.store.clone(), self.gateway.auth.clone(), scope)
    }

    pub fn feed(&self, scope: ScopeHandle) -> FeedController {
        FeedController::new(
            self.store.clone(),
            self.gateway.posts.clone(),
            scope,
            self.sequence_guard,
        )
    }

    pub fn groups(&self, scope: ScopeHandle) -> GroupsController {
        GroupsController::new(self.store.clone(), self.gateway.groups.clone(), scope)
    }

    pub fn responses(&self, scope: ScopeHandle, post_id: impl Into<String>) -> ResponsesController {
        ResponsesController::new(self.store.clone(), self.gateway.posts.clone(), scope, post_id)
    }

    pub fn vote_toggle(&self, kind: VoteKind, post_id: impl Into<String>) -> VoteToggle<PostsApi> {
        VoteToggle::new(self.store.clone(), self.gateway.posts.clone(), kind, post_id)
    }

    pub fn membership_toggle(&self, group_name: impl Into<String>) -> MembershipToggle<GroupsApi> {
        MembershipToggle::new(self.store.clone(), self.gateway.groups.clone(), group_name)
    }
}
