use std::future::Future;

use crate::api::{ApiError, VoteKind};

/// Vote calls the vote toggle depends on.
pub trait VoteGateway: Send + Sync {
    fn vote_count(
        &self,
        kind: VoteKind,
        post_id: &str,
        token: &str,
    ) -> impl Future<Output = Result<i64, ApiError>> + Send;

    fn add_vote(&self, kind: VoteKind, post_id: &str, token: &str) -> impl Future<Output = bool> + Send;

    fn remove_vote(&self, kind: VoteKind, post_id: &str, token: &str) -> impl Future<Output = bool> + Send;
}

/// Membership calls the membership toggle depends on.
pub trait MembershipGateway: Send + Sync {
    fn is_member(&self, group_name: &str, user_id: &str, token: &str) -> impl Future<Output = bool> + Send;

    fn add_membership(&self, group_name: &str, token: &str) -> impl Future<Output = bool> + Send;

    fn remove_membership(&self, group_name: &str, token: &str) -> impl Future<Output = bool> + Send;
}
