use std::sync::Arc;

use parking_lot::Mutex;

use crate::selectors;
use crate::store::{Store, SubscriptionId};
use crate::validation::require;

use super::traits::MembershipGateway;
use super::{require_token, FlowError};

/// Join/leave button for one group.
///
/// Unlike [`VoteToggle`](super::VoteToggle), the flag only flips when the
/// call succeeds.
pub struct MembershipToggle<G: MembershipGateway> {
    gateway: G,
    store: Store,
    group_name: String,
    is_member: Arc<Mutex<bool>>,
    subscription: SubscriptionId,
}

impl<G: MembershipGateway> MembershipToggle<G> {
    pub fn new(store: Store, gateway: G, group_name: impl Into<String>) -> Self {
        let is_member = Arc::new(Mutex::new(false));

        let reset = Arc::clone(&is_member);
        let subscription = selectors::watch(&store, selectors::is_signed_in, move |signed_in| {
            if !*signed_in {
                *reset.lock() = false;
            }
        });

        Self {
            gateway,
            store,
            group_name: group_name.into(),
            is_member,
            subscription,
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn is_member(&self) -> bool {
        *self.is_member.lock()
    }

    /// Asks the service whether the current user is a member.
    pub async fn refresh(&self) -> Result<bool, FlowError> {
        let token = require_token(&self.store)?;
        let user_id = selectors::current_user(&self.store.state())
            .map(|user| user.user_id.clone())
            .ok_or(FlowError::NotSignedIn)?;
        require("User id", &user_id)?;

        let member = self.gateway.is_member(&self.group_name, &user_id, &token).await;

        let mut is_member = self.is_member.lock();
        if selectors::is_signed_in(&self.store.state()) {
            *is_member = member;
        }
        Ok(*is_member)
    }

    /// Leaves when a member, joins otherwise. Returns the resulting flag.
    pub async fn toggle(&self) -> Result<bool, FlowError> {
        let token = require_token(&self.store)?;
        let current = self.is_member();

        let accepted = if current {
            self.gateway.remove_membership(&self.group_name, &token).await
        } else {
            self.gateway.add_membership(&self.group_name, &token).await
        };

        tracing::debug!(group = %self.group_name, joining = !current, accepted, "Membership toggled");

        let mut is_member = self.is_member.lock();
        if accepted && selectors::is_signed_in(&self.store.state()) {
            *is_member = !current;
        }
        Ok(*is_member)
    }
}

impl<G: MembershipGateway> Drop for MembershipToggle<G> {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
