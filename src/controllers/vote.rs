use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::VoteKind;
use crate::selectors;
use crate::store::{Store, SubscriptionId};

use super::traits::VoteGateway;
use super::{require_token, FlowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteState {
    pub on: bool,
    pub count: i64,
    /// Set once a count load has finished, successfully or not.
    pub loaded: bool,
}

/// Upvote or downvote button for one post.
///
/// A click always flips `on`, even when the call fails. The counter moves
/// only when the call succeeds, so the two can drift apart; the server is
/// the authority and the next count load corrects it.
pub struct VoteToggle<G: VoteGateway> {
    gateway: G,
    store: Store,
    kind: VoteKind,
    post_id: String,
    state: Arc<Mutex<VoteState>>,
    subscription: SubscriptionId,
}

impl<G: VoteGateway> VoteToggle<G> {
    /// Starts off with a zero count. Resets whenever the session ends.
    pub fn new(store: Store, gateway: G, kind: VoteKind, post_id: impl Into<String>) -> Self {
        let state = Arc::new(Mutex::new(VoteState::default()));

        let reset = Arc::clone(&state);
        let subscription = selectors::watch(&store, selectors::is_signed_in, move |signed_in| {
            if !*signed_in {
                *reset.lock() = VoteState::default();
            }
        });

        Self {
            gateway,
            store,
            kind,
            post_id: post_id.into(),
            state,
            subscription,
        }
    }

    pub fn kind(&self) -> VoteKind {
        self.kind
    }

    pub fn state(&self) -> VoteState {
        *self.state.lock()
    }

    /// Loads the server count. Any failure reads as zero; signed out does
    /// nothing.
    pub async fn load_count(&self) -> VoteState {
        let Ok(token) = require_token(&self.store) else {
            return self.state();
        };

        let count = self
            .gateway
            .vote_count(self.kind, &self.post_id, &token)
            .await
            .unwrap_or(0);

        let mut state = self.state.lock();
        if selectors::is_signed_in(&self.store.state()) {
            state.count = count;
            state.loaded = true;
        }
        *state
    }

    pub async fn toggle(&self) -> Result<VoteState, FlowError> {
        let token = require_token(&self.store)?;
        let next = !self.state.lock().on;

        let accepted = if next {
            self.gateway.add_vote(self.kind, &self.post_id, &token).await
        } else {
            self.gateway.remove_vote(self.kind, &self.post_id, &token).await
        };

        tracing::debug!(post_id = %self.post_id, kind = self.kind.segment(), next, accepted, "Vote toggled");

        let mut state = self.state.lock();
        // The session may have ended while the call was in flight.
        if selectors::is_signed_in(&self.store.state()) {
            if accepted {
                state.count += if next { 1 } else { -1 };
            }
            state.on = next;
        }
        Ok(*state)
    }
}

impl<G: VoteGateway> Drop for VoteToggle<G> {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::state::user::{login_action, logout_action, User};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeVotes {
        count: Option<i64>,
        fail_writes: AtomicBool,
        calls: AtomicUsize,
    }

    impl VoteGateway for Arc<FakeVotes> {
        async fn vote_count(&self, _kind: VoteKind, _post_id: &str, _token: &str) -> Result<i64, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.count.ok_or(ApiError::Decode("no count".to_string()))
        }

        async fn add_vote(&self, _kind: VoteKind, _post_id: &str, _token: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            !self.fail_writes.load(Ordering::SeqCst)
        }

        async fn remove_vote(&self, _kind: VoteKind, _post_id: &str, _token: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            !self.fail_writes.load(Ordering::SeqCst)
        }
    }

    fn signed_in_store() -> Store {
        let store = Store::new();
        store.dispatch(login_action(User::default(), "tok"));
        store
    }

    #[tokio::test]
    async fn successful_toggles_move_counter() {
        let fake = Arc::new(FakeVotes {
            count: Some(4),
            ..FakeVotes::default()
        });
        let toggle = VoteToggle::new(signed_in_store(), Arc::clone(&fake), VoteKind::Upvote, "p1");

        toggle.load_count().await;
        let state = toggle.toggle().await.unwrap();
        assert_eq!((state.on, state.count), (true, 5));

        let state = toggle.toggle().await.unwrap();
        assert_eq!((state.on, state.count), (false, 4));
    }

    #[tokio::test]
    async fn failed_call_still_flips() {
        let fake = Arc::new(FakeVotes {
            count: Some(2),
            ..FakeVotes::default()
        });
        fake.fail_writes.store(true, Ordering::SeqCst);
        let toggle = VoteToggle::new(signed_in_store(), Arc::clone(&fake), VoteKind::Downvote, "p1");

        toggle.load_count().await;
        let state = toggle.toggle().await.unwrap();
        assert!(state.on);
        assert_eq!(state.count, 2);
    }

    #[tokio::test]
    async fn count_failure_reads_zero() {
        let fake = Arc::new(FakeVotes::default());
        let toggle = VoteToggle::new(signed_in_store(), fake, VoteKind::Upvote, "p1");

        let state = toggle.load_count().await;
        assert_eq!(state.count, 0);
        assert!(state.loaded);
    }

    #[tokio::test]
    async fn signed_out_skips_fetch() {
        let fake = Arc::new(FakeVotes {
            count: Some(9),
            ..FakeVotes::default()
        });
        let toggle = VoteToggle::new(Store::new(), Arc::clone(&fake), VoteKind::Upvote, "p1");

        let state = toggle.load_count().await;
        assert!(!state.loaded);
        assert!(matches!(toggle.toggle().await, Err(FlowError::NotSignedIn)));
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn logout_resets_and_drop_unsubscribes() {
        let store = signed_in_store();
        let fake = Arc::new(FakeVotes {
            count: Some(3),
            ..FakeVotes::default()
        });
        let toggle = VoteToggle::new(store.clone(), fake, VoteKind::Upvote, "p1");
        toggle.load_count().await;
        toggle.toggle().await.unwrap();

        store.dispatch(logout_action());
        assert_eq!(toggle.state(), VoteState::default());

        let before = store.subscriber_count();
        drop(toggle);
        assert_eq!(store.subscriber_count(), before - 1);
    }
}
