//! The state container.
//!
//! One [`Store`] is constructed at startup and handed to every consumer by
//! handle. Cloning the handle shares the same state.

mod sequencer;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use crate::mvi::Reducer;
use crate::state::{AppAction, AppReducer, AppState};

pub use sequencer::Sequencer;

/// Callback invoked after every dispatch with the new snapshot.
pub type Listener = Arc<dyn Fn(&Arc<AppState>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared state container with subscribe/dispatch/state.
///
/// Dispatch is synchronous: the root reducer runs under the state lock,
/// then listeners are called outside it in registration order. Dispatches
/// from different threads notify in the order they were reduced. Listeners
/// may dispatch again; nested dispatches are not notified on their own, the
/// outer round repeats with the latest snapshot instead.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<Arc<AppState>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    /// Held from reduce until every listener has run. Reentrant so a
    /// listener on the notifying thread can dispatch.
    notify: ReentrantMutex<()>,
    /// Set while the thread holding `notify` is running listeners.
    notifying: AtomicBool,
    next_subscription: AtomicU64,
    sequencer: Sequencer,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(Arc::new(state)),
                listeners: Mutex::new(Vec::new()),
                notify: ReentrantMutex::new(()),
                notifying: AtomicBool::new(false),
                next_subscription: AtomicU64::new(1),
                sequencer: Sequencer::new(),
            }),
        }
    }

    /// Current immutable snapshot.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.state.lock())
    }

    /// Runs `action` through every slice reducer and notifies listeners.
    ///
    /// Returns the snapshot produced by this dispatch.
    pub fn dispatch(&self, action: AppAction) -> Arc<AppState> {
        let kind = action.kind();
        let _notifying = self.inner.notify.lock();
        let snapshot = {
            let mut guard = self.inner.state.lock();
            let next = AppReducer::reduce(AppState::clone(&guard), &action);
            *guard = Arc::new(next);
            Arc::clone(&guard)
        };

        tracing::debug!(action = %kind, "Dispatched action");

        if self.inner.notifying.swap(true, Ordering::SeqCst) {
            return snapshot;
        }
        let _round = NotifyRound(&self.inner.notifying);

        let mut delivered = snapshot.clone();
        loop {
            let listeners: Vec<Listener> = self
                .inner
                .listeners
                .lock()
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();

            for listener in listeners {
                listener(&delivered);
            }

            let latest = self.state();
            if Arc::ptr_eq(&latest, &delivered) {
                break;
            }
            delivered = latest;
        }

        snapshot
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<AppState>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Next sequence ticket for a posts key.
    pub fn issue_ticket(&self, key: &str) -> u64 {
        self.inner.sequencer.next(key)
    }
}

/// Clears the notifying flag even if a listener panics.
struct NotifyRound<'a>(&'a AtomicBool);

impl Drop for NotifyRound<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
