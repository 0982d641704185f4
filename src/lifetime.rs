//! Cancellation scopes tied to a consumer's lifetime.
//!
//! A consumer (a screen, a form, a CLI command) owns a [`Scope`] and hands
//! [`ScopeHandle`]s to the work it starts. Once the scope is cancelled or
//! dropped, [`ScopeHandle::run`] yields `None` and the caller skips its
//! dispatch, so late responses never reach the store.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct Scope {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("Scope cancelled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            cancelled: Arc::clone(&self.cancelled),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Lightweight handle for work started inside a scope
#[derive(Clone)]
pub struct ScopeHandle {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    /// A handle whose scope is never cancelled.
    pub fn detached() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub async fn cancelled(&self) {
        // Register interest before reading the flag, otherwise a cancel
        // landing between the two would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Drives `fut` unless the scope is cancelled first.
    ///
    /// Returns `None` when cancelled before or during the call, and also when
    /// the result arrives after cancellation.
    pub async fn run<F, T>(&self, fut: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        if self.is_cancelled() {
            return None;
        }

        let output = tokio::select! {
            output = fut => Some(output),
            _ = self.cancelled() => None,
        };

        output.filter(|_| !self.is_cancelled())
    }
}
