//! Read-only projections over the state tree.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::state::alerts::AlertKind;
use crate::state::groups::Group;
use crate::state::posts::Post;
use crate::state::user::User;
use crate::state::AppState;
use crate::store::{Store, SubscriptionId};

pub fn is_signed_in(state: &AppState) -> bool {
    state.user.is_signed_in
}

pub fn token(state: &AppState) -> Option<&str> {
    state.user.token.as_deref()
}

pub fn current_user(state: &AppState) -> Option<&User> {
    state.user.user.as_ref()
}

/// Posts stored under `key`; empty when the key was never fetched.
pub fn posts_for<'a>(state: &'a AppState, key: &str) -> &'a [Post] {
    state.posts.get(key).unwrap_or(&[])
}

/// Posts under `key` ordered by `created_at`, newest first.
pub fn posts_newest_first(state: &AppState, key: &str) -> Vec<Post> {
    let mut posts = posts_for(state, key).to_vec();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

pub fn groups(state: &AppState) -> &[Group] {
    &state.groups.groups
}

pub fn find_group<'a>(state: &'a AppState, group_name: &str) -> Option<&'a Group> {
    state.groups.find(group_name)
}

pub fn alert(state: &AppState, kind: AlertKind) -> Option<&str> {
    state.alerts.get(kind)
}

/// Every set alert, in [`AlertKind::ALL`] order.
pub fn active_alerts(state: &AppState) -> Vec<(AlertKind, &str)> {
    AlertKind::ALL
        .iter()
        .filter_map(|kind| state.alerts.get(*kind).map(|message| (*kind, message)))
        .collect()
}

/// Subscribes to a projection of the state.
///
/// `on_change` runs only when the projected value differs from the last one
/// seen, and is called without any lock held. The initial value is computed
/// at subscription time and is not reported.
pub fn watch<T, S, F>(store: &Store, select: S, on_change: F) -> SubscriptionId
where
    T: Clone + PartialEq + Send + 'static,
    S: Fn(&AppState) -> T + Send + Sync + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    let initial = store.state();
    let last = Mutex::new(select(initial.as_ref()));
    store.subscribe(move |state: &Arc<AppState>| {
        let next = select(state.as_ref());
        {
            let mut last = last.lock();
            if *last == next {
                return;
            }
            *last = next.clone();
        }
        on_change(&next);
    })
}
