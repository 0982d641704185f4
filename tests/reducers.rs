use std::collections::BTreeSet;
use std::sync::Arc;

use forum_client::mvi::Reducer;
use forum_client::state::alerts::{
    clear_alerts, create_error_alert, create_info_alert, create_success_alert, create_warning_alert,
    AlertKind,
};
use forum_client::state::groups::{create_group_action, fetch_groups_action, Group};
use forum_client::state::posts::{create_post_action, fetch_posts_action, Post, PostsState, FEED_KEY};
use forum_client::state::user::{login_action, logout_action, register_action, User, UserState};
use forum_client::state::{ActionKind, AppAction, AppReducer, AppState};
use forum_client::store::Store;
use parking_lot::Mutex;

fn post(id: &str, group: &str) -> Post {
    Post {
        post_id: id.to_string(),
        group_name: group.to_string(),
        title: format!("title {id}"),
        body: format!("body {id}"),
        created_at: 1_600_000_000,
        posted_by: "u1".to_string(),
    }
}

fn group(name: &str) -> Group {
    Group {
        group_name: name.to_string(),
        description: format!("about {name}"),
        created_by: "u1".to_string(),
    }
}

fn one_of_each() -> Vec<AppAction> {
    vec![
        login_action(User::default(), "t"),
        register_action(User::default(), "t"),
        logout_action(),
        fetch_posts_action("cats", vec![post("1", "cats")]),
        create_post_action("cats", vec![post("2", "cats")]),
        fetch_groups_action(vec![group("cats")]),
        create_group_action(vec![group("dogs")]),
        create_error_alert("e"),
        create_info_alert("i"),
        create_warning_alert("w"),
        create_success_alert("s"),
        clear_alerts(),
    ]
}

#[test]
fn creators_cover_every_kind_once() {
    let kinds: Vec<ActionKind> = one_of_each().iter().map(AppAction::kind).collect();
    let unique: BTreeSet<ActionKind> = kinds.iter().copied().collect();

    let all: BTreeSet<ActionKind> = ActionKind::ALL.iter().copied().collect();

    assert_eq!(kinds.len(), unique.len());
    assert_eq!(unique, all);
}

#[test]
fn creators_are_pure() {
    assert_eq!(one_of_each(), one_of_each());
}

#[test]
fn every_action_is_total_on_default_state() {
    for action in one_of_each() {
        let _ = AppReducer::reduce(AppState::default(), &action);
    }
}

#[test]
fn last_write_wins_per_key() {
    let state = AppReducer::reduce(
        AppState::default(),
        &fetch_posts_action("cats", vec![post("1", "cats")]),
    );
    let state = AppReducer::reduce(state, &fetch_posts_action("cats", vec![post("2", "cats")]));

    assert_eq!(state.posts.get("cats"), Some(&[post("2", "cats")][..]));
    assert_eq!(state.posts.get(FEED_KEY), Some(&[][..]));
}

#[test]
fn login_scenario() {
    let user = User {
        user_id: "u1".to_string(),
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
    };
    let state = AppReducer::reduce(AppState::default(), &login_action(user.clone(), "T"));

    assert_eq!(
        state.user,
        UserState {
            is_signed_in: true,
            user: Some(user),
            token: Some("T".to_string()),
        }
    );
}

#[test]
fn groups_wholesale_scenario() {
    let state = AppReducer::reduce(
        AppState::default(),
        &fetch_groups_action(vec![group("g1"), group("g2")]),
    );
    assert_eq!(state.groups.groups.len(), 2);

    let state = AppReducer::reduce(state, &fetch_groups_action(Vec::new()));
    assert!(state.groups.groups.is_empty());
}

#[test]
fn logout_resets_session_and_posts() {
    let mut state = AppState::default();
    for action in [
        login_action(User::default(), "t"),
        fetch_posts_action(FEED_KEY, vec![post("1", "cats")]),
        fetch_posts_action("cats", vec![post("1", "cats")]),
        fetch_groups_action(vec![group("cats")]),
    ] {
        state = AppReducer::reduce(state, &action);
    }

    let state = AppReducer::reduce(state, &logout_action());
    assert_eq!(state.user, UserState::default());
    assert_eq!(state.posts, PostsState::default());
    assert_eq!(state.groups.groups, vec![group("cats")]);
}

#[test]
fn clear_alert_resets_every_kind() {
    let mut state = AppState::default();
    for action in [
        create_error_alert("e"),
        create_info_alert("i"),
        create_warning_alert("w"),
        create_success_alert("s"),
    ] {
        state = AppReducer::reduce(state, &action);
    }
    for kind in AlertKind::ALL {
        assert!(state.alerts.get(kind).is_some());
    }

    let state = AppReducer::reduce(state, &clear_alerts());
    for kind in AlertKind::ALL {
        assert!(state.alerts.get(kind).is_none());
    }
}

#[test]
fn store_notifies_in_registration_order() {
    let store = Store::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for id in 0..3 {
        let order = Arc::clone(&order);
        store.subscribe(move |_| order.lock().push(id));
    }

    store.dispatch(create_info_alert("hello"));
    assert_eq!(*order.lock(), vec![0, 1, 2]);
}

#[test]
fn store_listener_sees_new_snapshot() {
    let store = Store::new();
    let seen = Arc::new(Mutex::new(None));

    let sink = Arc::clone(&seen);
    store.subscribe(move |state| {
        *sink.lock() = state.alerts.get(AlertKind::Success).map(str::to_string);
    });

    store.dispatch(create_success_alert("saved"));
    assert_eq!(seen.lock().as_deref(), Some("saved"));
}

#[test]
fn store_dispatch_serializes_across_threads() {
    let store = Store::new();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                store.dispatch(fetch_posts_action(format!("g{i}"), vec![post("p", "g")]));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = store.state();
    assert_eq!(state.posts.keys().count(), 9);
}

#[test]
fn store_notifies_concurrent_dispatches_in_reduce_order() {
    let store = Store::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    store.subscribe(move |state| {
        let len = state.groups.groups.len();
        sink.lock().push(len);
        if len == 1 {
            std::thread::sleep(std::time::Duration::from_millis(100));
        }
    });

    let first = {
        let store = store.clone();
        std::thread::spawn(move || {
            store.dispatch(fetch_groups_action(vec![group("a")]));
        })
    };
    std::thread::sleep(std::time::Duration::from_millis(20));
    let second = {
        let store = store.clone();
        std::thread::spawn(move || {
            store.dispatch(fetch_groups_action(vec![group("a"), group("b")]));
        })
    };
    first.join().unwrap();
    second.join().unwrap();

    let seen = seen.lock().clone();
    assert_eq!(seen, vec![1, 2]);
    assert_eq!(seen.last().copied(), Some(store.state().groups.groups.len()));
}

#[test]
fn store_listeners_end_on_latest_snapshot_after_nested_dispatch() {
    let store = Store::new();
    let last = Arc::new(Mutex::new(Vec::new()));

    let inner = store.clone();
    store.subscribe(move |state| {
        if state.user.is_signed_in && state.groups.groups.is_empty() {
            inner.dispatch(fetch_groups_action(vec![group("a")]));
        }
    });
    let sink = Arc::clone(&last);
    store.subscribe(move |state| sink.lock().push(state.groups.groups.len()));

    store.dispatch(login_action(User::default(), "tok"));

    assert_eq!(store.state().groups.groups.len(), 1);
    assert_eq!(last.lock().last().copied(), Some(1));
}
