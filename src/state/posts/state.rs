use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// Key under which the signed-in user's home feed is stored.
pub const FEED_KEY: &str = "feed";

/// A post as returned by the posts service.
///
/// The body travels under the wire key `post`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "post")]
    pub body: String,
    /// Epoch seconds.
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub posted_by: String,
}

/// Posts keyed by group name, plus the [`FEED_KEY`] entry.
///
/// Each key's list is replaced wholesale; lists are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostsState {
    by_key: BTreeMap<String, Vec<Post>>,
    /// Last applied sequence number per key. Only sequenced actions touch it.
    #[serde(skip)]
    applied: BTreeMap<String, u64>,
}

impl Default for PostsState {
    fn default() -> Self {
        let mut by_key = BTreeMap::new();
        by_key.insert(FEED_KEY.to_string(), Vec::new());
        Self {
            by_key,
            applied: BTreeMap::new(),
        }
    }
}

impl SliceState for PostsState {}

impl PostsState {
    pub fn get(&self, key: &str) -> Option<&[Post]> {
        self.by_key.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_key.keys().map(String::as_str)
    }

    pub fn last_applied(&self, key: &str) -> Option<u64> {
        self.applied.get(key).copied()
    }

    pub(crate) fn replace(mut self, key: &str, posts: Vec<Post>, sequence: Option<u64>) -> Self {
        if let Some(sequence) = sequence {
            if self.last_applied(key).is_some_and(|last| last >= sequence) {
                tracing::debug!(key, sequence, "Dropping stale posts response");
                return self;
            }
            self.applied.insert(key.to_string(), sequence);
        }
        self.by_key.insert(key.to_string(), posts);
        self
    }
}
