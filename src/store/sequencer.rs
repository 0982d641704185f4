//! Monotonic tickets per resource key.

use std::collections::HashMap;

use parking_lot::Mutex;

/// Issues increasing ticket numbers per key, starting at 1.
///
/// A ticket is taken when a fetch is issued. The reducer drops any response
/// whose ticket is not newer than the last one applied for the same key.
#[derive(Debug, Default)]
pub struct Sequencer {
    last: Mutex<HashMap<String, u64>>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, key: &str) -> u64 {
        let mut last = self.last.lock();
        let counter = last.entry(key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }
}
