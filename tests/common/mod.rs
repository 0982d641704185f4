//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;

use forum_client::config::Config;
use forum_client::lifetime::ScopeHandle;
use forum_client::state::user::{login_action, User};
use forum_client::Forum;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// Config pointing every service at `base_url`.
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config
}

/// Forum wired to a mock backend with a short request timeout.
pub fn forum_for(backend: &MockBackend, timeout_seconds: u32, sequence_guard: bool) -> Forum {
    let mut config = config_for(&backend.base_url());
    config.api.timeout_seconds = timeout_seconds;
    config.api.sequence_guard = sequence_guard;
    Forum::new(&config).expect("Failed to build forum")
}

pub fn alice() -> User {
    User {
        user_id: "u1".to_string(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
    }
}

/// Puts `forum` into a signed-in state without touching the network.
pub fn sign_in(forum: &Forum) {
    forum.store().dispatch(login_action(alice(), "tok-1"));
}

pub fn detached() -> ScopeHandle {
    ScopeHandle::detached()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
