use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::Resource;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host (+ port) shared by all services (e.g., "http://127.0.0.1:5000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Override for the auth service host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    /// Override for the groups service host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups_url: Option<String>,
    /// Override for the posts service host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_url: Option<String>,
    /// Upper bound for a whole request in seconds (default: 6).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 3).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Drop post-list responses that resolve after a newer one (default: false).
    #[serde(default)]
    pub sequence_guard: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout() -> u32 {
    6
}

fn default_connect_timeout() -> u32 {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_url: None,
            groups_url: None,
            posts_url: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            sequence_guard: false,
        }
    }
}

impl ApiConfig {
    /// Host for `resource`, falling back to `base_url`.
    pub fn service_url(&self, resource: Resource) -> &str {
        let override_url = match resource {
            Resource::Auth => self.auth_url.as_deref(),
            Resource::Groups => self.groups_url.as_deref(),
            Resource::Posts => self.posts_url.as_deref(),
        };
        override_url.unwrap_or(&self.base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}
