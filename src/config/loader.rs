use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::api::Resource;
use crate::config::types::Config;

const APP_DIR: &str = "forum-client";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid TOML: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Bad value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl Config {
    /// `forum-client/config.toml` under the platform config dir, or under
    /// the working directory when the platform has none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(FILE_NAME)
    }

    /// Reads [`Config::config_path`]. Having no file there is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Reads a file the user pointed at. Unlike [`Config::load`], a missing
    /// file is reported.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects service URLs that are not absolute http(s) and zero timeouts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for resource in Resource::ALL {
            check_service_url(resource, self.api.service_url(resource))?;
        }

        for (field, seconds) in [
            ("timeout_seconds", self.api.timeout_seconds),
            ("connect_timeout_seconds", self.api.connect_timeout_seconds),
        ] {
            if seconds == 0 {
                return Err(ConfigError::invalid(field, "must be at least one second"));
            }
        }

        Ok(())
    }
}

fn check_service_url(resource: Resource, raw: &str) -> Result<(), ConfigError> {
    let field = format!("{resource} service URL");
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid(&field, format!("'{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::invalid(field, format!("scheme '{other}' is not http(s)"))),
    }
}
