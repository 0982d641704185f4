//! Gateway error taxonomy.
//!
//! Transport failures (timeout, connection) and server rejections (non-2xx)
//! are kept apart so callers can pull a server-provided message out of a
//! rejection and fall back to a fixed text for everything else.

use std::time::Duration;

use thiserror::Error;

use super::Resource;

/// Errors that can occur during a gateway call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request URL could not be built
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to reach the service or read its response
    #[error("Connection to {resource} service failed: {source}")]
    Connection {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured upper bound
    #[error("Request timeout after {}ms", .duration.as_millis())]
    Timeout { duration: Duration },

    /// Service answered with a non-2xx status
    #[error("Request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message carried in the `error` field of a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message or `fallback`.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message()
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }

    /// Get error type string for structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::ClientBuild(_) => "client_build",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Rejected { .. } => "rejected",
            ApiError::Decode(_) => "decode_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_is_preferred() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("invalid credentials".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "invalid credentials");
        assert_eq!(err.error_type(), "rejected");
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("fallback"), "fallback");

        let empty = ApiError::Rejected {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(empty.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_timeout_uses_fallback() {
        let err = ApiError::Timeout {
            duration: Duration::from_secs(6),
        };
        assert!(err.is_timeout());
        assert_eq!(err.user_message("fallback"), "fallback");
        assert_eq!(err.to_string(), "Request timeout after 6000ms");
    }
}
