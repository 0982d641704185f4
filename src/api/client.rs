use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::timeout;
use uuid::Uuid;

use super::error::ApiError;
use super::Resource;

/// HTTP client bound to one resource root, e.g. `http://host/api/v1/posts`.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    root: Url,
    resource: Resource,
    timeout: Duration,
}

impl ServiceClient {
    pub fn new(
        http: Client,
        base_url: &str,
        resource: Resource,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let raw = format!("{}/api/v1/{}", base_url.trim_end_matches('/'), resource.path());
        let root = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http,
            root,
            resource,
            timeout,
        })
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds `root/segment/...?key=value`. Segments are percent-encoded.
    pub fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.root.clone();
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl {
                    url: self.root.to_string(),
                    reason: "URL cannot be a base".to_string(),
                })?
                .pop_if_empty()
                .extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub async fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = self.url(segments, query)?;
        self.send(Method::GET, url, None).await
    }

    pub async fn post(&self, segments: &[&str], body: &Value) -> Result<Value, ApiError> {
        let url = self.url(segments, &[])?;
        self.send(Method::POST, url, Some(body)).await
    }

    /// DELETE with a JSON body, which is where the token goes.
    pub async fn delete(&self, segments: &[&str], body: &Value) -> Result<Value, ApiError> {
        let url = self.url(segments, &[])?;
        self.send(Method::DELETE, url, Some(body)).await
    }

    async fn send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        let path = url.path().to_string();

        tracing::debug!(
            request_id = %request_id,
            resource = %self.resource,
            method = %method,
            path = %path,
            "Sending request"
        );

        let result = match timeout(self.timeout, self.do_send(method, url, body)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.timeout,
            }),
        };

        if let Err(e) = &result {
            tracing::warn!(
                request_id = %request_id,
                resource = %self.resource,
                path = %path,
                error_type = e.error_type(),
                error = %e,
                "Request failed"
            );
        }

        result
    }

    async fn do_send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<Value, ApiError> {
        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.connection_error(e))?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.connection_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from));
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn connection_error(&self, source: reqwest::Error) -> ApiError {
        ApiError::Connection {
            resource: self.resource,
            source,
        }
    }
}

/// Decodes `value[key]` when the body is an object carrying `key`,
/// otherwise decodes the body itself.
pub(crate) fn decode_enveloped<T: DeserializeOwned>(value: Value, key: &str) -> Result<T, ApiError> {
    let inner = match value {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Boolean view of a call. `send` has already logged any failure.
pub(crate) fn succeeded<T>(result: Result<T, ApiError>) -> bool {
    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> ServiceClient {
        ServiceClient::new(Client::new(), base, Resource::Groups, Duration::from_secs(6)).unwrap()
    }

    #[test]
    fn test_root_has_api_prefix() {
        let url = client("http://localhost:5000/").url(&[], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/v1/groups");
    }

    #[test]
    fn test_segments_are_encoded() {
        let url = client("http://localhost:5000")
            .url(&["cats & dogs", "members", "u1"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/v1/groups/cats%20&%20dogs/members/u1"
        );
    }

    #[test]
    fn test_query_pairs_appended() {
        let url = client("http://localhost:5000")
            .url(&[], &[("group", "cats"), ("token", "a b")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/v1/groups?group=cats&token=a+b"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ServiceClient::new(Client::new(), "not a url", Resource::Auth, Duration::from_secs(1));
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }

    #[test]
    fn test_decode_enveloped_accepts_both_shapes() {
        let wrapped: Vec<u32> = decode_enveloped(json!({"posts": [1, 2]}), "posts").unwrap();
        let bare: Vec<u32> = decode_enveloped(json!([3]), "posts").unwrap();
        assert_eq!(wrapped, vec![1, 2]);
        assert_eq!(bare, vec![3]);
    }

    #[test]
    fn test_decode_enveloped_reports_shape_errors() {
        let result: Result<Vec<u32>, _> = decode_enveloped(json!({"other": 1}), "posts");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
