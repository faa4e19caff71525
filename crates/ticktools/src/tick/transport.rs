//! HTTP transport for the Tick API
//!
//! One narrow capability: `request(method, path, query, body) -> JSON`. The
//! rest of the crate never touches reqwest directly, and tests swap in a
//! scripted transport (see `api.rs`).

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use super::TickConfig;

/// Transport-level failure. Not retried anywhere; a failure at any page or
/// mutation aborts the whole operation.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("Tick API error [{status}]: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse Tick response: {0}")]
    Decode(String),
}

/// The capability that performs the request/response cycle against Tick.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, TransportError>;
}

/// Transport over an authenticated `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &TickConfig) -> crate::prelude::Result<Self> {
        use crate::prelude::eyre;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Token token={}", config.api_token))
                .map_err(|e| eyre!("Invalid header value: {}", e))?,
        );
        // Tick rejects clients without a contact User-Agent.
        headers.insert(USER_AGENT, HeaderValue::from_static("ticktools (MCP client)"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }
}

impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        decode_response(status, &text)
    }
}

/// Map a status and body to the transport's JSON value.
///
/// A 304 is data, not an error: callers see `{"not_modified": true}` and
/// decide what a cache hit means for them. An empty success body (DELETE)
/// decodes to `Null`.
fn decode_response(status: StatusCode, text: &str) -> Result<Value, TransportError> {
    if status == StatusCode::NOT_MODIFIED {
        return Ok(json!({"not_modified": true}));
    }

    if !status.is_success() {
        return Err(TransportError::Status {
            status: status.as_u16(),
            message: text.to_string(),
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(text).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_modified_is_data_not_error() {
        let value = decode_response(StatusCode::NOT_MODIFIED, "").unwrap();

        assert_eq!(value, json!({"not_modified": true}));
    }

    #[test]
    fn test_error_status_carries_body_as_message() {
        let err = decode_response(StatusCode::UNPROCESSABLE_ENTITY, "hours is required")
            .unwrap_err();

        match err {
            TransportError::Status { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "hours is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_success_body_decodes_to_null() {
        let value = decode_response(StatusCode::NO_CONTENT, "  \n").unwrap();

        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_success_body_decodes_as_json() {
        let value = decode_response(StatusCode::OK, r#"[{"id": 1}]"#).unwrap();

        assert_eq!(value, json!([{"id": 1}]));
    }

    #[test]
    fn test_malformed_success_body_is_a_decode_error() {
        let err = decode_response(StatusCode::OK, "<html>maintenance</html>").unwrap_err();

        assert!(matches!(err, TransportError::Decode(_)));
    }
}
