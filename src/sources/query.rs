//! HTTP exchange with the CardioQA inference service.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use crate::state::{QueryRequest, QueryResponse};

/// What: Raw failure of one dispatch, before classification.
///
/// Details:
/// - Turned into a user-facing message by [`crate::logic::classify_failure`].
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchError {
    /// The service answered with a non-success status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body when it decoded as JSON.
        body: Option<serde_json::Value>,
    },
    /// Connection, TLS, timeout or any other transport failure.
    Transport(String),
    /// Success status, but the body was not a valid answer.
    Decode(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { status, body } => match body {
                Some(body) => write!(f, "HTTP {status}: {body}"),
                None => write!(f, "HTTP {status}"),
            },
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Decode(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// What: Abstract single-shot query transport.
///
/// Inputs:
/// - `request`: Validated request body.
///
/// Output:
/// - Future resolving to the parsed answer or a [`DispatchError`].
///
/// Details:
/// - One call performs exactly one outbound exchange; no retries.
/// - Implementations do not serialize concurrent calls; the lifecycle controller
///   never issues a second dispatch while one is pending.
/// - Production code relies on [`HttpDispatcher`]; tests substitute stubs.
pub trait QueryTransport: Send + Sync + 'static {
    /// Perform one exchange for `request`.
    fn dispatch(
        &self,
        request: QueryRequest,
    ) -> impl Future<Output = Result<QueryResponse, DispatchError>> + Send;
}

/// What: Build the query endpoint for a configured base URL.
///
/// Inputs:
/// - `base_url`: Service root, with or without a trailing slash.
///
/// Output:
/// - `{base_url}/query`.
#[must_use]
pub fn query_endpoint(base_url: &str) -> String {
    format!("{}/query", base_url.trim_end_matches('/'))
}

/// Real transport backed by a pooled `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDispatcher {
    /// What: Create a dispatcher bound to one service root.
    ///
    /// Inputs:
    /// - `base_url`: Service root from the resolved configuration.
    /// - `timeout`: Optional whole-request timeout; `None` keeps the transport default.
    ///
    /// Output:
    /// - Dispatcher posting to `{base_url}/query`.
    ///
    /// Details:
    /// - Falls back to a default client if the configured builder cannot be constructed.
    #[must_use]
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("cardioqa/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build HTTP client; using defaults");
            reqwest::Client::new()
        });
        Self {
            client,
            endpoint: query_endpoint(base_url),
        }
    }

    /// Endpoint every request is posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QueryTransport for HttpDispatcher {
    async fn dispatch(&self, request: QueryRequest) -> Result<QueryResponse, DispatchError> {
        tracing::debug!(endpoint = %self.endpoint, chars = request.query.chars().count(), "posting query");
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        if !status.is_success() {
            let body = serde_json::from_slice::<serde_json::Value>(&bytes).ok();
            tracing::warn!(status = status.as_u16(), "query rejected by service");
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_slice::<QueryResponse>(&bytes)
            .map_err(|e| DispatchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slashes() {
        assert_eq!(query_endpoint("http://h:1"), "http://h:1/query");
        assert_eq!(query_endpoint("http://h:1/"), "http://h:1/query");
        assert_eq!(query_endpoint("http://h:1/api//"), "http://h:1/api/query");
    }

    #[test]
    /// What: Display output names the failure class.
    ///
    /// Inputs:
    /// - One value of each `DispatchError` variant.
    ///
    /// Output:
    /// - Messages mention status, transport or malformed response.
    fn dispatch_error_display() {
        let status = DispatchError::Status {
            status: 503,
            body: Some(serde_json::json!({"detail": "down"})),
        };
        assert_eq!(status.to_string(), r#"HTTP 503: {"detail":"down"}"#);
        assert_eq!(
            DispatchError::Status {
                status: 500,
                body: None
            }
            .to_string(),
            "HTTP 500"
        );
        assert!(
            DispatchError::Transport("refused".into())
                .to_string()
                .contains("refused")
        );
        assert!(
            DispatchError::Decode("eof".into())
                .to_string()
                .starts_with("malformed")
        );
    }
}
