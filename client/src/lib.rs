//! HTTP client for the remote analysis service.
//!
//! [`AnalysisClient::send`] is the single entry point: it serializes an
//! [`AnalysisPayload`], POSTs it to the analysis endpoint, parses the
//! response body as JSON, and forwards the outcome to the [`Panel`].
//!
//! # Error Handling
//!
//! Failure at this boundary is fully absorbed. Connection failures,
//! timeouts, and unparseable bodies all collapse to the canonical
//! `{"error": "Backend not reachable"}` result delivered to the panel —
//! nothing is raised to the caller and nothing is retried. Internally the
//! failure keeps its kind ([`ClientError::Network`] vs
//! [`ClientError::Parse`]) so tests can assert on it without depending on
//! the display string.
//!
//! The HTTP status line is deliberately not interpreted: whatever JSON the
//! service returns is forwarded verbatim, error status or not.

use std::sync::Arc;
use std::time::Duration;

use coach_panel::Panel;
use coach_types::{AnalysisPayload, AnalysisResult};
use serde_json::Value;
use tokio::task::JoinHandle;

/// Default analysis endpoint, matching the backend's local dev address.
pub const DEFAULT_ANALYSIS_URL: &str = "http://127.0.0.1:8000/api/analyze/code";

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default end-to-end request timeout. A stuck call surfaces as a
/// `Network` failure instead of holding its task forever.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Why an analysis exchange failed.
///
/// Never escapes [`AnalysisClient::send`]; both kinds collapse to the
/// canonical error result at the panel boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Could not connect, request timed out, or the body could not be read.
    #[error("analysis request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Connected, but the response body was not JSON.
    #[error("analysis response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
        }
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {e}. Falling back to defaults.");
            reqwest::Client::new()
        })
}

/// Client for the analysis endpoint.
///
/// Cheap to clone; clones share the connection pool and the panel.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
    panel: Arc<Panel>,
}

impl AnalysisClient {
    /// Construct a client with the default request timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, panel: Arc<Panel>) -> Self {
        Self::with_timeout(
            endpoint,
            panel,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    #[must_use]
    pub fn with_timeout(
        endpoint: impl Into<String>,
        panel: Arc<Panel>,
        timeout: Duration,
    ) -> Self {
        Self {
            http: build_http_client(timeout),
            endpoint: endpoint.into(),
            panel,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Dispatch a payload for analysis. Side-effecting: the outcome goes to
    /// the panel, not to the caller.
    ///
    /// The request token is claimed here, synchronously, so tokens follow
    /// dispatch order even though the exchange itself runs on a spawned
    /// task. The returned handle is for tests that need to await
    /// completion; production callers ignore it.
    pub fn send(&self, payload: AnalysisPayload) -> JoinHandle<()> {
        let token = self.panel.issue_token();
        let client = self.clone();
        tokio::spawn(async move {
            let result = match client.request(&payload).await {
                Ok(value) => AnalysisResult::success(value),
                Err(e) => {
                    tracing::warn!(
                        kind = e.kind(),
                        error = %e,
                        endpoint = %client.endpoint,
                        "analysis exchange failed; reporting backend unreachable"
                    );
                    AnalysisResult::backend_unreachable()
                }
            };
            client.panel.update(token, result);
        })
    }

    /// Perform one HTTP exchange and parse the body.
    ///
    /// Public so integration tests can assert on the failure kind; `send`
    /// is the production path.
    pub async fn request(&self, payload: &AnalysisPayload) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;
        // Status is not checked: a JSON error body from the service is
        // forwarded verbatim, same as a success body.
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
