//! Analysis results and the panel message envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Canonical message rendered when the analysis service cannot be reached
/// or returns an unparseable body.
pub const BACKEND_UNREACHABLE: &str = "Backend not reachable";

/// Outcome of one analysis exchange.
///
/// Either an arbitrary JSON value returned by the service (forwarded
/// verbatim, no schema enforced) or the canonical error value
/// `{"error": "Backend not reachable"}`. Both render the same way on the
/// display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    /// Wrap a successful service response.
    #[must_use]
    pub fn success(value: Value) -> Self {
        Self(value)
    }

    /// The canonical error result used for every backend-communication
    /// failure.
    #[must_use]
    pub fn backend_unreachable() -> Self {
        Self(json!({ "error": BACKEND_UNREACHABLE }))
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Whether this is the canonical error result.
    #[must_use]
    pub fn is_backend_unreachable(&self) -> bool {
        self.0.get("error").and_then(Value::as_str) == Some(BACKEND_UNREACHABLE)
    }

    /// Pretty-printed rendering for the display surface.
    #[must_use]
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// The single message shape carried over the display bridge.
///
/// Serializes to `{"type": "update", "payload": <result>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelMessage {
    Update { payload: AnalysisResult },
}

impl PanelMessage {
    #[must_use]
    pub fn update(payload: AnalysisResult) -> Self {
        Self::Update { payload }
    }

    #[must_use]
    pub fn payload(&self) -> &AnalysisResult {
        match self {
            Self::Update { payload } => payload,
        }
    }
}
