//! Document capture types: snapshot, diagnostic record, analysis payload.

use serde::{Deserialize, Serialize};

/// Immutable snapshot of the active document at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    language_id: String,
    text: String,
}

impl DocumentSnapshot {
    #[must_use]
    pub fn new(language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    /// Host language identifier (e.g. "python", "rust").
    #[must_use]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Full document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single captured diagnostic.
///
/// Only the message and a 1-based line number survive capture; column,
/// severity, and source are discarded at the boundary. Fields are private;
/// construction is the single path in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    message: String,
    line: u32,
}

impl DiagnosticRecord {
    /// Construct a record. `line` is 1-based.
    #[must_use]
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line number.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Request body for the analysis service.
///
/// Constructed fresh per change event and immutable once built. Serializes
/// to `{"language": ..., "code": ..., "diagnostics": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisPayload {
    language: String,
    code: String,
    diagnostics: Vec<DiagnosticRecord>,
}

impl AnalysisPayload {
    #[must_use]
    pub fn new(
        language: impl Into<String>,
        code: impl Into<String>,
        diagnostics: Vec<DiagnosticRecord>,
    ) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            diagnostics,
        }
    }

    /// Build a payload from a document snapshot plus captured diagnostics.
    #[must_use]
    pub fn from_document(document: &DocumentSnapshot, diagnostics: Vec<DiagnosticRecord>) -> Self {
        Self::new(document.language_id(), document.text(), diagnostics)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[DiagnosticRecord] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_shape() {
        let payload = AnalysisPayload::new(
            "python",
            "x=1",
            vec![DiagnosticRecord::new("unused variable", 3)],
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "language": "python",
                "code": "x=1",
                "diagnostics": [{"message": "unused variable", "line": 3}]
            })
        );
    }

    #[test]
    fn test_payload_empty_diagnostics_serializes_as_empty_array() {
        let payload = AnalysisPayload::new("python", "x=1", vec![]);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["diagnostics"], json!([]));
    }

    #[test]
    fn test_payload_from_document() {
        let doc = DocumentSnapshot::new("rust", "fn main() {}");
        let payload = AnalysisPayload::from_document(&doc, vec![]);
        assert_eq!(payload.language(), "rust");
        assert_eq!(payload.code(), "fn main() {}");
        assert!(payload.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostic_record_accessors() {
        let record = DiagnosticRecord::new("expected `;`", 11);
        assert_eq!(record.message(), "expected `;`");
        assert_eq!(record.line(), 11);
    }

    #[test]
    fn test_diagnostic_record_roundtrip() {
        let record = DiagnosticRecord::new("unused variable", 3);
        let json = serde_json::to_string(&record).unwrap();
        let back: DiagnosticRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
