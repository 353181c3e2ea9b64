//! Shared data model for the coach analysis pipeline.
//!
//! These types define the interfaces between the watcher, the analysis
//! client, and the panel:
//!
//! - [`DocumentSnapshot`] — the active document at the moment of capture
//! - [`DiagnosticRecord`] — one captured diagnostic (message + 1-based line)
//! - [`AnalysisPayload`] — the request body sent to the analysis service
//! - [`AnalysisResult`] — the service's response, or the canonical error
//! - [`PanelMessage`] — the single message shape on the display bridge
//!
//! Wire shapes are load-bearing: the payload and panel message serialize to
//! the exact JSON the analysis service and display surface expect.

mod document;
mod result;

pub use document::{AnalysisPayload, DiagnosticRecord, DocumentSnapshot};
pub use result::{AnalysisResult, BACKEND_UNREACHABLE, PanelMessage};
