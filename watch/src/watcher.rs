//! The event watcher: one analysis dispatch per change notification.

use std::sync::Arc;

use coach_client::AnalysisClient;
use coach_types::{AnalysisPayload, DiagnosticRecord};
use tokio::task::JoinHandle;

use crate::host::{ChangeSubscription, EditorHost, HostDiagnostic};

/// Narrow host diagnostics to the captured form: message plus 1-based
/// line. Column, severity, and source do not survive capture.
fn capture_diagnostics(items: &[HostDiagnostic]) -> Vec<DiagnosticRecord> {
    items
        .iter()
        .map(|d| DiagnosticRecord::new(d.message.clone(), d.line + 1))
        .collect()
}

/// Watches a host's change feed and dispatches one analysis request per
/// notification.
///
/// The watcher body never suspends on the network: each dispatch runs on
/// its own task inside the client, so rapid edits produce overlapping
/// in-flight requests (resolved last-edit-wins at the panel).
pub struct Watcher {
    host: Arc<dyn EditorHost>,
    client: AnalysisClient,
}

impl Watcher {
    #[must_use]
    pub fn new(host: Arc<dyn EditorHost>, client: AnalysisClient) -> Self {
        Self { host, client }
    }

    /// Handle one change notification.
    ///
    /// No active document means no network call and no observable effect;
    /// otherwise exactly one dispatch. Returns the dispatch handle so tests
    /// can await completion.
    pub fn on_document_changed(&self) -> Option<JoinHandle<()>> {
        let Some(document) = self.host.active_document() else {
            tracing::trace!("change notification with no active document; skipping");
            return None;
        };

        let diagnostics = capture_diagnostics(&self.host.diagnostics());
        tracing::debug!(
            language = document.language_id(),
            bytes = document.text().len(),
            diagnostics = diagnostics.len(),
            "dispatching analysis request"
        );

        let payload = AnalysisPayload::from_document(&document, diagnostics);
        Some(self.client.send(payload))
    }

    /// Consume the watcher, draining the subscription until the host drops
    /// its feed.
    pub async fn run(self, mut subscription: ChangeSubscription) {
        while subscription.changed().await.is_some() {
            let _ = self.on_document_changed();
        }
        tracing::debug!("change feed closed; watcher stopping");
    }

    /// Spawn [`Watcher::run`] on a background task.
    #[must_use]
    pub fn spawn(self, subscription: ChangeSubscription) -> JoinHandle<()> {
        tokio::spawn(self.run(subscription))
    }
}
