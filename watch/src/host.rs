//! Capability interface the watcher needs from the host editor.

use coach_types::DocumentSnapshot;
use tokio::sync::mpsc;

/// Channel capacity for a change subscription. A full channel drops the
/// notification — the next one re-reads the same host state anyway.
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// Notification that some open document changed.
///
/// Carries no payload: the watcher re-reads the host's current state, so a
/// stale notification never carries stale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentChanged;

/// Severity as the host reports it. Discarded during capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HostSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

/// A diagnostic exactly as the host holds it: 0-based position, full
/// metadata. The watcher narrows this to [`coach_types::DiagnosticRecord`]
/// (message + 1-based line) during capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDiagnostic {
    pub message: String,
    /// 0-based line number.
    pub line: u32,
    /// 0-based column.
    pub col: u32,
    pub severity: HostSeverity,
    /// Tool that produced the diagnostic (e.g. "rustc"), when known.
    pub source: Option<String>,
}

impl HostDiagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>, line: u32, severity: HostSeverity) -> Self {
        Self {
            message: message.into(),
            line,
            col: 0,
            severity,
            source: None,
        }
    }
}

/// What the watcher is allowed to ask of the host.
///
/// Implementations must be cheap to query: the watcher calls
/// `active_document` and `diagnostics` on every change notification.
pub trait EditorHost: Send + Sync {
    /// Snapshot of the currently focused document, or `None` when no
    /// document is active.
    fn active_document(&self) -> Option<DocumentSnapshot>;

    /// Diagnostics currently attached to the active document. Empty when
    /// there are none (or no active document).
    fn diagnostics(&self) -> Vec<HostDiagnostic>;

    /// Subscribe to change notifications for any open document, of any
    /// kind — no filter. Dropping the subscription unsubscribes.
    fn subscribe(&self) -> ChangeSubscription;
}

/// Create a change feed: the host keeps the sender, the watcher consumes
/// the subscription.
#[must_use]
pub fn change_feed() -> (mpsc::Sender<DocumentChanged>, ChangeSubscription) {
    let (tx, rx) = mpsc::channel(CHANGE_CHANNEL_CAPACITY);
    (tx, ChangeSubscription { rx })
}

/// Receiving half of a change feed.
#[derive(Debug)]
pub struct ChangeSubscription {
    rx: mpsc::Receiver<DocumentChanged>,
}

impl ChangeSubscription {
    /// Wait for the next change notification.
    ///
    /// Returns `None` once the host has dropped its side of the feed.
    pub async fn changed(&mut self) -> Option<DocumentChanged> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_feed_delivers_notifications() {
        let (tx, mut sub) = change_feed();
        tx.send(DocumentChanged).await.unwrap();
        assert_eq!(sub.changed().await, Some(DocumentChanged));
    }

    #[tokio::test]
    async fn test_subscription_ends_when_feed_dropped() {
        let (tx, mut sub) = change_feed();
        drop(tx);
        assert_eq!(sub.changed().await, None);
    }

    #[tokio::test]
    async fn test_dropping_subscription_closes_feed() {
        let (tx, sub) = change_feed();
        drop(sub);
        assert!(tx.send(DocumentChanged).await.is_err());
    }
}
