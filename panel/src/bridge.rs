//! Transport bridge — one-way message channel to the display surface.

use coach_types::PanelMessage;
use tokio::sync::mpsc;

/// Initial display content before any update message arrives.
pub const WAITING_PLACEHOLDER: &str = "Waiting for errors...";

/// Sending half of the bridge, held by the panel.
///
/// Delivery is fire-and-forget: the channel is unbounded and a send to a
/// dropped view is discarded, not an error.
#[derive(Debug, Clone)]
pub struct Surface {
    tx: mpsc::UnboundedSender<PanelMessage>,
}

impl Surface {
    /// Create a bridge: the surface handle and the view that renders it.
    #[must_use]
    pub fn channel() -> (Self, DisplayView) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self { tx },
            DisplayView {
                rx,
                content: WAITING_PLACEHOLDER.to_string(),
            },
        )
    }

    /// Post a message to the view. No acknowledgment.
    pub fn post(&self, message: PanelMessage) {
        if self.tx.send(message).is_err() {
            tracing::debug!("display surface gone; message discarded");
        }
    }
}

/// Receiving half of the bridge.
///
/// Owns the visible content: starts as [`WAITING_PLACEHOLDER`] and is
/// replaced wholesale by the pretty-printed payload of each update message.
#[derive(Debug)]
pub struct DisplayView {
    rx: mpsc::UnboundedReceiver<PanelMessage>,
    content: String,
}

impl DisplayView {
    /// Current visible content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Drain all pending messages, applying each. Non-blocking.
    ///
    /// Returns the number of messages applied.
    pub fn pump(&mut self) -> usize {
        let mut count = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
            count += 1;
        }
        count
    }

    /// Wait for the next message, apply it, and return the new content.
    ///
    /// Returns `None` once every surface handle has been dropped.
    pub async fn next_render(&mut self) -> Option<&str> {
        let message = self.rx.recv().await?;
        self.apply(message);
        Some(&self.content)
    }

    fn apply(&mut self, message: PanelMessage) {
        let PanelMessage::Update { payload } = message;
        self.content = payload.to_pretty();
    }
}
