//! Panel state — owns the display surface reference and gates result
//! delivery on request recency.

use std::sync::Mutex;

use coach_types::{AnalysisResult, PanelMessage};

use crate::bridge::Surface;

/// Token identifying one dispatched analysis request.
///
/// Tokens are issued by [`Panel::issue_token`] in dispatch order; a result
/// is applied only while its token is still the latest issued. This makes
/// delivery last-edit-wins rather than last-response-wins when requests
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct Inner {
    surface: Option<Surface>,
    issued: u64,
    last_delivered: Option<AnalysisResult>,
}

/// Long-lived coordination point between the event source and the network
/// client.
///
/// Created once at activation and shared behind `Arc`. The surface
/// reference is the only shared mutable state; the internal mutex is never
/// held across an await.
#[derive(Debug, Default)]
pub struct Panel {
    inner: Mutex<Inner>,
}

impl Panel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the display surface. Called once by the host when the view is
    /// created; a second call replaces the previous surface.
    ///
    /// The view starts out rendering the waiting placeholder, so no message
    /// is posted here.
    pub fn resolve(&self, surface: Surface) {
        let mut inner = self.lock();
        if inner.surface.is_some() {
            tracing::debug!("display surface re-resolved; replacing previous reference");
        }
        inner.surface = Some(surface);
    }

    /// Claim the next request token. Must be called at dispatch time, not
    /// at completion time, so tokens follow dispatch order.
    pub fn issue_token(&self) -> RequestToken {
        let mut inner = self.lock();
        inner.issued += 1;
        RequestToken(inner.issued)
    }

    /// Deliver a result to the display surface.
    ///
    /// Dropped silently when the token has been superseded by a later
    /// dispatch, or when no surface has been resolved yet (not queued).
    /// Duplicate results for the current token are delivered
    /// unconditionally; no comparison against the previous result is made.
    pub fn update(&self, token: RequestToken, result: AnalysisResult) {
        let mut inner = self.lock();

        if token.0 != inner.issued {
            tracing::debug!(
                token = token.0,
                latest = inner.issued,
                "dropping result for superseded request"
            );
            return;
        }

        let Some(surface) = inner.surface.as_ref() else {
            tracing::debug!("no display surface resolved; result dropped");
            return;
        };

        surface.post(PanelMessage::update(result.clone()));
        inner.last_delivered = Some(result);
    }

    /// The most recently delivered result, if any.
    #[must_use]
    pub fn last_delivered(&self) -> Option<AnalysisResult> {
        self.lock().last_delivered.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic while holding it; the state is a
        // plain surface reference and counters, still safe to use.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
