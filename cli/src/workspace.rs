//! In-process workspace host used by the demo binary and the end-to-end
//! tests. Plays the role of the editor: one active document, a diagnostic
//! set, and a change feed.

use std::sync::Mutex;

use coach_types::DocumentSnapshot;
use coach_watch::{
    ChangeSubscription, DocumentChanged, EditorHost, HostDiagnostic, change_feed,
};
use tokio::sync::mpsc;

#[derive(Default)]
struct State {
    active: Option<DocumentSnapshot>,
    diagnostics: Vec<HostDiagnostic>,
    subscribers: Vec<mpsc::Sender<DocumentChanged>>,
}

/// Simulated editor workspace.
///
/// Mutations go through [`SimWorkspace::edit`], which notifies every live
/// subscriber the way a real host fires its document-change event. Opening
/// a document or replacing diagnostics alone does not notify.
#[derive(Default)]
pub struct SimWorkspace {
    state: Mutex<State>,
}

impl SimWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a document the active one. Does not fire a change event.
    pub fn open(&self, language_id: &str, text: &str) {
        let mut state = self.lock();
        state.active = Some(DocumentSnapshot::new(language_id, text));
        state.diagnostics.clear();
    }

    /// Close the active document, if any.
    pub fn close_active(&self) {
        let mut state = self.lock();
        state.active = None;
        state.diagnostics.clear();
    }

    /// Replace the diagnostic set attached to the active document.
    pub fn set_diagnostics(&self, items: Vec<HostDiagnostic>) {
        self.lock().diagnostics = items;
    }

    /// Mutate the active document's text and fire a change notification.
    ///
    /// Fires even with no active document — the host stream is unfiltered
    /// and the watcher is the one that decides to skip.
    pub fn edit(&self, text: &str) {
        let mut state = self.lock();
        if let Some(active) = state.active.as_ref() {
            state.active = Some(DocumentSnapshot::new(active.language_id(), text));
        }
        Self::notify(&mut state);
    }

    /// Fire a change notification without touching the document.
    pub fn touch(&self) {
        Self::notify(&mut self.lock());
    }

    /// Drop every subscriber's feed, ending their watch loops.
    ///
    /// The watcher keeps the host alive through its `Arc`, so the feed has
    /// to be closed explicitly rather than by dropping the workspace.
    pub fn shutdown(&self) {
        self.lock().subscribers.clear();
    }

    fn notify(state: &mut State) {
        // No backpressure: a full subscriber loses the notification, a
        // closed one is pruned.
        state
            .subscribers
            .retain(|tx| !matches!(
                tx.try_send(DocumentChanged),
                Err(mpsc::error::TrySendError::Closed(_))
            ));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl EditorHost for SimWorkspace {
    fn active_document(&self) -> Option<DocumentSnapshot> {
        self.lock().active.clone()
    }

    fn diagnostics(&self) -> Vec<HostDiagnostic> {
        self.lock().diagnostics.clone()
    }

    fn subscribe(&self) -> ChangeSubscription {
        let (tx, subscription) = change_feed();
        self.lock().subscribers.push(tx);
        subscription
    }
}
