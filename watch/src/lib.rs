//! Host capability surface and the document-change watcher.
//!
//! The watcher depends on the host editor only through [`EditorHost`]: a
//! snapshot of the active document, the diagnostics attached to it, and a
//! change subscription. Any host — a real editor integration or the
//! simulated workspace used by the demo binary — implements that trait and
//! nothing more.
//!
//! Per change notification the [`Watcher`] captures the active document,
//! narrows the host's diagnostics down to message + 1-based line, and
//! dispatches one analysis request. No debouncing, no coalescing: overlap
//! between in-flight requests is resolved at the panel by request tokens.

mod host;
mod watcher;

pub use host::{
    ChangeSubscription, DocumentChanged, EditorHost, HostDiagnostic, HostSeverity,
    change_feed,
};
pub use watcher::Watcher;
