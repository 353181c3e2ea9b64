//! Coach — real-time diagnostic capture and analysis relay.
//!
//! # Architecture
//!
//! ```text
//! host edit event
//!   -> Watcher (coach-watch) builds an AnalysisPayload
//!   -> AnalysisClient (coach-client) POSTs it and awaits the result
//!   -> Panel (coach-panel) gates on request recency
//!   -> Surface bridge delivers it to the display view
//! ```
//!
//! This crate is the composition root: [`activate`] wires the pieces
//! together once per process, [`CoachConfig`] supplies the endpoint and
//! timeout, and [`SimWorkspace`] is an in-process host used by the demo
//! binary and the end-to-end tests.

mod config;
mod lifecycle;
mod workspace;

pub use config::CoachConfig;
pub use lifecycle::{CoachHandle, HostWindow, PANEL_VIEW_ID, activate};
pub use workspace::SimWorkspace;
