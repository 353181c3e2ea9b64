//! Panel state and the display surface bridge.
//!
//! The display surface is a persistent, host-managed rendering target that
//! is created once per session and then updated many times. This crate owns
//! both halves of that relationship:
//!
//! - [`Surface`] / [`DisplayView`] — the transport bridge: a one-way,
//!   unbounded message channel from the process to the surface. Typed
//!   messages, no acknowledgment, no backpressure.
//! - [`Panel`] — the panel state: holds at most one surface reference,
//!   issues request tokens, and delivers results through the bridge.
//!
//! Results that complete for a superseded request are dropped at
//! [`Panel::update`]; see its docs for the ordering contract.

mod bridge;
mod panel;

pub use bridge::{DisplayView, Surface, WAITING_PLACEHOLDER};
pub use panel::{Panel, RequestToken};
