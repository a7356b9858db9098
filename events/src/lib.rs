//! Notification events for Micro Mint.
//!
//! Engines publish events best-effort through the [`NotificationSink`] seam:
//! a publish failure is logged by the caller and never changes the outcome of
//! the operation that produced it. Funds correctness does not depend on
//! anything in this crate.

pub mod broadcast;
pub mod event;
pub mod sink;

pub use broadcast::{BroadcastSink, Envelope};
pub use event::{Channel, MintEvent};
pub use sink::{EventError, NotificationSink, NullSink};
