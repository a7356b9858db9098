//! Nullable infrastructure for deterministic testing.
//!
//! External seams of the engines (signature checking, event publication) are
//! traits; this crate provides controllable implementations that never touch
//! real cryptography or real delivery. Swap them in wherever a test does not
//! care about the seam itself.

pub mod sink;
pub mod verifier;

pub use sink::{FailingSink, RecordingSink};
pub use verifier::{AcceptAllVerifier, RejectAllVerifier};
