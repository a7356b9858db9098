//! The Micro Mint verification engine.
//!
//! A wallet (other than the sender) endorses a pending transaction; at
//! `verification_threshold` endorsements the transaction completes and
//! leaves the tip pool. Each first-time verification earns a flat MM reward,
//! minted from the reward-pool pseudo-wallet. Replays are idempotent
//! successes with zero reward, never errors.

pub mod engine;
pub mod error;

pub use engine::{VerificationEngine, VerifyOutcome};
pub use error::VerifyError;
