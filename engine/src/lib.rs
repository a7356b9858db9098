//! The Micro Mint transaction engine.
//!
//! [`TransactionEngine::create`] is the single entry point for making a
//! payment: it validates the request, picks parents from the [`TipPool`],
//! moves balances atomically, persists the record and announces the result.
//! Verification of existing transactions lives in `mint-verification`.

pub mod create;
pub mod error;
pub mod tip_pool;

pub use create::{CreateRequest, TransactionEngine};
pub use error::EngineError;
pub use tip_pool::TipPool;
