use mint_store::StoreError;
use thiserror::Error;

/// Failures of a verification call.
///
/// "Already completed" and "already verified by this wallet" are NOT here:
/// both are idempotent success outcomes with zero reward, so a caller can
/// safely retry a verification it is unsure about.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("self-verification is not allowed: {0}")]
    SelfVerificationForbidden(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
