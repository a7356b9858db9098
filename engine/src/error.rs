use mint_store::StoreError;
use mint_types::Amount;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("sender wallet not found: {0}")]
    WalletNotFound(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("recipient wallet not found: {0}")]
    RecipientNotFound(String),

    #[error("insufficient balance: needed {needed}, available {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
