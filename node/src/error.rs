use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("engine error: {0}")]
    Engine(#[from] mint_engine::EngineError),

    #[error("verification error: {0}")]
    Verification(#[from] mint_verification::VerifyError),

    #[error("store error: {0}")]
    Store(#[from] mint_store::StoreError),

    #[error("config error: {0}")]
    Config(String),

    #[error("faucet is disabled")]
    FaucetDisabled,
}
