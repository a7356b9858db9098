//! Abstract storage traits for Micro Mint.
//!
//! Every storage backend (in-memory, or a future durable store) implements
//! these traits. The engines depend only on the traits, so the backing
//! representation can change without touching transaction or verification
//! logic.

pub mod error;
pub mod ledger;
pub mod transaction;
pub mod wallet;

pub use error::StoreError;
pub use ledger::{BalanceDelta, LedgerStore};
pub use transaction::{TransactionStore, UpdateOutcome};
pub use wallet::WalletStore;
