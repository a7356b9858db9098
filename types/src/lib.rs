//! Fundamental types for the Micro Mint payment backend.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: wallet ids, transaction ids, amounts, currencies, timestamps,
//! key material, the transaction record itself, and engine parameters.

pub mod amount;
pub mod currency;
pub mod keys;
pub mod params;
pub mod rates;
pub mod status;
pub mod time;
pub mod transaction;
pub mod txid;
pub mod wallet;

pub use amount::Amount;
pub use currency::Currency;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::EngineParams;
pub use status::TxStatus;
pub use time::Timestamp;
pub use transaction::TransactionRecord;
pub use txid::TxId;
pub use wallet::{WalletId, WalletRecord};
