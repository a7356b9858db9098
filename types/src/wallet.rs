//! Wallet identifiers and records.

use crate::keys::PublicKey;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque wallet identifier.
///
/// Real wallets get their id derived from the public key at registration
/// (see `mint_crypto::derive_wallet_id`); the reward pool is a well-known
/// pseudo-wallet with no key and no record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletId(String);

impl WalletId {
    /// Id of the system pseudo-wallet that funds verification rewards.
    pub const REWARD_POOL: &'static str = "mint_rewards";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The system pseudo-wallet that appears as sender on reward transactions.
    pub fn reward_pool() -> Self {
        Self(Self::REWARD_POOL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_reward_pool(&self) -> bool {
        self.0 == Self::REWARD_POOL
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WalletId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A registered wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub id: WalletId,
    /// Display name of the owning user. Opaque to the engines.
    pub owner: String,
    /// Key that signatures on outgoing transactions are checked against.
    pub public_key: PublicKey,
    pub created_at: Timestamp,
}
