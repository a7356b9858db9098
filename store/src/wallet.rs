//! Wallet record storage.

use crate::StoreError;
use mint_types::{WalletId, WalletRecord};

/// Durable mapping from wallet id to wallet record.
///
/// Wallets are created at registration and never deleted.
pub trait WalletStore: Send + Sync {
    /// Store a new wallet. Fails with [`StoreError::Duplicate`] if the id
    /// already exists.
    fn put_wallet(&self, record: &WalletRecord) -> Result<(), StoreError>;

    fn get_wallet(&self, id: &WalletId) -> Result<Option<WalletRecord>, StoreError>;

    fn wallet_count(&self) -> Result<u64, StoreError>;
}
