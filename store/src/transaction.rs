//! Transaction record storage.

use crate::StoreError;
use mint_types::{TransactionRecord, TxId, WalletId};

/// Result of a conditional update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The mutation closure accepted the record and the change was stored.
    Applied,
    /// The mutation closure declined; the record is unchanged.
    NotApplied,
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Durable mapping from transaction id to transaction record.
pub trait TransactionStore: Send + Sync {
    /// Store a new transaction. Fails with [`StoreError::Duplicate`] on an
    /// existing id.
    fn insert(&self, record: &TransactionRecord) -> Result<(), StoreError>;

    fn get(&self, id: &TxId) -> Result<Option<TransactionRecord>, StoreError>;

    /// Run `mutate` on the record under the store's write lock.
    ///
    /// The closure inspects (and may mutate) the record, returning whether
    /// the update applies; on `false` the record is left untouched. This is
    /// the compare-and-set primitive the verification engine builds its
    /// check-append-flip sequence on.
    fn update_conditional(
        &self,
        id: &TxId,
        mutate: &dyn Fn(&mut TransactionRecord) -> bool,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Pending transactions, oldest first, capped at `limit`.
    fn query_pending(&self, limit: usize) -> Result<Vec<TransactionRecord>, StoreError>;

    /// Transactions where the wallet is sender or recipient, newest first,
    /// capped at `limit`. Used to seed wallet-rooted graph queries.
    fn recent_for_wallet(
        &self,
        wallet: &WalletId,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>, StoreError>;

    fn transaction_count(&self) -> Result<u64, StoreError>;
}
