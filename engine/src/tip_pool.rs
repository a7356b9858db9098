//! The tip pool — pending transactions eligible as parents.
//!
//! The pool is derived state: the transaction store's pending set is the
//! source of truth, and [`TipPool::rebuild`] reconstructs the pool from it on
//! startup. Each tip carries its sender so sampling can exclude a wallet's
//! own transactions without a store round trip.

use mint_types::{TransactionRecord, TxId, WalletId};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Mutex;

/// Concurrent set of tip ids, each tagged with its sender.
pub struct TipPool {
    tips: Mutex<HashMap<TxId, WalletId>>,
}

impl TipPool {
    pub fn new() -> Self {
        Self {
            tips: Mutex::new(HashMap::new()),
        }
    }

    /// Add a tip. Idempotent: re-adding an existing id is a no-op.
    pub fn add(&self, id: TxId, sender: WalletId) {
        self.tips.lock().unwrap().entry(id).or_insert(sender);
    }

    /// Remove a tip, returning whether it was present.
    pub fn remove(&self, id: &TxId) -> bool {
        self.tips.lock().unwrap().remove(id).is_some()
    }

    pub fn contains(&self, id: &TxId) -> bool {
        self.tips.lock().unwrap().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tips.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.lock().unwrap().is_empty()
    }

    /// Draw up to `count` distinct tips in random order.
    ///
    /// Never returns a tip sent by `exclude_sender` (a transaction must not
    /// be verified by its own sender) and never an id in `exclude_ids`.
    /// Returns fewer than `count` when the pool cannot supply them; an empty
    /// result is valid (the new transaction simply has no parents).
    pub fn sample(
        &self,
        count: usize,
        exclude_sender: &WalletId,
        exclude_ids: &[TxId],
    ) -> Vec<TxId> {
        let tips = self.tips.lock().unwrap();
        let eligible: Vec<TxId> = tips
            .iter()
            .filter(|&(id, sender)| sender != exclude_sender && !exclude_ids.contains(id))
            .map(|(id, _)| *id)
            .collect();
        drop(tips);
        eligible
            .choose_multiple(&mut rand::thread_rng(), count)
            .copied()
            .collect()
    }

    /// All current tip ids (unordered).
    pub fn snapshot(&self) -> Vec<TxId> {
        self.tips.lock().unwrap().keys().copied().collect()
    }

    /// Reset the pool from stored records, keeping only pending ones.
    pub fn rebuild(&self, records: &[TransactionRecord]) {
        let mut tips = self.tips.lock().unwrap();
        tips.clear();
        for record in records {
            if record.status.is_pending() {
                tips.insert(record.id, record.sender.clone());
            }
        }
    }
}

impl Default for TipPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_types::{Amount, Currency, Signature, Timestamp, TxStatus};

    fn id(n: u8) -> TxId {
        TxId::new([n; 32])
    }

    fn wallet(n: u8) -> WalletId {
        WalletId::new(format!("mint_wallet_{n:02}"))
    }

    #[test]
    fn add_remove_contains() {
        let pool = TipPool::new();
        assert!(pool.is_empty());

        pool.add(id(1), wallet(1));
        assert!(pool.contains(&id(1)));
        assert_eq!(pool.len(), 1);

        assert!(pool.remove(&id(1)));
        assert!(!pool.remove(&id(1)));
        assert!(pool.is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let pool = TipPool::new();
        pool.add(id(1), wallet(1));
        pool.add(id(1), wallet(2));
        assert_eq!(pool.len(), 1);
        // First sender wins; the id cannot change hands.
        let sample = pool.sample(1, &wallet(1), &[]);
        assert!(sample.is_empty());
    }

    #[test]
    fn sample_respects_count() {
        let pool = TipPool::new();
        for n in 0..10 {
            pool.add(id(n), wallet(n));
        }
        assert_eq!(pool.sample(3, &wallet(99), &[]).len(), 3);
        assert_eq!(pool.sample(20, &wallet(99), &[]).len(), 10);
    }

    #[test]
    fn sample_excludes_senders_own_tips() {
        let pool = TipPool::new();
        let sender = wallet(1);
        pool.add(id(1), sender.clone());
        pool.add(id(2), sender.clone());
        pool.add(id(3), wallet(2));

        let sample = pool.sample(3, &sender, &[]);
        assert_eq!(sample, vec![id(3)]);
    }

    #[test]
    fn sample_excludes_listed_ids() {
        let pool = TipPool::new();
        pool.add(id(1), wallet(1));
        pool.add(id(2), wallet(2));

        let sample = pool.sample(2, &wallet(99), &[id(1)]);
        assert_eq!(sample, vec![id(2)]);
    }

    #[test]
    fn sample_from_empty_pool_is_empty() {
        let pool = TipPool::new();
        assert!(pool.sample(2, &wallet(1), &[]).is_empty());
    }

    #[test]
    fn sample_returns_distinct_ids() {
        let pool = TipPool::new();
        for n in 0..5 {
            pool.add(id(n), wallet(9));
        }
        let sample = pool.sample(5, &wallet(1), &[]);
        let mut unique = sample.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), sample.len());
    }

    #[test]
    fn rebuild_keeps_only_pending() {
        let record = |n: u8, status| TransactionRecord {
            id: id(n),
            sender: wallet(n),
            recipient: wallet(99),
            amount: Amount::new(100),
            currency: Currency::usd(),
            note: None,
            timestamp: Timestamp::new(1000),
            signature: Signature::ZERO,
            status,
            parents: Vec::new(),
            verifications: 0,
            verifiers: Vec::new(),
        };

        let pool = TipPool::new();
        pool.add(id(42), wallet(42));
        pool.rebuild(&[
            record(1, TxStatus::Pending),
            record(2, TxStatus::Completed),
            record(3, TxStatus::Pending),
        ]);

        assert_eq!(pool.len(), 2);
        assert!(pool.contains(&id(1)));
        assert!(!pool.contains(&id(2)));
        assert!(!pool.contains(&id(42)));
    }
}
