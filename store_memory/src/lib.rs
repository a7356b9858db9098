//! In-memory storage backend.
//!
//! `MemoryStore` implements all three store traits over mutex-guarded hash
//! maps. It is the production backend for the demo daemon and the default
//! test backend; durability comes from JSON snapshots, the same shape of
//! local persistence the original demo application used.

use mint_store::{BalanceDelta, LedgerStore, StoreError, TransactionStore, UpdateOutcome, WalletStore};
use mint_types::{Amount, Currency, TransactionRecord, TxId, WalletId, WalletRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Thread-safe in-memory wallet + ledger + transaction store.
pub struct MemoryStore {
    wallets: Mutex<HashMap<WalletId, WalletRecord>>,
    balances: Mutex<HashMap<(WalletId, Currency), Amount>>,
    transactions: Mutex<HashMap<TxId, TransactionRecord>>,
}

/// On-disk snapshot shape. Balances are flattened to an entry list so the
/// snapshot stays plain JSON (maps keyed by tuples do not).
#[derive(Serialize, Deserialize)]
struct Snapshot {
    wallets: Vec<WalletRecord>,
    balances: Vec<BalanceEntry>,
    transactions: Vec<TransactionRecord>,
}

#[derive(Serialize, Deserialize)]
struct BalanceEntry {
    wallet: WalletId,
    currency: Currency,
    amount: Amount,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            wallets: Mutex::new(HashMap::new()),
            balances: Mutex::new(HashMap::new()),
            transactions: Mutex::new(HashMap::new()),
        }
    }

    /// Write the whole store to `path` as JSON.
    ///
    /// The snapshot goes through a sibling temp file and an atomic rename,
    /// so a crash mid-write cannot leave a half-written snapshot behind.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        let snapshot = {
            let wallets = self.wallets.lock().unwrap();
            let balances = self.balances.lock().unwrap();
            let transactions = self.transactions.lock().unwrap();
            Snapshot {
                wallets: wallets.values().cloned().collect(),
                balances: balances
                    .iter()
                    .map(|((wallet, currency), amount)| BalanceEntry {
                        wallet: wallet.clone(),
                        currency: currency.clone(),
                        amount: *amount,
                    })
                    .collect(),
                transactions: transactions.values().cloned().collect(),
            }
        };
        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, json).map_err(|e| StoreError::Backend(e.to_string()))?;
        std::fs::rename(&tmp, path).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    /// Rebuild a store from a snapshot written by [`MemoryStore::save_snapshot`].
    pub fn load_snapshot(path: &Path) -> Result<Self, StoreError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| StoreError::Backend(e.to_string()))?;
        let snapshot: Snapshot = serde_json::from_str(&json)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let store = Self::new();
        {
            let mut wallets = store.wallets.lock().unwrap();
            for record in snapshot.wallets {
                wallets.insert(record.id.clone(), record);
            }
        }
        {
            let mut balances = store.balances.lock().unwrap();
            for entry in snapshot.balances {
                balances.insert((entry.wallet, entry.currency), entry.amount);
            }
        }
        {
            let mut transactions = store.transactions.lock().unwrap();
            for record in snapshot.transactions {
                transactions.insert(record.id, record);
            }
        }
        Ok(store)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletStore for MemoryStore {
    fn put_wallet(&self, record: &WalletRecord) -> Result<(), StoreError> {
        let mut wallets = self.wallets.lock().unwrap();
        if wallets.contains_key(&record.id) {
            return Err(StoreError::Duplicate(record.id.to_string()));
        }
        wallets.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn get_wallet(&self, id: &WalletId) -> Result<Option<WalletRecord>, StoreError> {
        Ok(self.wallets.lock().unwrap().get(id).cloned())
    }

    fn wallet_count(&self) -> Result<u64, StoreError> {
        Ok(self.wallets.lock().unwrap().len() as u64)
    }
}

impl LedgerStore for MemoryStore {
    fn get_balance(&self, wallet: &WalletId, currency: &Currency) -> Result<Amount, StoreError> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(&(wallet.clone(), currency.clone()))
            .copied()
            .unwrap_or(Amount::ZERO))
    }

    fn adjust(
        &self,
        wallet: &WalletId,
        currency: &Currency,
        delta: BalanceDelta,
    ) -> Result<Amount, StoreError> {
        let mut balances = self.balances.lock().unwrap();
        let entry = balances
            .entry((wallet.clone(), currency.clone()))
            .or_insert(Amount::ZERO);
        let updated = match delta {
            BalanceDelta::Credit(amount) => entry
                .checked_add(amount)
                .ok_or_else(|| StoreError::Backend("balance overflow".to_string()))?,
            BalanceDelta::Debit(amount) => {
                entry
                    .checked_sub(amount)
                    .ok_or(StoreError::InsufficientFunds {
                        needed: amount,
                        available: *entry,
                    })?
            }
        };
        *entry = updated;
        Ok(updated)
    }

    fn transfer(
        &self,
        from: &WalletId,
        to: &WalletId,
        currency: &Currency,
        amount: Amount,
    ) -> Result<(), StoreError> {
        // One lock scope for the whole debit+credit: the sufficiency check
        // and both mutations are a single atomic unit.
        let mut balances = self.balances.lock().unwrap();
        let available = balances
            .get(&(from.clone(), currency.clone()))
            .copied()
            .unwrap_or(Amount::ZERO);
        let debited = available
            .checked_sub(amount)
            .ok_or(StoreError::InsufficientFunds {
                needed: amount,
                available,
            })?;
        let recipient_balance = balances
            .get(&(to.clone(), currency.clone()))
            .copied()
            .unwrap_or(Amount::ZERO);
        let credited = recipient_balance
            .checked_add(amount)
            .ok_or_else(|| StoreError::Backend("balance overflow".to_string()))?;
        balances.insert((from.clone(), currency.clone()), debited);
        balances.insert((to.clone(), currency.clone()), credited);
        Ok(())
    }

    fn balance_count(&self) -> Result<u64, StoreError> {
        Ok(self.balances.lock().unwrap().len() as u64)
    }
}

impl TransactionStore for MemoryStore {
    fn insert(&self, record: &TransactionRecord) -> Result<(), StoreError> {
        let mut transactions = self.transactions.lock().unwrap();
        if transactions.contains_key(&record.id) {
            return Err(StoreError::Duplicate(record.id.to_string()));
        }
        transactions.insert(record.id, record.clone());
        Ok(())
    }

    fn get(&self, id: &TxId) -> Result<Option<TransactionRecord>, StoreError> {
        Ok(self.transactions.lock().unwrap().get(id).cloned())
    }

    fn update_conditional(
        &self,
        id: &TxId,
        mutate: &dyn Fn(&mut TransactionRecord) -> bool,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut transactions = self.transactions.lock().unwrap();
        let record = transactions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        // The closure runs on a scratch copy so a declined update leaves the
        // stored record byte-identical.
        let mut candidate = record.clone();
        if mutate(&mut candidate) {
            *record = candidate;
            Ok(UpdateOutcome::Applied)
        } else {
            Ok(UpdateOutcome::NotApplied)
        }
    }

    fn query_pending(&self, limit: usize) -> Result<Vec<TransactionRecord>, StoreError> {
        let transactions = self.transactions.lock().unwrap();
        let mut pending: Vec<_> = transactions
            .values()
            .filter(|tx| tx.status.is_pending())
            .cloned()
            .collect();
        pending.sort_by_key(|tx| (tx.timestamp, tx.id));
        pending.truncate(limit);
        Ok(pending)
    }

    fn recent_for_wallet(
        &self,
        wallet: &WalletId,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        let transactions = self.transactions.lock().unwrap();
        let mut touching: Vec<_> = transactions
            .values()
            .filter(|tx| tx.sender == *wallet || tx.recipient == *wallet)
            .cloned()
            .collect();
        touching.sort_by_key(|tx| (std::cmp::Reverse(tx.timestamp), tx.id));
        touching.truncate(limit);
        Ok(touching)
    }

    fn transaction_count(&self) -> Result<u64, StoreError> {
        Ok(self.transactions.lock().unwrap().len() as u64)
    }
}
