//! The transaction record — one node of the tangle.

use crate::amount::Amount;
use crate::currency::Currency;
use crate::keys::Signature;
use crate::status::TxStatus;
use crate::time::Timestamp;
use crate::txid::TxId;
use crate::wallet::WalletId;
use serde::{Deserialize, Serialize};

/// A payment (or reward) transaction as stored in the transaction store.
///
/// The parent references are the tips this transaction verified at creation.
/// `verifications` always equals `verifiers.len()`; the verifier set never
/// contains duplicates and never contains the sender.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TxId,
    pub sender: WalletId,
    pub recipient: WalletId,
    pub amount: Amount,
    pub currency: Currency,
    pub note: Option<String>,
    pub timestamp: Timestamp,
    /// Signature over the canonical transfer payload. All-zero on
    /// system-issued records (rewards), which carry no signing key.
    pub signature: Signature,
    pub status: TxStatus,
    /// Tips this transaction referenced (and thereby verified) at creation.
    pub parents: Vec<TxId>,
    pub verifications: u32,
    pub verifiers: Vec<WalletId>,
}

impl TransactionRecord {
    /// Whether this is a system-issued reward credit.
    pub fn is_reward(&self) -> bool {
        self.sender.is_reward_pool()
    }

    pub fn has_verifier(&self, wallet: &WalletId) -> bool {
        self.verifiers.contains(wallet)
    }

    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sender: &str) -> TransactionRecord {
        TransactionRecord {
            id: TxId::new([1u8; 32]),
            sender: WalletId::new(sender),
            recipient: WalletId::new("mint_recipient"),
            amount: Amount::new(4000),
            currency: Currency::usd(),
            note: None,
            timestamp: Timestamp::new(1_700_000_000),
            signature: Signature::ZERO,
            status: TxStatus::Pending,
            parents: vec![TxId::new([2u8; 32])],
            verifications: 0,
            verifiers: Vec::new(),
        }
    }

    #[test]
    fn reward_detection() {
        let mut tx = record("mint_sender");
        assert!(!tx.is_reward());
        tx.sender = WalletId::reward_pool();
        assert!(tx.is_reward());
    }

    #[test]
    fn verifier_membership() {
        let mut tx = record("mint_sender");
        let verifier = WalletId::new("mint_verifier");
        assert!(!tx.has_verifier(&verifier));
        tx.verifiers.push(verifier.clone());
        tx.verifications = 1;
        assert!(tx.has_verifier(&verifier));
    }

    #[test]
    fn serde_round_trip() {
        let tx = record("mint_sender");
        let json = serde_json::to_string(&tx).unwrap();
        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
        assert_eq!(back.parent_count(), 1);
    }
}
