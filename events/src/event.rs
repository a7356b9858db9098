//! Event and channel types.

use mint_types::{Amount, Currency, TxId, TxStatus, WalletId};
use serde::Serialize;

/// Where an event is addressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Channel {
    /// Delivered to one wallet's subscribers.
    Wallet(WalletId),
    /// Delivered to everyone (e.g. new verification opportunities).
    Broadcast,
}

/// Events emitted by the transaction and verification engines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum MintEvent {
    /// A payment transaction was created and entered the tip pool.
    TransactionCreated {
        id: TxId,
        sender: WalletId,
        recipient: WalletId,
        amount: Amount,
        currency: Currency,
    },
    /// A new pending transaction is open for verification.
    VerificationOpportunity { id: TxId, sender: WalletId },
    /// A wallet verified a pending transaction.
    TransactionVerified {
        id: TxId,
        verifier: WalletId,
        verifications: u32,
    },
    /// A transaction reached the verification threshold.
    TransactionCompleted { id: TxId, verifications: u32 },
    /// A verification reward was credited.
    RewardIssued {
        verifier: WalletId,
        amount: Amount,
        reward_tx: TxId,
    },
}

impl MintEvent {
    /// Short event name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TransactionCreated { .. } => "transaction-created",
            Self::VerificationOpportunity { .. } => "verification-opportunity",
            Self::TransactionVerified { .. } => "transaction-verified",
            Self::TransactionCompleted { .. } => "transaction-completed",
            Self::RewardIssued { .. } => "reward-issued",
        }
    }

    /// The status change implied by the event, if any.
    pub fn implied_status(&self) -> Option<TxStatus> {
        match self {
            Self::TransactionCreated { .. } => Some(TxStatus::Pending),
            Self::TransactionCompleted { .. } => Some(TxStatus::Completed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        let event = MintEvent::VerificationOpportunity {
            id: TxId::ZERO,
            sender: WalletId::new("mint_a"),
        };
        assert_eq!(event.kind(), "verification-opportunity");
    }

    #[test]
    fn events_serialize_to_json() {
        let event = MintEvent::RewardIssued {
            verifier: WalletId::new("mint_v"),
            amount: Amount::new(25),
            reward_tx: TxId::ZERO,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("RewardIssued"));
    }
}
