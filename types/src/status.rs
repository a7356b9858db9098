//! Transaction lifecycle states.

use serde::{Deserialize, Serialize};

/// The verification state of a transaction.
///
/// The transition is one-way: once Completed, a transaction never becomes
/// Pending again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxStatus {
    /// Accepted, awaiting verifications. Eligible as a parent (tip).
    Pending,
    /// Reached the verification threshold. No longer a tip.
    Completed,
}

impl TxStatus {
    /// Whether this transaction can still collect verifications.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}
