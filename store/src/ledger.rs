//! Per-(wallet, currency) balance storage.

use crate::StoreError;
use mint_types::{Amount, Currency, WalletId};

/// A signed balance adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceDelta {
    Credit(Amount),
    Debit(Amount),
}

/// Durable mapping from (wallet, currency) to a non-negative balance.
///
/// The non-negativity invariant is enforced here, not by callers: a debit
/// that would push a balance below zero fails atomically with
/// [`StoreError::InsufficientFunds`] and leaves the balance untouched. There
/// is no separate "check then debit" — the debit IS the check.
pub trait LedgerStore: Send + Sync {
    /// Current balance; zero when no entry exists.
    fn get_balance(&self, wallet: &WalletId, currency: &Currency) -> Result<Amount, StoreError>;

    /// Atomically apply a credit or debit, returning the new balance.
    ///
    /// A credit creates the balance entry at zero if absent. A debit fails
    /// with [`StoreError::InsufficientFunds`] (carrying needed/available)
    /// when the result would go negative.
    fn adjust(
        &self,
        wallet: &WalletId,
        currency: &Currency,
        delta: BalanceDelta,
    ) -> Result<Amount, StoreError>;

    /// Debit `from` and credit `to` as one atomic unit.
    ///
    /// Fails with [`StoreError::InsufficientFunds`] without any partial
    /// effect when `from` cannot cover `amount`.
    fn transfer(
        &self,
        from: &WalletId,
        to: &WalletId,
        currency: &Currency,
        amount: Amount,
    ) -> Result<(), StoreError>;

    /// Number of (wallet, currency) balance entries.
    fn balance_count(&self) -> Result<u64, StoreError>;
}
