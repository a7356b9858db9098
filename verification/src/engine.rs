//! The verify operation.

use crate::error::VerifyError;
use mint_crypto::reward_tx_id;
use mint_engine::TipPool;
use mint_events::{Channel, MintEvent, NotificationSink};
use mint_store::{BalanceDelta, LedgerStore, StoreError, TransactionStore};
use mint_types::{
    Amount, Currency, EngineParams, Signature, Timestamp, TransactionRecord, TxId, TxStatus,
    WalletId,
};
use std::sync::Arc;

/// The result of a verification call.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifyOutcome {
    /// Reward actually credited; zero on idempotent replays.
    pub reward: Amount,
    /// Transaction status after this call.
    pub status: TxStatus,
    /// Whether this call added the verifier (false for replays and
    /// already-completed transactions).
    pub newly_verified: bool,
}

/// Applies verification claims against pending transactions.
pub struct VerificationEngine<S> {
    store: Arc<S>,
    tips: Arc<TipPool>,
    sink: Arc<dyn NotificationSink>,
    params: EngineParams,
}

impl<S> VerificationEngine<S>
where
    S: TransactionStore + LedgerStore,
{
    pub fn new(
        store: Arc<S>,
        tips: Arc<TipPool>,
        sink: Arc<dyn NotificationSink>,
        params: EngineParams,
    ) -> Self {
        Self {
            store,
            tips,
            sink,
            params,
        }
    }

    /// Verify a pending transaction on behalf of `verifier`.
    ///
    /// Preconditions run in a fixed order: existence, completed-yet,
    /// self-verification, already-verified. The mutation itself is one
    /// conditional update that re-checks "still pending, verifier still
    /// absent" under the store lock, so two concurrent verifiers can never
    /// double-count, double-flip or double-reward.
    pub fn verify(
        &self,
        verifier: &WalletId,
        id: &TxId,
        now: Timestamp,
    ) -> Result<VerifyOutcome, VerifyError> {
        let record = self
            .store
            .get(id)?
            .ok_or_else(|| VerifyError::TransactionNotFound(id.to_string()))?;

        // Completed is terminal; "ensure verified" on a completed
        // transaction has already succeeded. Checked before the self-check
        // so a sender probing a finished transaction gets the idempotent
        // answer, not an error.
        if record.status.is_completed() {
            return Ok(VerifyOutcome {
                reward: Amount::ZERO,
                status: TxStatus::Completed,
                newly_verified: false,
            });
        }

        if *verifier == record.sender {
            return Err(VerifyError::SelfVerificationForbidden(format!(
                "{verifier} is the sender of {id}"
            )));
        }

        if record.has_verifier(verifier) {
            return Ok(VerifyOutcome {
                reward: Amount::ZERO,
                status: record.status,
                newly_verified: false,
            });
        }

        let threshold = self.params.verification_threshold;
        let claimant = verifier.clone();
        let outcome = self.store.update_conditional(id, &move |tx| {
            if !tx.status.is_pending() || tx.has_verifier(&claimant) {
                return false;
            }
            tx.verifiers.push(claimant.clone());
            tx.verifications += 1;
            if tx.verifications >= threshold {
                tx.status = TxStatus::Completed;
            }
            true
        })?;

        if !outcome.is_applied() {
            // Lost a race: someone else completed it or this verifier's
            // earlier call landed first. Re-read for the idempotent answer.
            let current = self
                .store
                .get(id)?
                .ok_or_else(|| VerifyError::TransactionNotFound(id.to_string()))?;
            return Ok(VerifyOutcome {
                reward: Amount::ZERO,
                status: current.status,
                newly_verified: false,
            });
        }

        let updated = self
            .store
            .get(id)?
            .ok_or_else(|| VerifyError::TransactionNotFound(id.to_string()))?;

        if updated.status.is_completed() {
            self.tips.remove(id);
            tracing::info!(
                tx = %id,
                verifications = updated.verifications,
                "transaction completed"
            );
            let completed = MintEvent::TransactionCompleted {
                id: *id,
                verifications: updated.verifications,
            };
            self.publish(&Channel::Broadcast, &completed);
            self.publish(&Channel::Wallet(updated.sender.clone()), &completed);
        }

        let reward = self.issue_reward(verifier, id, now)?;

        self.publish(
            &Channel::Wallet(updated.sender.clone()),
            &MintEvent::TransactionVerified {
                id: *id,
                verifier: verifier.clone(),
                verifications: updated.verifications,
            },
        );

        Ok(VerifyOutcome {
            reward,
            status: updated.status,
            newly_verified: true,
        })
    }

    /// Credit the flat MM reward and persist the reward transaction.
    ///
    /// Rewards are minted: the reward pool is a pseudo-wallet with no
    /// balance to check. The reward record is Completed at birth, has no
    /// parents and never enters the tip pool.
    fn issue_reward(
        &self,
        verifier: &WalletId,
        verified: &TxId,
        now: Timestamp,
    ) -> Result<Amount, VerifyError> {
        let reward = self.params.verification_reward;
        let mm = Currency::mm();

        if let Err(e) = self
            .store
            .adjust(verifier, &mm, BalanceDelta::Credit(reward))
        {
            // The verifier entry already stands; idempotency makes the
            // caller's retry safe and reward-less, so surface the failure.
            tracing::error!(tx = %verified, %verifier, %e, "reward credit failed");
            return Err(e.into());
        }

        let reward_id = reward_tx_id(verified, verifier, now);
        let record = TransactionRecord {
            id: reward_id,
            sender: WalletId::reward_pool(),
            recipient: verifier.clone(),
            amount: reward,
            currency: mm,
            note: Some(format!("verification reward for {verified}")),
            timestamp: now,
            signature: Signature::ZERO,
            status: TxStatus::Completed,
            parents: Vec::new(),
            verifications: 0,
            verifiers: Vec::new(),
        };
        match self.store.insert(&record) {
            Ok(()) => {}
            Err(StoreError::Duplicate(_)) => {
                tracing::warn!(tx = %reward_id, "reward record already exists");
            }
            Err(e) => return Err(e.into()),
        }

        self.publish(
            &Channel::Wallet(verifier.clone()),
            &MintEvent::RewardIssued {
                verifier: verifier.clone(),
                amount: reward,
                reward_tx: reward_id,
            },
        );
        Ok(reward)
    }

    fn publish(&self, channel: &Channel, event: &MintEvent) {
        if let Err(e) = self.sink.publish(channel, event) {
            tracing::warn!(kind = event.kind(), %e, "event publish failed");
        }
    }
}
