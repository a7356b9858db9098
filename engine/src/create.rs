//! Transaction creation — the validated, atomic payment path.

use crate::error::EngineError;
use crate::tip_pool::TipPool;
use mint_crypto::{canonical_transfer_payload, transaction_id, SignatureVerifier};
use mint_events::{Channel, MintEvent, NotificationSink};
use mint_store::{LedgerStore, StoreError, TransactionStore, WalletStore};
use mint_types::{
    Amount, Currency, EngineParams, Signature, Timestamp, TransactionRecord, TxStatus, WalletId,
};
use std::sync::Arc;

/// A caller-supplied transfer request. The timestamp is part of the signed
/// payload, so the caller picks it and signs over it.
#[derive(Clone, Debug)]
pub struct CreateRequest {
    pub sender: WalletId,
    pub recipient: WalletId,
    pub amount: Amount,
    pub currency: Currency,
    pub note: Option<String>,
    pub timestamp: Timestamp,
    pub signature: Signature,
}

/// Creates transactions: validates, selects parents, moves balances, persists.
pub struct TransactionEngine<S> {
    store: Arc<S>,
    tips: Arc<TipPool>,
    verifier: Arc<dyn SignatureVerifier>,
    sink: Arc<dyn NotificationSink>,
    params: EngineParams,
}

impl<S> TransactionEngine<S>
where
    S: WalletStore + LedgerStore + TransactionStore,
{
    pub fn new(
        store: Arc<S>,
        tips: Arc<TipPool>,
        verifier: Arc<dyn SignatureVerifier>,
        sink: Arc<dyn NotificationSink>,
        params: EngineParams,
    ) -> Self {
        Self {
            store,
            tips,
            verifier,
            sink,
            params,
        }
    }

    pub fn tips(&self) -> &Arc<TipPool> {
        &self.tips
    }

    /// Create a payment transaction.
    ///
    /// Validation runs in a fixed order and the first failure wins:
    /// input shape, sender wallet, signature, recipient wallet. Balance
    /// sufficiency is not pre-checked — the atomic transfer enforces it, so
    /// the check and the debit cannot race.
    ///
    /// On success the record is Pending, in the tip pool, and both balances
    /// have moved. Event publication is best-effort and never fails the call.
    pub fn create(&self, request: CreateRequest) -> Result<TransactionRecord, EngineError> {
        self.validate_shape(&request)?;

        let sender_wallet = self
            .store
            .get_wallet(&request.sender)?
            .ok_or_else(|| EngineError::WalletNotFound(request.sender.to_string()))?;

        let payload = canonical_transfer_payload(
            request.amount,
            &request.currency,
            &request.recipient,
            request.note.as_deref(),
            request.timestamp,
        );
        if !self
            .verifier
            .verify(&payload, &request.signature, &sender_wallet.public_key)
        {
            return Err(EngineError::InvalidSignature(format!(
                "signature does not verify for {}",
                request.sender
            )));
        }

        if self.store.get_wallet(&request.recipient)?.is_none() {
            return Err(EngineError::RecipientNotFound(
                request.recipient.to_string(),
            ));
        }

        // The new transaction has no id yet and is not in the pool, so only
        // the sender's own tips need excluding.
        let parents = self
            .tips
            .sample(self.params.parents_per_tx, &request.sender, &[]);

        // Balances first, record second: a Pending record without its debit
        // would fabricate money, whereas a debit without its record can be
        // compensated below.
        self.store
            .transfer(
                &request.sender,
                &request.recipient,
                &request.currency,
                request.amount,
            )
            .map_err(|e| match e {
                StoreError::InsufficientFunds { needed, available } => {
                    EngineError::InsufficientBalance { needed, available }
                }
                other => EngineError::Store(other),
            })?;

        let id = transaction_id(
            &request.sender,
            &request.recipient,
            request.amount,
            &request.currency,
            request.note.as_deref(),
            request.timestamp,
            &request.signature,
            &parents,
        );
        let record = TransactionRecord {
            id,
            sender: request.sender.clone(),
            recipient: request.recipient.clone(),
            amount: request.amount,
            currency: request.currency.clone(),
            note: request.note.clone(),
            timestamp: request.timestamp,
            signature: request.signature.clone(),
            status: TxStatus::Pending,
            parents,
            verifications: 0,
            verifiers: Vec::new(),
        };

        if let Err(insert_err) = self.store.insert(&record) {
            // Compensate the transfer so the failed create leaves no trace.
            if let Err(refund_err) = self.store.transfer(
                &request.recipient,
                &request.sender,
                &request.currency,
                request.amount,
            ) {
                tracing::error!(
                    tx = %id,
                    %insert_err,
                    %refund_err,
                    "failed to compensate transfer after insert failure"
                );
            }
            return Err(match insert_err {
                StoreError::Duplicate(_) => {
                    EngineError::InvalidInput("duplicate transaction".to_string())
                }
                other => EngineError::Store(other),
            });
        }

        self.tips.add(id, request.sender.clone());
        tracing::info!(
            tx = %id,
            sender = %request.sender,
            recipient = %request.recipient,
            amount = %request.amount,
            currency = %request.currency,
            parents = record.parent_count(),
            "transaction created"
        );

        self.publish(
            &Channel::Wallet(request.sender.clone()),
            &MintEvent::TransactionCreated {
                id,
                sender: request.sender.clone(),
                recipient: request.recipient.clone(),
                amount: request.amount,
                currency: request.currency.clone(),
            },
        );
        self.publish(
            &Channel::Wallet(request.recipient.clone()),
            &MintEvent::TransactionCreated {
                id,
                sender: request.sender.clone(),
                recipient: request.recipient.clone(),
                amount: request.amount,
                currency: request.currency.clone(),
            },
        );
        self.publish(
            &Channel::Broadcast,
            &MintEvent::VerificationOpportunity {
                id,
                sender: request.sender.clone(),
            },
        );

        Ok(record)
    }

    fn validate_shape(&self, request: &CreateRequest) -> Result<(), EngineError> {
        if request.amount.is_zero() {
            return Err(EngineError::InvalidInput(
                "amount must be positive".to_string(),
            ));
        }
        if !request.currency.is_well_formed() {
            return Err(EngineError::InvalidInput(format!(
                "malformed currency code: {:?}",
                request.currency.as_str()
            )));
        }
        if request.recipient.is_empty() {
            return Err(EngineError::InvalidInput(
                "recipient must not be empty".to_string(),
            ));
        }
        if request.sender.is_empty() {
            return Err(EngineError::InvalidInput(
                "sender must not be empty".to_string(),
            ));
        }
        if request.recipient == request.sender {
            return Err(EngineError::InvalidInput(
                "sender and recipient must differ".to_string(),
            ));
        }
        Ok(())
    }

    fn publish(&self, channel: &Channel, event: &MintEvent) {
        if let Err(e) = self.sink.publish(channel, event) {
            tracing::warn!(kind = event.kind(), %e, "event publish failed");
        }
    }
}
