//! Canonical payload encoding and content-hash transaction ids.
//!
//! The canonical transfer payload is the byte sequence a sender signs and the
//! engine verifies. Signer and verifier must produce identical bytes, so the
//! encoding is a strict contract: deterministic JSON with a fixed field
//! order, integer amounts in minor units, integer timestamps in seconds, and
//! an absent note canonicalized to the empty string.

use crate::hash::blake2b_256_multi;
use mint_types::{Amount, Currency, Signature, Timestamp, TxId, WalletId};
use serde::Serialize;

/// The signed object. serde_json emits struct fields in declaration order,
/// which makes the byte layout a compile-time property of this struct. Field
/// order is alphabetical by contract — do not reorder.
#[derive(Serialize)]
struct TransferPayload<'a> {
    amount: u64,
    currency: &'a str,
    note: &'a str,
    recipient: &'a str,
    timestamp: u64,
}

/// Encode the canonical transfer payload for signing or verification.
pub fn canonical_transfer_payload(
    amount: Amount,
    currency: &Currency,
    recipient: &WalletId,
    note: Option<&str>,
    timestamp: Timestamp,
) -> Vec<u8> {
    let payload = TransferPayload {
        amount: amount.raw(),
        currency: currency.as_str(),
        note: note.unwrap_or(""),
        recipient: recipient.as_str(),
        timestamp: timestamp.as_secs(),
    };
    serde_json::to_vec(&payload).expect("transfer payload is always serializable")
}

/// Compute the content id of a payment transaction.
///
/// Every field participates, parents and signature included, so two records
/// differing anywhere get different ids. Fields are hashed as length-prefixed
/// segments behind a domain tag.
#[allow(clippy::too_many_arguments)]
pub fn transaction_id(
    sender: &WalletId,
    recipient: &WalletId,
    amount: Amount,
    currency: &Currency,
    note: Option<&str>,
    timestamp: Timestamp,
    signature: &Signature,
    parents: &[TxId],
) -> TxId {
    let amount_bytes = amount.raw().to_le_bytes();
    let ts_bytes = timestamp.as_secs().to_le_bytes();
    let mut parts: Vec<&[u8]> = vec![
        b"mint/tx",
        sender.as_str().as_bytes(),
        recipient.as_str().as_bytes(),
        &amount_bytes,
        currency.as_str().as_bytes(),
        note.unwrap_or("").as_bytes(),
        &ts_bytes,
        signature.as_bytes(),
    ];
    for parent in parents {
        parts.push(parent.as_bytes());
    }
    TxId::new(blake2b_256_multi(&parts))
}

/// Compute the id of a reward transaction crediting `verifier` for verifying
/// `verified`.
pub fn reward_tx_id(verified: &TxId, verifier: &WalletId, timestamp: Timestamp) -> TxId {
    let ts_bytes = timestamp.as_secs().to_le_bytes();
    TxId::new(blake2b_256_multi(&[
        b"mint/reward",
        verified.as_bytes(),
        verifier.as_str().as_bytes(),
        &ts_bytes,
    ]))
}
