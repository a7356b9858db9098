//! Cryptographic primitives for Micro Mint.
//!
//! - **Ed25519** for transaction signing and verification
//! - **Blake2b** for hashing (transaction ids, wallet-id derivation)
//! - Canonical payload encoding — the byte-exact contract between signer
//!   and verifier

pub mod hash;
pub mod keys;
pub mod payload;
pub mod sign;
pub mod verifier;
pub mod wallet_id;

pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use payload::{canonical_transfer_payload, reward_tx_id, transaction_id};
pub use sign::{sign_message, verify_signature};
pub use verifier::{Ed25519Verifier, SignatureVerifier};
pub use wallet_id::derive_wallet_id;
