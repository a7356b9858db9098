//! The pluggable signature-verification seam.

use crate::sign::verify_signature;
use mint_types::{PublicKey, Signature};

/// Checks a signature over the canonical payload bytes.
///
/// The transaction engine takes this as `Arc<dyn SignatureVerifier>` so tests
/// and demo adapters can swap the check out (see `mint-nullables`).
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, payload: &[u8], signature: &Signature, public_key: &PublicKey) -> bool;
}

/// Production implementation backed by Ed25519.
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, payload: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        verify_signature(payload, signature, public_key)
    }
}
