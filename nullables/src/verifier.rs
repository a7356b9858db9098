//! Signature-verifier stubs.

use mint_crypto::SignatureVerifier;
use mint_types::{PublicKey, Signature};

/// Accepts every signature. For tests exercising engine logic that do not
/// want to produce real Ed25519 signatures.
pub struct AcceptAllVerifier;

impl SignatureVerifier for AcceptAllVerifier {
    fn verify(&self, _payload: &[u8], _signature: &Signature, _public_key: &PublicKey) -> bool {
        true
    }
}

/// Rejects every signature. For tests asserting the invalid-signature path.
pub struct RejectAllVerifier;

impl SignatureVerifier for RejectAllVerifier {
    fn verify(&self, _payload: &[u8], _signature: &Signature, _public_key: &PublicKey) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stubs_ignore_their_input() {
        let key = PublicKey([0u8; 32]);
        assert!(AcceptAllVerifier.verify(b"", &Signature::ZERO, &key));
        assert!(!RejectAllVerifier.verify(b"", &Signature::ZERO, &key));
    }
}
