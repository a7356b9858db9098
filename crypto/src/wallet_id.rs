//! Wallet-id derivation from public keys.
//!
//! Wallet ids are `mint_` + the first 16 bytes of Blake2b-256(public key) in
//! lowercase hex (37 characters total). Deterministic: registering the same
//! key twice yields the same id.

use crate::hash::blake2b_256;
use mint_types::{PublicKey, WalletId};

/// Derive the wallet id for a public key.
pub fn derive_wallet_id(public_key: &PublicKey) -> WalletId {
    let digest = blake2b_256(public_key.as_bytes());
    WalletId::new(format!("mint_{}", hex::encode(&digest[..16])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn derivation_is_deterministic() {
        let kp = keypair_from_seed(&[7u8; 32]);
        assert_eq!(derive_wallet_id(&kp.public), derive_wallet_id(&kp.public));
    }

    #[test]
    fn id_has_expected_shape() {
        let kp = generate_keypair();
        let id = derive_wallet_id(&kp.public);
        assert!(id.as_str().starts_with("mint_"));
        assert_eq!(id.as_str().len(), 5 + 32);
        assert!(!id.is_reward_pool());
    }

    #[test]
    fn different_keys_different_ids() {
        let k1 = generate_keypair();
        let k2 = generate_keypair();
        assert_ne!(derive_wallet_id(&k1.public), derive_wallet_id(&k2.public));
    }
}
