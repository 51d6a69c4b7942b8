// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ed25519 signatures (RFC 8032), wrapping `ed25519-dalek`.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use loom_zero::ZeroizeOnDropSentinel;

use crate::error::AsymError;

/// A 64-byte Ed25519 private key: the 32-byte seed followed by the 32-byte
/// public key, matching the `seed ∥ public` convention libsodium (and this
/// primitive layer's original Olm implementation) uses for its "secret key"
/// — not RFC 8032 §5.1.5's internal `H(seed)`-expanded scalar-and-prefix
/// form, which no implementation actually exposes at the API boundary. See
/// `DESIGN.md` for this Open Question's resolution.
pub struct Ed25519PrivateKey {
    bytes: [u8; 64],
    __sentinel: ZeroizeOnDropSentinel,
}

impl Ed25519PrivateKey {
    /// Returns the `seed ∥ public` bytes.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.bytes
    }

    fn seed(&self) -> [u8; 32] {
        self.bytes[..32].try_into().unwrap()
    }

    fn embedded_public(&self) -> [u8; 32] {
        self.bytes[32..].try_into().unwrap()
    }
}

impl Drop for Ed25519PrivateKey {
    fn drop(&mut self) {
        loom_zero::fast_zeroize(&mut self.bytes);
        self.__sentinel.mark();
    }
}

/// Deterministically expands a 32-byte seed into an Ed25519 keypair per
/// RFC 8032 §5.1.5.
pub fn generate_keypair(seed_32: &[u8; 32]) -> (Ed25519PrivateKey, [u8; 32]) {
    let signing_key = SigningKey::from_bytes(seed_32);
    let public = signing_key.verifying_key().to_bytes();

    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(seed_32);
    bytes[32..].copy_from_slice(&public);

    (Ed25519PrivateKey { bytes, __sentinel: ZeroizeOnDropSentinel::default() }, public)
}

/// Signs `message` with `priv_64`, whose embedded public half must match
/// `pub_32`.
///
/// # Errors
///
/// Returns [`AsymError::KeyMismatch`] if `priv_64`'s embedded public key
/// does not equal `pub_32`.
pub fn sign(
    priv_64: &Ed25519PrivateKey,
    pub_32: &[u8; 32],
    message: &[u8],
) -> Result<[u8; 64], AsymError> {
    if priv_64.embedded_public() != *pub_32 {
        return Err(AsymError::KeyMismatch);
    }
    let signing_key = SigningKey::from_bytes(&priv_64.seed());
    Ok(signing_key.sign(message).to_bytes())
}

/// Verifies a detached Ed25519 signature.
///
/// Returns `false` (never an error) for a malformed public key or
/// signature, or a non-canonical `R`/`S` encoding per RFC 8032 §5.1.7, in
/// addition to a genuinely invalid signature — all are simply "not a valid
/// signature" to a caller.
pub fn verify(pub_32: &[u8; 32], message: &[u8], signature_64: &[u8; 64]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(pub_32) else {
        return false;
    };
    let signature = Signature::from_bytes(signature_64);
    verifying_key.verify(message, &signature).is_ok()
}
