// SPDX-License-Identifier: MIT OR Apache-2.0

//! Curve25519 (X25519) key agreement, wrapping `x25519-dalek`.
//!
//! Field arithmetic and the scalar-multiplication ladder are the one place
//! this crate substitutes a vetted, constant-time pure-Rust implementation
//! for hand-rolled code — recorded as an Open Question decision in
//! `DESIGN.md`.

use loom_zero::ZeroizeOnDropSentinel;
use x25519_dalek::{PublicKey, StaticSecret};

/// A Curve25519 private scalar, clamped per RFC 7748 §5.
pub struct Curve25519PrivateKey {
    bytes: [u8; 32],
    __sentinel: ZeroizeOnDropSentinel,
}

impl Curve25519PrivateKey {
    /// Wraps an already-clamped (or about-to-be-clamped; clamping is
    /// idempotent) 32-byte scalar, e.g. one restored from storage.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        let secret = StaticSecret::from(bytes);
        Self { bytes: secret.to_bytes(), __sentinel: ZeroizeOnDropSentinel::default() }
    }

    /// Returns the clamped scalar bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }
}

impl Drop for Curve25519PrivateKey {
    fn drop(&mut self) {
        loom_zero::fast_zeroize(&mut self.bytes);
        self.__sentinel.mark();
    }
}

/// Generates a Curve25519 keypair from 32 bytes of caller-supplied entropy.
///
/// The private scalar is clamped internally per RFC 7748; the public key is
/// `scalar · basepoint(9)`.
pub fn generate_keypair(random_32: &[u8; 32]) -> (Curve25519PrivateKey, [u8; 32]) {
    let secret = StaticSecret::from(*random_32);
    let public = PublicKey::from(&secret);
    let private = Curve25519PrivateKey {
        bytes: secret.to_bytes(),
        __sentinel: ZeroizeOnDropSentinel::default(),
    };
    (private, public.to_bytes())
}

/// Computes `X25519(our_priv, their_pub)`.
///
/// The output is raw ECDH output, not a key: callers must pass it through
/// HKDF (see [`loom_hash::hkdf_sha256`]) before using it cryptographically.
pub fn shared_secret(our_priv: &Curve25519PrivateKey, their_pub: &[u8; 32]) -> [u8; 32] {
    let secret = StaticSecret::from(our_priv.bytes);
    let public = PublicKey::from(*their_pub);
    secret.diffie_hellman(&public).to_bytes()
}
