// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors returned by [`crate::ed25519_generate_keypair`] and
/// [`crate::ed25519_sign`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AsymError {
    /// A supplied Ed25519 private key's embedded public half does not match
    /// the public key the caller also supplied.
    #[error("Ed25519 private key does not match the supplied public key")]
    KeyMismatch,
}
