// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256 in CBC mode with PKCS#7 padding.
//!
//! This module provides confidentiality only. Authentication is NOT
//! provided: callers must pair every ciphertext with an HMAC over
//! `(iv ∥ ciphertext)`, verify it in constant time, and only then call
//! [`decrypt`]. [`decrypt`] itself is a padding-oracle surface — its
//! `Err(CipherError::InvalidPadding)` is distinguishable from a length
//! failure by design, and a caller that calls it on unauthenticated
//! ciphertext reintroduces the oracle this crate cannot close from below.

#![cfg_attr(not(test), no_std)]

mod backend;
mod error;


pub use error::CipherError;

use backend::CipherBackend;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// AES block / IV length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Ciphertext length for a plaintext of length `n`: `n + 16 - (n mod 16)`.
///
/// A full block of padding is always appended, even when `n` is already
/// block-aligned.
pub fn encrypted_len(plaintext_len: usize) -> usize {
    backend::active().encrypted_len(plaintext_len)
}

/// Encrypts `plaintext` under `key`/`iv`, writing exactly
/// [`encrypted_len`]`(plaintext.len())` bytes to `out`.
///
/// # Panics
///
/// In debug builds, panics if `out.len() != encrypted_len(plaintext.len())`
/// — a caller-sizing bug, not a recoverable runtime condition.
pub fn encrypt(key: &[u8; KEY_LEN], iv: &[u8; BLOCK_LEN], plaintext: &[u8], out: &mut [u8]) {
    debug_assert_eq!(out.len(), encrypted_len(plaintext.len()));
    backend::active().encrypt(key, iv, plaintext, out);
}

/// Decrypts `ciphertext` under `key`/`iv` into `out`, which must be exactly
/// `ciphertext.len()` bytes; returns the plaintext length, which is always
/// `<= ciphertext.len()`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidLength`] if `ciphertext` is empty or not a
/// multiple of [`BLOCK_LEN`], or [`CipherError::InvalidPadding`] if the
/// trailing PKCS#7 padding is malformed (every padding byte is checked, not
/// only the last one).
pub fn decrypt(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    ciphertext: &[u8],
    out: &mut [u8],
) -> Result<usize, CipherError> {
    debug_assert_eq!(out.len(), ciphertext.len());
    backend::active().decrypt(key, iv, ciphertext, out)
}
