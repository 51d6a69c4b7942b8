// SPDX-License-Identifier: MIT OR Apache-2.0

//! SHA-256, HMAC-SHA256, and HKDF-SHA256.
//!
//! Two backends implement the same [`backend::HashBackend`] trait: a
//! hand-written one (default) built only from the RFCs, and a vetted-library
//! one built on RustCrypto's `sha2`/`hmac`/`hkdf` crates (`native-backend`
//! feature). Callers see neither — only the three free functions below.

#![cfg_attr(not(test), no_std)]

mod backend;
mod error;

#[cfg(test)]
mod tests;

pub use error::HashError;

use backend::HashBackend;

/// Computes `SHA-256(data)`.
///
/// # Example
///
/// ```
/// let mut out = [0u8; 32];
/// loom_hash::sha256(b"", &mut out);
/// assert_eq!(hex::encode(out), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
/// ```
pub fn sha256(data: &[u8], out: &mut [u8; 32]) {
    backend::active().sha256(data, out);
}

/// Computes `HMAC-SHA256(key, message)` per RFC 2104.
pub fn hmac_sha256(key: &[u8], message: &[u8], out: &mut [u8; 32]) {
    backend::active().hmac_sha256(key, message, out);
}

/// Maximum number of output bytes [`hkdf_sha256`] can produce: `255 * 32`.
pub const HKDF_MAX_OUTPUT_LEN: usize = 255 * 32;

/// Derives `out.len()` bytes of output keying material via HKDF-SHA256 per
/// RFC 5869.
///
/// An empty `salt` is treated as the RFC's "salt not provided" case (an
/// all-zero, hash-length salt), not as a literal zero-length HMAC key — the
/// two are not the same thing, and this function makes sure they behave the
/// same way regardless of backend.
///
/// # Errors
///
/// Returns [`HashError::OutputTooLong`] if `out.len()` exceeds
/// [`HKDF_MAX_OUTPUT_LEN`].
pub fn hkdf_sha256(
    salt: &[u8],
    ikm: &[u8],
    info: &[u8],
    out: &mut [u8],
) -> Result<(), HashError> {
    if out.len() > HKDF_MAX_OUTPUT_LEN {
        return Err(HashError::output_too_long(out.len()));
    }
    backend::active().hkdf_sha256(salt, ikm, info, out);
    Ok(())
}
