// SPDX-License-Identifier: MIT OR Apache-2.0

//! HKDF-SHA256 per RFC 5869 (extract-then-expand).

extern crate alloc;

use alloc::vec::Vec;

use loom_zero::FastZeroizable;

use super::hmac::hmac_sha256;
use super::sha256::HASH_LEN;

/// Maximum output length: `255 * HashLen`.
pub(crate) const MAX_OUTPUT_LEN: usize = 255 * HASH_LEN;

/// HKDF-Extract per RFC 5869 §2.2.
///
/// An empty `salt` is treated as the all-zero 32-byte salt, matching both
/// the RFC's "not provided" case and a caller passing a zero-length,
/// non-null salt buffer — the two must behave identically.
fn extract(salt: &[u8], ikm: &[u8], prk: &mut [u8; HASH_LEN]) {
    const ZERO_SALT: [u8; HASH_LEN] = [0u8; HASH_LEN];
    let salt = if salt.is_empty() { &ZERO_SALT[..] } else { salt };
    hmac_sha256(salt, ikm, prk);
}

/// HKDF-Expand per RFC 5869 §2.3.
fn expand(prk: &[u8; HASH_LEN], info: &[u8], out: &mut [u8]) {
    let mut t_prev: [u8; HASH_LEN] = [0u8; HASH_LEN];
    let mut t_prev_len = 0usize;
    let mut t_curr = [0u8; HASH_LEN];
    let n = out.len().div_ceil(HASH_LEN);
    let mut offset = 0;

    for counter in 1..=n {
        let mut message = Vec::with_capacity(t_prev_len + info.len() + 1);
        message.extend_from_slice(&t_prev[..t_prev_len]);
        message.extend_from_slice(info);
        message.push(counter as u8);

        hmac_sha256(prk, &message, &mut t_curr);
        message.fast_zeroize();

        let copy_len = HASH_LEN.min(out.len() - offset);
        out[offset..offset + copy_len].copy_from_slice(&t_curr[..copy_len]);
        offset += copy_len;

        t_prev.copy_from_slice(&t_curr);
        t_prev_len = HASH_LEN;
    }

    t_prev.fast_zeroize();
    t_curr.fast_zeroize();
}

/// Full HKDF-SHA256: Extract-then-Expand, writing `out.len()` bytes of
/// output keying material.
///
/// `out.len()` must not exceed [`MAX_OUTPUT_LEN`] (255 * 32 = 8160); this is
/// a programmer error per the spec, not a recoverable one, so it is enforced
/// with a `debug_assert!` here and as a typed error at the public API in
/// `lib.rs`.
pub(crate) fn hkdf_sha256(salt: &[u8], ikm: &[u8], info: &[u8], out: &mut [u8]) {
    debug_assert!(out.len() <= MAX_OUTPUT_LEN, "HKDF output length exceeds 255*HashLen");

    let mut prk = [0u8; HASH_LEN];
    extract(salt, ikm, &mut prk);
    expand(&prk, info, out);
    prk.fast_zeroize();
}
