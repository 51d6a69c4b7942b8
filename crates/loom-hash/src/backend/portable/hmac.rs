// SPDX-License-Identifier: MIT OR Apache-2.0

//! HMAC-SHA256 per RFC 2104.

use loom_zero::{FastZeroizable, ZeroizeOnDropSentinel};

use super::sha256::{HASH_LEN, Sha256State, sha256};

const BLOCK_LEN: usize = 64;

struct HmacScratch {
    k_ipad: [u8; BLOCK_LEN],
    k_opad: [u8; BLOCK_LEN],
    key_block: [u8; BLOCK_LEN],
    inner_hash: [u8; HASH_LEN],
    __sentinel: ZeroizeOnDropSentinel,
}

impl Drop for HmacScratch {
    fn drop(&mut self) {
        self.k_ipad.fast_zeroize();
        self.k_opad.fast_zeroize();
        self.key_block.fast_zeroize();
        self.inner_hash.fast_zeroize();
        self.__sentinel.mark();
    }
}

/// Computes `HMAC-SHA256(key, message)` into `out`.
///
/// If `key` is longer than the 64-byte block size it is first hashed down
/// to 32 bytes per RFC 2104 §2; the shortened key, and every other
/// intermediate (`ipad`, `opad`, the inner hash) live only inside
/// [`HmacScratch`], which scrubs them on every exit path including the
/// early-return panics that `[u8; BLOCK_LEN]` indexing would otherwise
/// leave the compiler free to unwind through silently.
pub(crate) fn hmac_sha256(key: &[u8], message: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut scratch = HmacScratch {
        k_ipad: [0x36; BLOCK_LEN],
        k_opad: [0x5c; BLOCK_LEN],
        key_block: [0u8; BLOCK_LEN],
        inner_hash: [0u8; HASH_LEN],
        __sentinel: ZeroizeOnDropSentinel::default(),
    };

    if key.len() > BLOCK_LEN {
        let mut shortened = [0u8; HASH_LEN];
        sha256(key, &mut shortened);
        scratch.key_block[..HASH_LEN].copy_from_slice(&shortened);
        shortened.fast_zeroize();
    } else {
        scratch.key_block[..key.len()].copy_from_slice(key);
    }

    for i in 0..BLOCK_LEN {
        scratch.k_ipad[i] ^= scratch.key_block[i];
        scratch.k_opad[i] ^= scratch.key_block[i];
    }

    let mut inner = Sha256State::new();
    inner.update(&scratch.k_ipad);
    inner.update(message);
    inner.finalize(&mut scratch.inner_hash);

    let mut outer = Sha256State::new();
    outer.update(&scratch.k_opad);
    outer.update(&scratch.inner_hash);
    outer.finalize(out);
}
