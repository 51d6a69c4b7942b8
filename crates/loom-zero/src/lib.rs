// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secure-memory primitives shared by every `loom-*` crate.
//!
//! The primitive layer above this crate (hashing, ciphers, key agreement)
//! handles secret bytes on the stack constantly: hash compression state,
//! cipher key schedules, scalar-multiplication scratch. This crate gives
//! those call sites two guarantees the compiler will not give for free:
//!
//! - [`fast_zeroize`] / [`FastZeroizable`] overwrite a buffer with zeros in a
//!   way the optimizer cannot remove as a dead store.
//! - [`constant_time_eq`] compares two buffers in time depending only on
//!   their length, never on where they first differ.
//!
//! [`ZeroizeOnDropSentinel`] and [`ZeroizingGuard`] build RAII guarantees on
//! top of those two primitives for types that hold secret working state for
//! the lifetime of a struct rather than a single stack array.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

#[cfg(test)]
mod tests;

/// Overwrites a byte slice with zeros, unelidably.
///
/// Uses `write_bytes` (memset) followed by a volatile read, which is
/// considerably faster than a byte-by-byte volatile write loop and just as
/// resistant to dead-store elimination: the optimizer cannot prove the
/// subsequent read is unobservable, so it cannot remove the write that
/// precedes it.
#[inline(always)]
pub fn fast_zeroize(buf: &mut [u8]) {
    fast_zeroize_slice(buf);
}

/// Generic form of [`fast_zeroize`], usable on `[u32; N]`, `[u64; N]`, and
/// other plain-old-data arrays that make up streaming hash/cipher state
/// (message schedules, working variables) and not just `[u8]` buffers.
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }
    let byte_len = core::mem::size_of_val(slice);
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}

/// Types that can scrub their own secret bytes on demand.
pub trait FastZeroizable {
    /// Overwrites all secret bytes owned by `self` with zeros.
    fn fast_zeroize(&mut self);
}

impl FastZeroizable for [u8] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        fast_zeroize(self);
    }
}

impl<const N: usize> FastZeroizable for [u8; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        fast_zeroize(self.as_mut_slice());
    }
}

impl FastZeroizable for Vec<u8> {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        fast_zeroize(self.as_mut_slice());
        self.clear();
    }
}

/// Returns `true` iff `a` and `b` hold the same bytes.
///
/// Runs in time depending only on `a.len()` and `b.len()`, never on the
/// position of the first differing byte. Used wherever this crate itself
/// must compare secret-derived bytes (HMAC re-verification in tests, the
/// Ed25519 canonical-encoding check); callers composing HMAC-then-decrypt
/// around [`loom_cipher`](https://docs.rs/loom-cipher) must additionally use
/// this (or an equivalent constant-time comparator) themselves before
/// calling decrypt — this crate cannot see across that boundary.
///
/// # Example
///
/// ```
/// use loom_zero::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Returns `true` iff every byte of `slice` is zero.
///
/// Intended for tests that assert a function scrubbed its working state
/// before returning (spec's "Scrub" testable property): construct the
/// secret-holding struct, run the operation, then probe its fields.
#[inline]
pub fn is_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Marker embedded in structs that hold secret working state for longer than
/// a single stack frame (streaming hash state, cipher key schedules).
///
/// A type carrying this sentinel must call [`ZeroizeOnDropSentinel::mark`]
/// once it has scrubbed all of its other fields. If the sentinel is dropped
/// unmarked, it panics in debug builds — turning a missed scrub into a test
/// failure instead of a silent leak. In release builds the check is skipped,
/// since the panic exists to catch a programming mistake during development,
/// not to gate production behavior on it.
#[derive(Default)]
pub struct ZeroizeOnDropSentinel {
    marked: bool,
}

impl ZeroizeOnDropSentinel {
    /// Marks this sentinel as satisfied: the owning struct's secret fields
    /// have been scrubbed.
    #[inline(always)]
    pub fn mark(&mut self) {
        self.marked = true;
    }
}

impl Drop for ZeroizeOnDropSentinel {
    fn drop(&mut self) {
        if cfg!(debug_assertions) && !self.marked {
            panic!("ZeroizeOnDropSentinel dropped without scrubbing its owning struct");
        }
    }
}

impl fmt::Debug for ZeroizeOnDropSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZeroizeOnDropSentinel")
    }
}

/// RAII guard that scrubs an owned byte buffer when it is dropped.
///
/// Used at the boundary between this layer and its caller (the out-of-scope
/// session layer in spec's terms): a shared secret or derived key can be
/// handed to the caller wrapped in a `ZeroizingGuard` so that even if the
/// caller forgets to scrub it, the buffer is still zeroed once it goes out
/// of scope.
pub struct ZeroizingGuard {
    inner: Vec<u8>,
}

impl ZeroizingGuard {
    /// Takes ownership of `bytes`. The guard scrubs them when it is dropped.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { inner: bytes }
    }

    /// Moves a caller-owned slot into a guard, leaving the source scrubbed.
    ///
    /// Useful when the source is a fixed-size stack array that would
    /// otherwise sit around unscrubbed until its own frame unwinds.
    pub fn from_mut_vec(source: &mut Vec<u8>) -> Self {
        let taken = core::mem::take(source);
        source.fast_zeroize();
        Self { inner: taken }
    }
}

impl core::ops::Deref for ZeroizingGuard {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.inner
    }
}

impl fmt::Debug for ZeroizingGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroizingGuard; {} bytes]", self.inner.len())
    }
}

impl Drop for ZeroizingGuard {
    fn drop(&mut self) {
        self.inner.fast_zeroize();
    }
}
