// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cryptographic primitive layer for Olm/Megolm-style end-to-end encryption.
//!
//! This crate is a facade over five small, stateless sub-crates, each owning
//! one of the primitives a Double-Ratchet-style session layer composes into
//! secure messaging:
//!
//! | Module | Crate | Responsibility |
//! |---|---|---|
//! | [`zero`] | `loom-zero` | Scrubbing secret buffers, constant-time compare |
//! | [`codec`] | `loom-codec` | Unpadded Base64 (public keys, signatures) |
//! | [`hash`] | `loom-hash` | SHA-256, HMAC-SHA256, HKDF-SHA256 |
//! | [`cipher`] | `loom-cipher` | AES-256-CBC with PKCS#7 padding |
//! | [`asym`] | `loom-asym` | Curve25519 (X25519) and Ed25519 |
//!
//! None of these hold state between calls, perform I/O, or log. Every public
//! function is safe to call concurrently from multiple threads as long as no
//! two calls alias the same input or output buffer — callers that share
//! secret material across threads own their own synchronization.
//!
//! This layer intentionally does not provide authenticated encryption: AES-256-CBC
//! here gives confidentiality only. Callers compose it with [`hash::hmac_sha256`]
//! over `(iv, ciphertext)`, verified through [`zero::constant_time_eq`], before
//! ever calling [`cipher::decrypt`] — see that function's docs for why.
//!
//! Session state machines, pickling, and key storage live in the (out-of-scope)
//! layer above this one; this crate is deliberately just the primitives.

#![cfg_attr(not(test), no_std)]

pub use loom_asym as asym;
pub use loom_cipher as cipher;
pub use loom_codec as codec;
pub use loom_hash as hash;
pub use loom_zero as zero;
