// SPDX-License-Identifier: MIT OR Apache-2.0

//! Curve25519 (X25519) key agreement and Ed25519 signatures.
//!
//! Both are wrapped from vetted, constant-time, pure-Rust crates
//! (`x25519-dalek`, `ed25519-dalek`) rather than hand-rolled field
//! arithmetic — the one place in this workspace where that substitution is
//! made, as spec'd. See `DESIGN.md` for the rationale.

#![cfg_attr(not(test), no_std)]

mod curve25519;
mod ed25519;
mod error;


pub use curve25519::{Curve25519PrivateKey, generate_keypair as generate_curve25519_keypair};
pub use curve25519::shared_secret as x25519_shared_secret;
pub use ed25519::{Ed25519PrivateKey, generate_keypair as generate_ed25519_keypair};
pub use ed25519::{sign as ed25519_sign, verify as ed25519_verify};
pub use error::AsymError;
