// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hand-written backend: no external crypto crates, just the RFCs.

mod hkdf;
mod hmac;
mod sha256;

use super::HashBackend;

pub(crate) struct PortableBackend;

impl HashBackend for PortableBackend {
    fn sha256(&self, data: &[u8], out: &mut [u8; 32]) {
        sha256::sha256(data, out);
    }

    fn hmac_sha256(&self, key: &[u8], message: &[u8], out: &mut [u8; 32]) {
        hmac::hmac_sha256(key, message, out);
    }

    fn hkdf_sha256(&self, salt: &[u8], ikm: &[u8], info: &[u8], out: &mut [u8]) {
        hkdf::hkdf_sha256(salt, ikm, info, out);
    }
}
