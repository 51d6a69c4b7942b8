// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vetted-library backend built on RustCrypto's `sha2`, `hmac`, and `hkdf`
//! crates, selected by the `native-backend` feature.

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use super::HashBackend;

pub(crate) struct NativeBackend;

impl HashBackend for NativeBackend {
    fn sha256(&self, data: &[u8], out: &mut [u8; 32]) {
        let digest = Sha256::digest(data);
        out.copy_from_slice(&digest);
    }

    fn hmac_sha256(&self, key: &[u8], message: &[u8], out: &mut [u8; 32]) {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(message);
        let tag = mac.finalize().into_bytes();
        out.copy_from_slice(&tag);
    }

    fn hkdf_sha256(&self, salt: &[u8], ikm: &[u8], info: &[u8], out: &mut [u8]) {
        // `hkdf` treats `None` as the all-zero salt required by RFC 5869 §2.2;
        // an empty-but-present slice must behave identically, matching the
        // portable backend.
        let salt = if salt.is_empty() { None } else { Some(salt) };
        let hk = Hkdf::<Sha256>::new(salt, ikm);
        hk.expand(info, out)
            .expect("caller validates output length before reaching this point");
    }
}
