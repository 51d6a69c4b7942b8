// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hand-written backend: lookup-table AES-256 plus CBC/PKCS#7, no external
//! crypto crates.

mod aes256;
mod cbc;

use super::CipherBackend;
use crate::error::CipherError;

pub(crate) struct PortableBackend;

impl CipherBackend for PortableBackend {
    fn encrypted_len(&self, plaintext_len: usize) -> usize {
        cbc::encrypted_len(plaintext_len)
    }

    fn encrypt(&self, key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8], out: &mut [u8]) {
        cbc::encrypt(key, iv, plaintext, out);
    }

    fn decrypt(
        &self,
        key: &[u8; 32],
        iv: &[u8; 16],
        ciphertext: &[u8],
        out: &mut [u8],
    ) -> Result<usize, CipherError> {
        cbc::decrypt(key, iv, ciphertext, out)
    }
}
