// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vetted-library backend built on RustCrypto's `aes` and `cbc` crates,
//! selected by the `native-backend` feature.

extern crate alloc;

use alloc::vec::Vec;

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cbc::{Decryptor, Encryptor};

use super::CipherBackend;
use crate::error::CipherError;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

pub(crate) struct NativeBackend;

impl CipherBackend for NativeBackend {
    fn encrypted_len(&self, plaintext_len: usize) -> usize {
        plaintext_len + 16 - (plaintext_len % 16)
    }

    fn encrypt(&self, key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8], out: &mut [u8]) {
        let mut buf: Vec<u8> = Vec::with_capacity(out.len());
        buf.extend_from_slice(plaintext);
        buf.resize(out.len(), 0);
        let encryptor = Aes256CbcEnc::new(key.into(), iv.into());
        let ciphertext = encryptor
            .encrypt_padded_mut::<Pkcs7>(&mut buf, plaintext.len())
            .expect("output buffer sized by `encrypted_len`");
        out.copy_from_slice(ciphertext);
        buf.fill(0);
    }

    fn decrypt(
        &self,
        key: &[u8; 32],
        iv: &[u8; 16],
        ciphertext: &[u8],
        out: &mut [u8],
    ) -> Result<usize, CipherError> {
        if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
            return Err(CipherError::InvalidLength(ciphertext.len()));
        }
        out[..ciphertext.len()].copy_from_slice(ciphertext);
        let decryptor = Aes256CbcDec::new(key.into(), iv.into());
        let plaintext = decryptor
            .decrypt_padded_mut::<Pkcs7>(&mut out[..ciphertext.len()])
            .map_err(|_| CipherError::InvalidPadding)?;
        Ok(plaintext.len())
    }
}
