// SPDX-License-Identifier: MIT OR Apache-2.0

//! Selects between the hand-written and vetted-library AES-256-CBC
//! implementations behind one trait.

#[cfg(not(feature = "native-backend"))]
mod portable;

#[cfg(feature = "native-backend")]
mod native;

use crate::error::CipherError;

pub(crate) trait CipherBackend {
    fn encrypted_len(&self, plaintext_len: usize) -> usize;
    fn encrypt(&self, key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8], out: &mut [u8]);
    fn decrypt(
        &self,
        key: &[u8; 32],
        iv: &[u8; 16],
        ciphertext: &[u8],
        out: &mut [u8],
    ) -> Result<usize, CipherError>;
}

#[cfg(not(feature = "native-backend"))]
pub(crate) fn active() -> impl CipherBackend {
    portable::PortableBackend
}

#[cfg(feature = "native-backend")]
pub(crate) fn active() -> impl CipherBackend {
    native::NativeBackend
}
