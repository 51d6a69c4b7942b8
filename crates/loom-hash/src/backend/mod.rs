// SPDX-License-Identifier: MIT OR Apache-2.0

//! Selects between the hand-written and vetted-library implementations of
//! SHA-256, HMAC-SHA256, and HKDF-SHA256 behind one trait, rather than
//! scattering `cfg(feature = "native-backend")` through the public API.

#[cfg(not(feature = "native-backend"))]
pub(crate) mod portable;

#[cfg(feature = "native-backend")]
mod native;

pub(crate) trait HashBackend {
    fn sha256(&self, data: &[u8], out: &mut [u8; 32]);
    fn hmac_sha256(&self, key: &[u8], message: &[u8], out: &mut [u8; 32]);
    fn hkdf_sha256(&self, salt: &[u8], ikm: &[u8], info: &[u8], out: &mut [u8]);
}

#[cfg(not(feature = "native-backend"))]
pub(crate) fn active() -> impl HashBackend {
    portable::PortableBackend
}

#[cfg(feature = "native-backend")]
pub(crate) fn active() -> impl HashBackend {
    native::NativeBackend
}
