// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors returned by [`crate::decrypt`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// Ciphertext length was zero or not a multiple of the AES block size.
    #[error("ciphertext length {0} is not a positive multiple of 16")]
    InvalidLength(usize),

    /// The trailing PKCS#7 padding was malformed.
    ///
    /// This is the recoverable, public-facing analogue of spec's failure
    /// sentinel — callers MUST authenticate the ciphertext (HMAC, verified
    /// in constant time) before decrypting, since this error is itself a
    /// padding-oracle surface.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
}
