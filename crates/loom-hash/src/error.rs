// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use crate::HKDF_MAX_OUTPUT_LEN;

/// Errors returned by [`crate::hkdf_sha256`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// Requested output longer than HKDF-SHA256 can produce (`255 * 32` bytes).
    #[error("HKDF output length {requested} exceeds the maximum of {max} bytes")]
    OutputTooLong { requested: usize, max: usize },
}

impl HashError {
    pub(crate) fn output_too_long(requested: usize) -> Self {
        Self::OutputTooLong { requested, max: HKDF_MAX_OUTPUT_LEN }
    }
}
