// Copyright (C) Microsoft Corporation. All rights reserved.

//! Encoding operation wrapper.

use super::*;

/// Encoding operation wrapper.
///
/// Gives every [`EncodeOp`] implementation the same calling convention,
/// including a `Vec` returning helper built on the size query.
pub struct Encoder;

impl Encoder {
    /// Encodes with `algo`.
    ///
    /// # Arguments
    ///
    /// * `algo` - The encoder
    /// * `output` - Optional output buffer. If `None`, only calculates required size.
    ///
    /// # Returns
    ///
    /// Returns the number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    pub fn encode<Algo: EncodeOp>(
        algo: &Algo,
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.to_bytes(output)
    }

    /// Encodes with `algo` into a newly allocated vector.
    pub fn encode_vec<Algo: EncodeOp>(algo: &Algo) -> Result<Vec<u8>, CryptoError> {
        let size = Self::encode(algo, None)?;
        let mut buffer = vec![0u8; size];
        let len = Self::encode(algo, Some(&mut buffer))?;
        buffer.truncate(len);
        Ok(buffer)
    }
}
