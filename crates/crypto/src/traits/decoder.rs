// Copyright (C) Microsoft Corporation. All rights reserved.

//! Decoding operation wrapper.

use super::*;

/// Decoding operation wrapper.
pub struct Decoder;

impl Decoder {
    /// Decodes `input` with the decoder `Algo`.
    ///
    /// # Arguments
    ///
    /// * `input` - The byte representation to decode
    /// * `params` - Parameters required for decoding (use `()` if none needed)
    ///
    /// # Errors
    ///
    /// Returns whatever error `Algo` reports for the input.
    pub fn decode<Algo: DecodeOp>(input: &[u8], params: Algo::P) -> Result<Algo::T, CryptoError> {
        Algo::from_bytes(input, params)
    }
}
