// Copyright (C) Microsoft Corporation. All rights reserved.

//! Encoding and decoding traits for key containers.
//!
//! The encoding pattern follows a two-phase approach:
//!
//! 1. **Size Query**: Call with `None` output to determine required buffer size
//! 2. **Encoding**: Call with `Some(buffer)` to perform actual encoding

use super::*;

/// Trait for encoding key parameters to bytes.
///
/// # Implementation Pattern
///
/// Implementors should:
/// 1. Calculate the output size
/// 2. If `output` is `None`, return the size without writing
/// 3. If `output` is `Some`, fail with `CryptoError::BufferTooSmall` if it is
///    short, otherwise write into it
/// 4. Return the number of bytes written
pub trait EncodeOp {
    /// Encodes into `output`, or returns the required size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::BufferTooSmall` if `output` is too small, or an
    /// error describing why the parameters cannot be encoded.
    fn to_bytes(&self, output: Option<&mut [u8]>) -> Result<usize, CryptoError>;
}

/// Trait for decoding bytes into key parameters.
///
/// # Type Parameters
///
/// - `T`: The type of the decoded output
/// - `P`: Parameters required for decoding (`()` if none are needed)
pub trait DecodeOp {
    /// The type of the decoded output.
    type T;

    /// The type of parameters required for decoding.
    type P;

    /// Decodes `input` into a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed, uses an unsupported
    /// algorithm or fails validation.
    fn from_bytes(input: &[u8], params: Self::P) -> Result<Self::T, CryptoError>;
}
