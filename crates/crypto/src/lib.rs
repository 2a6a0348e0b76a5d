// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key representation codec for YubiKey asymmetric keys.
//!
//! This crate converts between raw key material and the standard DER
//! containers used to move keys on and off a device:
//!
//! - **PKCS#8** `PrivateKeyInfo` for private keys
//! - **X.509** `SubjectPublicKeyInfo` for public keys
//!
//! Supported key types are RSA (1024 to 4096 bits), NIST P-256, P-384 and
//! P-521, Ed25519 and X25519.
//!
//! The codec only transcodes key representations. Signing, key generation and
//! point arithmetic belong to the platform crypto provider that consumes the
//! decoded [`PrivateKeyParameters`] and [`PublicKeyParameters`].
//!
//! # Layout
//!
//! - [`algorithm`]: algorithm and curve tags
//! - [`oid`]: object identifier registry
//! - [`definition`]: per key type metadata table
//! - [`der`]: PKCS#8 / SPKI decoders and encoders
//! - [`params`]: typed key parameter values
//! - [`secret`]: zeroing buffer for private key material
//! - `pem` (feature `pem`): RFC 7468 armor

pub mod algorithm;
pub mod definition;
pub mod der;
pub mod oid;
pub mod params;
pub mod secret;

mod op;
mod traits;

#[cfg(feature = "pem")]
pub mod pem;

pub use algorithm::*;
pub use definition::*;
pub use der::*;
pub use oid::*;
pub use op::*;
pub use params::*;
pub use secret::*;
use thiserror::Error;
pub use traits::*;

/// Error type for every codec operation.
///
/// Variants are grouped by [`CryptoErrorKind`] so that callers can tell a
/// corrupt blob from an unsupported one without matching every variant.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CryptoError {
    // Cryptographic-format errors
    /// A version field holds a value this codec does not accept.
    #[error("invalid {structure} version {found}, expected {expected}")]
    InvalidVersion {
        /// Name of the ASN.1 structure carrying the version.
        structure: &'static str,
        /// Value required by the codec.
        expected: i64,
        /// Value present in the input.
        found: i64,
    },
    /// An EC public point does not use the uncompressed `0x04` form.
    #[error("invalid EC point format")]
    InvalidPointFormat,
    /// Raw key material has the wrong length for its key type.
    #[error("invalid key length {actual}, expected {expected}")]
    InvalidKeyLength {
        /// Length required by the key type.
        expected: usize,
        /// Length present in the input.
        actual: usize,
    },
    /// An X25519 private scalar is not clamped per RFC 7748.
    #[error("X25519 private key is not clamped")]
    X25519NotClamped,
    /// A BIT STRING carrying a key declares unused bits.
    #[error("BIT STRING has {0} unused bits")]
    InvalidUnusedBits(u8),
    /// The `AlgorithmIdentifier` parameters do not fit the algorithm.
    #[error("invalid algorithm parameters")]
    InvalidAlgorithmParameters,
    /// An INTEGER that must be unsigned is negative.
    #[error("negative integer in key material")]
    NegativeInteger,
    /// A key component that must be non-zero decoded as zero.
    #[error("key component {0} is zero")]
    ZeroKeyComponent(&'static str),

    // Not-supported errors
    /// The object identifier is outside the supported set.
    #[error("unsupported OID {0}")]
    UnsupportedOid(String),
    /// The dotted object identifier text could not be parsed.
    #[error("malformed OID {0}")]
    MalformedOid(String),
    /// The object identifier is recognized but cannot be used for this request.
    #[error("OID {0} is not applicable to this request")]
    OidNotApplicable(String),
    /// No key definition exists for this key size.
    #[error("unsupported key size {0} bits")]
    UnsupportedKeySize(usize),

    // Invalid-argument errors
    /// A caller supplied parameter failed a precondition.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// A private key export was requested for parameters without private material.
    #[error("private key components are missing")]
    MissingPrivateComponents,
    /// The output buffer is too small.
    #[error("output buffer too small")]
    BufferTooSmall,

    // Malformed input
    /// The input is not valid DER for the expected structure.
    #[error("ASN.1 decode error")]
    Asn1DecodeError,
    /// The ASN.1 writer rejected a value.
    #[error("ASN.1 encode error")]
    Asn1EncodeError,
    /// The PEM armor is invalid or carries an unexpected label.
    #[error("PEM decode error")]
    PemDecodeError,
    /// The PEM encoder failed.
    #[error("PEM encode error")]
    PemEncodeError,

    // Resource state
    /// A zeroing buffer was read after it was wiped.
    #[error("buffer was wiped")]
    BufferWiped,
}

/// Broad category of a [`CryptoError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CryptoErrorKind {
    /// Well-formed ASN.1 with semantically invalid content.
    Format,
    /// Recognized structure with an algorithm or curve outside the supported set.
    NotSupported,
    /// Caller supplied parameters failed a precondition.
    InvalidArgument,
    /// Truncated or invalid tag-length-value structure.
    Malformed,
    /// Access to wiped sensitive memory.
    Wiped,
}

impl CryptoErrorKind {
    /// Returns true for errors that mean the input bytes are unusable.
    ///
    /// Malformed ASN.1 counts as a format error at the codec boundary.
    pub fn is_format(&self) -> bool {
        matches!(self, CryptoErrorKind::Format | CryptoErrorKind::Malformed)
    }
}

impl CryptoError {
    /// Returns the category of this error.
    pub fn kind(&self) -> CryptoErrorKind {
        match self {
            CryptoError::InvalidVersion { .. }
            | CryptoError::InvalidPointFormat
            | CryptoError::InvalidKeyLength { .. }
            | CryptoError::X25519NotClamped
            | CryptoError::InvalidUnusedBits(_)
            | CryptoError::InvalidAlgorithmParameters
            | CryptoError::NegativeInteger
            | CryptoError::ZeroKeyComponent(_) => CryptoErrorKind::Format,
            CryptoError::UnsupportedOid(_)
            | CryptoError::MalformedOid(_)
            | CryptoError::OidNotApplicable(_)
            | CryptoError::UnsupportedKeySize(_) => CryptoErrorKind::NotSupported,
            CryptoError::InvalidParameter(_)
            | CryptoError::MissingPrivateComponents
            | CryptoError::BufferTooSmall => CryptoErrorKind::InvalidArgument,
            CryptoError::Asn1DecodeError
            | CryptoError::Asn1EncodeError
            | CryptoError::PemDecodeError
            | CryptoError::PemEncodeError => CryptoErrorKind::Malformed,
            CryptoError::BufferWiped => CryptoErrorKind::Wiped,
        }
    }
}
