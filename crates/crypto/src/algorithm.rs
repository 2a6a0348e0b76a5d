// Copyright (C) Microsoft Corporation. All rights reserved.

//! Algorithm and curve tags.
//!
//! These tags select the decode/encode branch for a key and determine which
//! invariants its parameters must satisfy.

use std::fmt;

use super::*;

/// Asymmetric key algorithm family.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyAlgorithm {
    /// RSA (PKCS#1 keys carried under `rsaEncryption`).
    Rsa,

    /// Elliptic curve keys on a NIST prime curve (`id-ecPublicKey`).
    Ecc,

    /// X25519 key agreement keys (RFC 8410).
    X25519,

    /// Ed25519 signature keys (RFC 8410).
    Ed25519,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyAlgorithm::Rsa => "RSA",
            KeyAlgorithm::Ecc => "ECC",
            KeyAlgorithm::X25519 => "X25519",
            KeyAlgorithm::Ed25519 => "Ed25519",
        };
        f.write_str(name)
    }
}

/// Enumeration of supported NIST elliptic curves.
///
/// # Security Levels
///
/// - **P-256**: approximately 128-bit security strength
/// - **P-384**: approximately 192-bit security strength
/// - **P-521**: approximately 256-bit security strength
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EccCurve {
    /// NIST P-256 curve (secp256r1).
    P256,

    /// NIST P-384 curve (secp384r1).
    P384,

    /// NIST P-521 curve (secp521r1).
    P521,
}

impl EccCurve {
    /// Returns the coordinate size in bytes for the curve.
    ///
    /// This is also the length of an encoded private scalar:
    /// - P-256: 32 bytes
    /// - P-384: 48 bytes
    /// - P-521: 66 bytes (521 bits rounded up to a byte boundary)
    pub fn point_size(&self) -> usize {
        match self {
            EccCurve::P256 => 32,
            EccCurve::P384 => 48,
            EccCurve::P521 => 66,
        }
    }

    /// Returns the bit size of the curve's prime field.
    pub fn bit_size(&self) -> usize {
        match self {
            EccCurve::P256 => 256,
            EccCurve::P384 => 384,
            EccCurve::P521 => 521,
        }
    }

    /// Returns the size of an uncompressed SEC1 point (`0x04 || X || Y`).
    pub fn encoded_point_size(&self) -> usize {
        1 + 2 * self.point_size()
    }
}

/// Converts a curve bit size to an ECC curve identifier.
///
/// # Errors
///
/// Returns `CryptoError::UnsupportedKeySize` if the bit size does not match
/// any supported curve (must be exactly 256, 384, or 521).
impl TryFrom<usize> for EccCurve {
    type Error = CryptoError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            256 => Ok(EccCurve::P256),
            384 => Ok(EccCurve::P384),
            521 => Ok(EccCurve::P521),
            _ => Err(CryptoError::UnsupportedKeySize(size)),
        }
    }
}

/// Which Curve25519 based algorithm a raw 32-byte key belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Curve25519Kind {
    /// Montgomery form, used for key agreement.
    X25519,

    /// Twisted Edwards form, used for signatures.
    Ed25519,
}

impl Curve25519Kind {
    /// Length in bytes of both the private scalar and the public point.
    pub const KEY_SIZE: usize = 32;

    /// Returns the algorithm family for this curve.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Curve25519Kind::X25519 => KeyAlgorithm::X25519,
            Curve25519Kind::Ed25519 => KeyAlgorithm::Ed25519,
        }
    }
}

impl TryFrom<KeyAlgorithm> for Curve25519Kind {
    type Error = CryptoError;

    fn try_from(algorithm: KeyAlgorithm) -> Result<Self, Self::Error> {
        match algorithm {
            KeyAlgorithm::X25519 => Ok(Curve25519Kind::X25519),
            KeyAlgorithm::Ed25519 => Ok(Curve25519Kind::Ed25519),
            KeyAlgorithm::Rsa | KeyAlgorithm::Ecc => {
                Err(CryptoError::InvalidParameter("not a Curve25519 algorithm"))
            }
        }
    }
}
