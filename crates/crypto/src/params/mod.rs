// Copyright (C) Microsoft Corporation. All rights reserved.

//! Typed key parameters.
//!
//! [`PrivateKeyParameters`] and [`PublicKeyParameters`] are closed sum types
//! over the supported algorithms. Decoders produce them, encoders consume them
//! and callers match on them exhaustively.
//!
//! Every constructor copies the caller's bytes. Secret components are held in
//! [`ZeroingBuffer`]s, so they are zeroed when the parameters are wiped or
//! dropped.
mod curve25519;
mod ecc;
mod rsa;

pub use curve25519::*;
pub use ecc::*;
pub use rsa::*;

use super::*;

/// Private key material for one of the supported algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateKeyParameters {
    /// RSA private key with CRT components.
    Rsa(RsaPrivateKeyParameters),
    /// NIST curve private scalar with an optional public point.
    Ecc(EccPrivateKeyParameters),
    /// X25519 or Ed25519 raw private scalar.
    Curve25519(Curve25519PrivateKeyParameters),
}

impl PrivateKeyParameters {
    /// Returns the algorithm family.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PrivateKeyParameters::Rsa(_) => KeyAlgorithm::Rsa,
            PrivateKeyParameters::Ecc(_) => KeyAlgorithm::Ecc,
            PrivateKeyParameters::Curve25519(key) => key.kind().algorithm(),
        }
    }

    /// Resolves the key type through the definition table.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::UnsupportedKeySize` for an RSA modulus outside
    /// the supported sizes.
    pub fn key_type(&self) -> Result<KeyType, CryptoError> {
        match self {
            PrivateKeyParameters::Rsa(key) => key.key_type(),
            PrivateKeyParameters::Ecc(key) => Ok(key.curve().into()),
            PrivateKeyParameters::Curve25519(key) => Ok(key.kind().into()),
        }
    }

    /// Returns the public half when it is carried alongside the private key.
    ///
    /// RSA parameters always carry `(n, e)`. EC parameters carry the point only
    /// if it was supplied. Curve25519 parameters never do, as deriving the
    /// point needs scalar multiplication.
    pub fn public_key(&self) -> Option<PublicKeyParameters> {
        match self {
            PrivateKeyParameters::Rsa(key) => Some(PublicKeyParameters::Rsa(key.public_key())),
            PrivateKeyParameters::Ecc(key) => key.public_key().cloned().map(PublicKeyParameters::Ecc),
            PrivateKeyParameters::Curve25519(_) => None,
        }
    }

    /// Zeroes every secret component.
    ///
    /// After this call, reading a secret component fails with
    /// `CryptoError::BufferWiped` and encoding the key fails the same way.
    pub fn wipe(&mut self) {
        match self {
            PrivateKeyParameters::Rsa(key) => key.wipe(),
            PrivateKeyParameters::Ecc(key) => key.wipe(),
            PrivateKeyParameters::Curve25519(key) => key.wipe(),
        }
    }
}

impl From<RsaPrivateKeyParameters> for PrivateKeyParameters {
    fn from(key: RsaPrivateKeyParameters) -> Self {
        PrivateKeyParameters::Rsa(key)
    }
}

impl From<EccPrivateKeyParameters> for PrivateKeyParameters {
    fn from(key: EccPrivateKeyParameters) -> Self {
        PrivateKeyParameters::Ecc(key)
    }
}

impl From<Curve25519PrivateKeyParameters> for PrivateKeyParameters {
    fn from(key: Curve25519PrivateKeyParameters) -> Self {
        PrivateKeyParameters::Curve25519(key)
    }
}

/// Public key material for one of the supported algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyParameters {
    /// RSA modulus and public exponent.
    Rsa(RsaPublicKeyParameters),
    /// Uncompressed NIST curve point.
    Ecc(EccPublicKeyParameters),
    /// X25519 or Ed25519 raw public point.
    Curve25519(Curve25519PublicKeyParameters),
}

impl PublicKeyParameters {
    /// Returns the algorithm family.
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PublicKeyParameters::Rsa(_) => KeyAlgorithm::Rsa,
            PublicKeyParameters::Ecc(_) => KeyAlgorithm::Ecc,
            PublicKeyParameters::Curve25519(key) => key.kind().algorithm(),
        }
    }

    /// Resolves the key type through the definition table.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::UnsupportedKeySize` for an RSA modulus outside
    /// the supported sizes.
    pub fn key_type(&self) -> Result<KeyType, CryptoError> {
        match self {
            PublicKeyParameters::Rsa(key) => key.key_type(),
            PublicKeyParameters::Ecc(key) => Ok(key.curve().into()),
            PublicKeyParameters::Curve25519(key) => Ok(key.kind().into()),
        }
    }
}

impl From<RsaPublicKeyParameters> for PublicKeyParameters {
    fn from(key: RsaPublicKeyParameters) -> Self {
        PublicKeyParameters::Rsa(key)
    }
}

impl From<EccPublicKeyParameters> for PublicKeyParameters {
    fn from(key: EccPublicKeyParameters) -> Self {
        PublicKeyParameters::Ecc(key)
    }
}

impl From<Curve25519PublicKeyParameters> for PublicKeyParameters {
    fn from(key: Curve25519PublicKeyParameters) -> Self {
        PublicKeyParameters::Curve25519(key)
    }
}

/// Returns `bytes` without leading zero bytes.
fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Bit length of an unsigned big-endian magnitude.
fn magnitude_bits(bytes: &[u8]) -> usize {
    match trim_leading_zeros(bytes) {
        [] => 0,
        [first, rest @ ..] => rest.len() * 8 + (8 - first.leading_zeros() as usize),
    }
}

#[cfg(test)]
mod tests;
