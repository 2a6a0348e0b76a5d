// Copyright (C) Microsoft Corporation. All rights reserved.

//! RFC 8410 `CurvePrivateKey`.
//!
//! ```text
//! CurvePrivateKey ::= OCTET STRING
//! ```
//!
//! The PKCS#8 private key OCTET STRING therefore wraps a second OCTET STRING
//! holding the 32 raw bytes.

use zeroize::Zeroizing;

use super::*;

/// Checks the length of a raw Curve25519 key taken from the wire.
pub(crate) fn check_raw_key_length(kind: Curve25519Kind, raw: &[u8]) -> Result<(), CryptoError> {
    if raw.len() != Curve25519Kind::KEY_SIZE {
        tracing::error!(?kind, len = raw.len(), "Invalid Curve25519 key length");
        return Err(CryptoError::InvalidKeyLength {
            expected: Curve25519Kind::KEY_SIZE,
            actual: raw.len(),
        });
    }
    Ok(())
}

impl Curve25519PrivateKeyParameters {
    /// Decodes a `CurvePrivateKey`.
    ///
    /// # Errors
    ///
    /// * `CryptoError::Asn1DecodeError` - The input is not an OCTET STRING.
    /// * `CryptoError::InvalidKeyLength` - The key is not 32 bytes.
    /// * `CryptoError::X25519NotClamped` - An X25519 scalar is not clamped per
    ///   RFC 7748.
    pub fn from_curve_private_key_der(kind: Curve25519Kind, der: &[u8]) -> Result<Self, CryptoError> {
        let raw: &[u8] = asn1::parse_single(der).map_err(|err| {
            tracing::error!(?err, "Failed to parse CurvePrivateKey");
            CryptoError::Asn1DecodeError
        })?;

        check_raw_key_length(kind, raw)?;

        if kind == Curve25519Kind::X25519 {
            let clamped = raw.try_into().map(x25519_is_clamped).unwrap_or(false);
            if !clamped {
                tracing::error!("X25519 private key is not clamped");
                return Err(CryptoError::X25519NotClamped);
            }
        }

        Self::new(kind, raw)
    }

    /// Encodes the key as a `CurvePrivateKey`.
    pub fn to_curve_private_key_der(&self) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        asn1::write_single(&self.scalar()?).map(Zeroizing::new).map_err(|err| {
            tracing::error!(?err, "Failed to encode CurvePrivateKey");
            CryptoError::Asn1EncodeError
        })
    }
}
