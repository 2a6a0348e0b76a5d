// Copyright (C) Microsoft Corporation. All rights reserved.

//! `AlgorithmIdentifier` handling shared by PKCS#8 and SPKI.

use super::*;

/// ASN.1 AlgorithmIdentifier structure.
///
/// ```text
/// AlgorithmIdentifier ::= SEQUENCE {
///   algorithm   OBJECT IDENTIFIER,
///   parameters  ANY DEFINED BY algorithm OPTIONAL
/// }
/// ```
///
/// The parameters are kept as a raw TLV so that an identifier carrying
/// parameters of an unsupported algorithm (DSA domain parameters, for
/// instance) still parses and can be reported as unsupported.
#[derive(asn1::Asn1Read, asn1::Asn1Write)]
pub(crate) struct AlgorithmIdentifier<'a> {
    pub(crate) algorithm: asn1::ObjectIdentifier,
    pub(crate) parameters: Option<asn1::Tlv<'a>>,
}

/// Algorithm and domain resolved from an `AlgorithmIdentifier`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum KeySpec {
    /// `rsaEncryption`, parameters NULL or absent.
    Rsa,
    /// `id-ecPublicKey` with a named curve.
    Ecc(EccCurve),
    /// `id-X25519` / `id-Ed25519`, parameters absent.
    Curve25519(Curve25519Kind),
}

impl KeySpec {
    /// Resolves an identifier to a key spec.
    ///
    /// # Errors
    ///
    /// * `CryptoError::UnsupportedOid` - The algorithm or named curve is not
    ///   supported.
    /// * `CryptoError::InvalidAlgorithmParameters` - The parameters do not have
    ///   the form the algorithm requires.
    pub(crate) fn from_identifier(id: &AlgorithmIdentifier<'_>) -> Result<Self, CryptoError> {
        let spec = match KeyAlgorithm::try_from(&id.algorithm)? {
            KeyAlgorithm::Rsa => {
                if let Some(params) = &id.parameters {
                    params.parse::<asn1::Null>().map_err(|err| {
                        tracing::error!(?err, "RSA parameters are not NULL");
                        CryptoError::InvalidAlgorithmParameters
                    })?;
                }
                KeySpec::Rsa
            }
            KeyAlgorithm::Ecc => {
                let Some(params) = &id.parameters else {
                    tracing::error!("EC key without named curve");
                    return Err(CryptoError::InvalidAlgorithmParameters);
                };
                let curve_oid = params.parse::<asn1::ObjectIdentifier>().map_err(|err| {
                    tracing::error!(?err, "EC parameters are not a named curve");
                    CryptoError::InvalidAlgorithmParameters
                })?;
                KeySpec::Ecc(EccCurve::try_from(&curve_oid)?)
            }
            KeyAlgorithm::X25519 | KeyAlgorithm::Ed25519 => {
                if id.parameters.is_some() {
                    tracing::error!(oid = %id.algorithm, "Curve25519 identifier carries parameters");
                    return Err(CryptoError::InvalidAlgorithmParameters);
                }
                KeySpec::Curve25519(Curve25519Kind::try_from(&id.algorithm)?)
            }
        };

        tracing::debug!(?spec, "Resolved algorithm identifier");
        Ok(spec)
    }

    /// Returns the algorithm family.
    pub(crate) fn algorithm(&self) -> KeyAlgorithm {
        match self {
            KeySpec::Rsa => KeyAlgorithm::Rsa,
            KeySpec::Ecc(_) => KeyAlgorithm::Ecc,
            KeySpec::Curve25519(kind) => kind.algorithm(),
        }
    }

    /// Builds the identifier for this spec and hands it to `write`.
    ///
    /// RSA emits NULL parameters, EC the named curve and Curve25519 none.
    pub(crate) fn with_identifier<R>(
        &self,
        write: impl FnOnce(AlgorithmIdentifier<'_>) -> Result<R, CryptoError>,
    ) -> Result<R, CryptoError> {
        let params_der = match self {
            KeySpec::Rsa => Some(asn1::write_single(&()).map_err(|err| {
                tracing::error!(?err, "Failed to encode NULL parameters");
                CryptoError::Asn1EncodeError
            })?),
            KeySpec::Ecc(curve) => Some(
                asn1::write_single(&curve_oid(*curve)).map_err(|err| {
                    tracing::error!(?err, "Failed to encode named curve");
                    CryptoError::Asn1EncodeError
                })?,
            ),
            KeySpec::Curve25519(_) => None,
        };

        let parameters = params_der
            .as_deref()
            .map(|der| asn1::parse_single::<asn1::Tlv<'_>>(der))
            .transpose()
            .map_err(|err| {
                tracing::error!(?err, "Failed to re-read algorithm parameters");
                CryptoError::Asn1EncodeError
            })?;

        write(AlgorithmIdentifier {
            algorithm: algorithm_oid(self.algorithm()),
            parameters,
        })
    }
}

impl From<&PrivateKeyParameters> for KeySpec {
    fn from(key: &PrivateKeyParameters) -> Self {
        match key {
            PrivateKeyParameters::Rsa(_) => KeySpec::Rsa,
            PrivateKeyParameters::Ecc(key) => KeySpec::Ecc(key.curve()),
            PrivateKeyParameters::Curve25519(key) => KeySpec::Curve25519(key.kind()),
        }
    }
}

impl From<&PublicKeyParameters> for KeySpec {
    fn from(key: &PublicKeyParameters) -> Self {
        match key {
            PublicKeyParameters::Rsa(_) => KeySpec::Rsa,
            PublicKeyParameters::Ecc(key) => KeySpec::Ecc(key.curve()),
            PublicKeyParameters::Curve25519(key) => KeySpec::Curve25519(key.kind()),
        }
    }
}

/// Wraps a DER payload in a BIT STRING with no unused bits.
pub(crate) fn bit_string(payload: &[u8]) -> Result<asn1::BitString<'_>, CryptoError> {
    asn1::BitString::new(payload, 0).ok_or(CryptoError::Asn1EncodeError)
}

/// Returns the payload of a BIT STRING that must not declare unused bits.
pub(crate) fn bit_string_payload<'a>(
    bits: &'a asn1::BitString<'_>,
) -> Result<&'a [u8], CryptoError> {
    match bits.padding_bits() {
        0 => Ok(bits.as_bytes()),
        unused => {
            tracing::error!(unused, "Key BIT STRING declares unused bits");
            Err(CryptoError::InvalidUnusedBits(unused))
        }
    }
}
