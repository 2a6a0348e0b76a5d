// Copyright (C) Microsoft Corporation. All rights reserved.

//! PKCS#8 `PrivateKeyInfo` decoder and encoder.

use zeroize::Zeroizing;

use super::*;

/// The only `PrivateKeyInfo` version this codec reads or writes.
const PRIVATE_KEY_INFO_VERSION: i64 = 0;

/// ASN.1 structure for PKCS#8 / RFC 5958 private keys.
///
/// ```text
/// OneAsymmetricKey ::= SEQUENCE {
///   version                   Version,
///   privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
///   privateKey                PrivateKey,
///   attributes            [0] Attributes OPTIONAL,
///   ...,
///   [[2: publicKey        [1] PublicKey OPTIONAL ]],
///   ...
/// }
/// ```
///
/// Only version 0 (`PrivateKeyInfo`) is accepted. `publicKey` is read so that
/// a version 1 key fails on its version instead of as unparseable.
#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct PrivateKeyInfo<'a> {
    version: i64,
    algorithm: AlgorithmIdentifier<'a>,
    private_key: &'a [u8],
    #[implicit(0)]
    attributes: Option<asn1::SetOf<'a, asn1::Tlv<'a>>>,
    #[implicit(1)]
    public_key: Option<asn1::BitString<'a>>,
}

/// Decoder for DER-encoded PKCS#8 `PrivateKeyInfo`.
pub struct PrivateKeyDecoder;

impl PrivateKeyDecoder {
    /// Decodes a PKCS#8 private key of any supported algorithm.
    ///
    /// # Arguments
    ///
    /// * `der` - DER-encoded `PrivateKeyInfo` bytes.
    ///
    /// # Errors
    ///
    /// * `CryptoError::Asn1DecodeError` - The input is not valid DER for the
    ///   expected structures.
    /// * `CryptoError::InvalidVersion` - The outer version is not 0, the RSA
    ///   inner version is not 0 or the EC inner version is not 1.
    /// * `CryptoError::UnsupportedOid` - The algorithm or curve is not
    ///   supported. The error carries the dotted OID.
    /// * `CryptoError::InvalidKeyLength` / `CryptoError::X25519NotClamped` -
    ///   The raw key material fails validation.
    pub fn decode(der: &[u8]) -> Result<PrivateKeyParameters, CryptoError> {
        let info: PrivateKeyInfo<'_> = asn1::parse_single(der).map_err(|err| {
            tracing::error!(?err, "Failed to parse PrivateKeyInfo");
            CryptoError::Asn1DecodeError
        })?;

        if info.version != PRIVATE_KEY_INFO_VERSION {
            tracing::error!(version = info.version, "Unsupported PrivateKeyInfo version");
            return Err(CryptoError::InvalidVersion {
                structure: "PrivateKeyInfo",
                expected: PRIVATE_KEY_INFO_VERSION,
                found: info.version,
            });
        }

        let key = match KeySpec::from_identifier(&info.algorithm)? {
            KeySpec::Rsa => RsaPrivateKeyParameters::from_pkcs1_der(info.private_key)?.into(),
            KeySpec::Ecc(curve) => {
                EccPrivateKeyParameters::from_sec1_der(curve, info.private_key)?.into()
            }
            KeySpec::Curve25519(kind) => {
                Curve25519PrivateKeyParameters::from_curve_private_key_der(kind, info.private_key)?
                    .into()
            }
        };
        Ok(key)
    }

    /// Decodes a PKCS#8 private key that must hold an RSA key.
    ///
    /// # Errors
    ///
    /// Everything [`PrivateKeyDecoder::decode`] returns, plus
    /// `CryptoError::OidNotApplicable` if the key is of another algorithm.
    pub fn decode_rsa(der: &[u8]) -> Result<RsaPrivateKeyParameters, CryptoError> {
        match Self::decode(der)? {
            PrivateKeyParameters::Rsa(key) => Ok(key),
            other => Err(not_applicable(other.algorithm(), KeyAlgorithm::Rsa)),
        }
    }

    /// Decodes a PKCS#8 private key that must hold a NIST curve key.
    pub fn decode_ecc(der: &[u8]) -> Result<EccPrivateKeyParameters, CryptoError> {
        match Self::decode(der)? {
            PrivateKeyParameters::Ecc(key) => Ok(key),
            other => Err(not_applicable(other.algorithm(), KeyAlgorithm::Ecc)),
        }
    }

    /// Decodes a PKCS#8 private key that must hold an X25519 or Ed25519 key.
    pub fn decode_curve25519(der: &[u8]) -> Result<Curve25519PrivateKeyParameters, CryptoError> {
        match Self::decode(der)? {
            PrivateKeyParameters::Curve25519(key) => Ok(key),
            other => Err(not_applicable(other.algorithm(), KeyAlgorithm::Ed25519)),
        }
    }
}

impl DecodeOp for PrivateKeyDecoder {
    type T = PrivateKeyParameters;
    type P = ();

    fn from_bytes(input: &[u8], _params: ()) -> Result<PrivateKeyParameters, CryptoError> {
        Self::decode(input)
    }
}

/// Reports a key of the wrong algorithm handed to a typed decode helper.
pub(crate) fn not_applicable(found: KeyAlgorithm, wanted: KeyAlgorithm) -> CryptoError {
    let oid = algorithm_oid(found);
    tracing::error!(oid = %oid, %found, %wanted, "Key algorithm does not match the request");
    CryptoError::OidNotApplicable(oid.to_string())
}

/// Encoder producing DER-encoded PKCS#8 `PrivateKeyInfo`.
///
/// The output is canonical DER with version 0 and no attributes. RSA keys
/// carry NULL algorithm parameters, EC keys the named curve and Curve25519
/// keys none.
pub struct PrivateKeyEncoder<'a> {
    key: &'a PrivateKeyParameters,
}

impl<'a> PrivateKeyEncoder<'a> {
    /// Creates an encoder for `key`.
    pub fn new(key: &'a PrivateKeyParameters) -> Self {
        Self { key }
    }

    /// Encodes the private key to PKCS#8.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Optional output buffer. If `None`, only calculates the required size.
    ///
    /// # Returns
    ///
    /// Returns the number of bytes written (or required if `bytes` is `None`).
    ///
    /// # Errors
    ///
    /// * `CryptoError::MissingPrivateComponents` - An RSA key has no private
    ///   exponent.
    /// * `CryptoError::BufferWiped` - The key has been wiped.
    /// * `CryptoError::BufferTooSmall` - Output buffer is too small.
    /// * `CryptoError::Asn1EncodeError` - Failed to encode ASN.1 structure.
    pub fn to_der(&self, bytes: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let der = self.encode()?;

        if let Some(bytes) = bytes {
            if bytes.len() < der.len() {
                tracing::error!(needed = der.len(), available = bytes.len(), "Output buffer too small");
                return Err(CryptoError::BufferTooSmall);
            }
            bytes[..der.len()].copy_from_slice(&der);
        }

        Ok(der.len())
    }

    /// Encodes the private key to a newly allocated PKCS#8 vector.
    pub fn to_der_vec(&self) -> Result<Vec<u8>, CryptoError> {
        let der = self.encode()?;
        Ok(der.to_vec())
    }

    fn encode(&self) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let private_key = match self.key {
            PrivateKeyParameters::Rsa(key) => key.to_pkcs1_der()?,
            PrivateKeyParameters::Ecc(key) => key.to_sec1_der()?,
            PrivateKeyParameters::Curve25519(key) => key.to_curve_private_key_der()?,
        };

        KeySpec::from(self.key).with_identifier(|algorithm| {
            let info = PrivateKeyInfo {
                version: PRIVATE_KEY_INFO_VERSION,
                algorithm,
                private_key: &private_key,
                attributes: None,
                public_key: None,
            };

            asn1::write_single(&info).map(Zeroizing::new).map_err(|err| {
                tracing::error!(?err, "Failed to encode PrivateKeyInfo");
                CryptoError::Asn1EncodeError
            })
        })
    }
}

impl EncodeOp for PrivateKeyEncoder<'_> {
    fn to_bytes(&self, output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        self.to_der(output)
    }
}
