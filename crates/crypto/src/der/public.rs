// Copyright (C) Microsoft Corporation. All rights reserved.

//! X.509 `SubjectPublicKeyInfo` decoder and encoder.

use super::*;

/// ASN.1 structure for X.509 SubjectPublicKeyInfo (SPKI).
///
/// ```text
/// SubjectPublicKeyInfo ::= SEQUENCE {
///   algorithm            AlgorithmIdentifier,
///   subjectPublicKey     BIT STRING
/// }
/// ```
#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct SubjectPublicKeyInfo<'a> {
    algorithm: AlgorithmIdentifier<'a>,
    subject_public_key: asn1::BitString<'a>,
}

/// Decoder for DER-encoded `SubjectPublicKeyInfo`.
pub struct PublicKeyDecoder;

impl PublicKeyDecoder {
    /// Decodes a public key of any supported algorithm.
    ///
    /// The BIT STRING must not declare unused bits. RSA keys carry a PKCS#1
    /// `RSAPublicKey`, EC keys an uncompressed SEC1 point and Curve25519 keys
    /// 32 raw bytes.
    ///
    /// # Errors
    ///
    /// * `CryptoError::Asn1DecodeError` - The input is not valid DER for the
    ///   expected structures.
    /// * `CryptoError::UnsupportedOid` - The algorithm or curve is not
    ///   supported.
    /// * `CryptoError::InvalidUnusedBits` - The BIT STRING declares unused bits.
    /// * `CryptoError::InvalidPointFormat` - An EC point is not uncompressed.
    /// * `CryptoError::InvalidKeyLength` - An EC point or Curve25519 key has
    ///   the wrong length.
    pub fn decode(der: &[u8]) -> Result<PublicKeyParameters, CryptoError> {
        let spki: SubjectPublicKeyInfo<'_> = asn1::parse_single(der).map_err(|err| {
            tracing::error!(?err, "Failed to parse SubjectPublicKeyInfo");
            CryptoError::Asn1DecodeError
        })?;

        let spec = KeySpec::from_identifier(&spki.algorithm)?;
        let payload = bit_string_payload(&spki.subject_public_key)?;

        let key = match spec {
            KeySpec::Rsa => RsaPublicKeyParameters::from_pkcs1_der(payload)?.into(),
            KeySpec::Ecc(curve) => EccPublicKeyParameters::from_encoded_point(curve, payload)?.into(),
            KeySpec::Curve25519(kind) => {
                check_raw_key_length(kind, payload)?;
                Curve25519PublicKeyParameters::new(kind, payload)?.into()
            }
        };
        Ok(key)
    }

    /// Decodes a public key that must be RSA.
    ///
    /// # Errors
    ///
    /// Everything [`PublicKeyDecoder::decode`] returns, plus
    /// `CryptoError::OidNotApplicable` if the key is of another algorithm.
    pub fn decode_rsa(der: &[u8]) -> Result<RsaPublicKeyParameters, CryptoError> {
        match Self::decode(der)? {
            PublicKeyParameters::Rsa(key) => Ok(key),
            other => Err(not_applicable(other.algorithm(), KeyAlgorithm::Rsa)),
        }
    }

    /// Decodes a public key that must be on a NIST curve.
    pub fn decode_ecc(der: &[u8]) -> Result<EccPublicKeyParameters, CryptoError> {
        match Self::decode(der)? {
            PublicKeyParameters::Ecc(key) => Ok(key),
            other => Err(not_applicable(other.algorithm(), KeyAlgorithm::Ecc)),
        }
    }

    /// Decodes a public key that must be X25519 or Ed25519.
    pub fn decode_curve25519(der: &[u8]) -> Result<Curve25519PublicKeyParameters, CryptoError> {
        match Self::decode(der)? {
            PublicKeyParameters::Curve25519(key) => Ok(key),
            other => Err(not_applicable(other.algorithm(), KeyAlgorithm::Ed25519)),
        }
    }
}

impl DecodeOp for PublicKeyDecoder {
    type T = PublicKeyParameters;
    type P = ();

    fn from_bytes(input: &[u8], _params: ()) -> Result<PublicKeyParameters, CryptoError> {
        Self::decode(input)
    }
}

/// Encoder producing DER-encoded `SubjectPublicKeyInfo`.
pub struct PublicKeyEncoder<'a> {
    key: &'a PublicKeyParameters,
}

impl<'a> PublicKeyEncoder<'a> {
    /// Creates an encoder for `key`.
    pub fn new(key: &'a PublicKeyParameters) -> Self {
        Self { key }
    }

    /// Encodes the public key to SPKI.
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
    /// * `CryptoError::Asn1EncodeError` - Failed to encode ASN.1 structure
    /// * `CryptoError::BufferTooSmall` - Output buffer is too small
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

    /// Encodes the public key to a newly allocated SPKI vector.
    pub fn to_der_vec(&self) -> Result<Vec<u8>, CryptoError> {
        self.encode()
    }

    fn encode(&self) -> Result<Vec<u8>, CryptoError> {
        let payload = match self.key {
            PublicKeyParameters::Rsa(key) => key.to_pkcs1_der()?,
            PublicKeyParameters::Ecc(key) => key.encoded_point(),
            PublicKeyParameters::Curve25519(key) => key.point().to_vec(),
        };

        KeySpec::from(self.key).with_identifier(|algorithm| {
            let spki = SubjectPublicKeyInfo {
                algorithm,
                subject_public_key: bit_string(&payload)?,
            };

            asn1::write_single(&spki).map_err(|err| {
                tracing::error!(?err, "Failed to encode SubjectPublicKeyInfo");
                CryptoError::Asn1EncodeError
            })
        })
    }
}

impl EncodeOp for PublicKeyEncoder<'_> {
    fn to_bytes(&self, output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        self.to_der(output)
    }
}
