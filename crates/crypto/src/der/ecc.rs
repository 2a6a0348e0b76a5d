// Copyright (C) Microsoft Corporation. All rights reserved.

//! SEC1 EC private key structure (RFC 5915).
//!
//! Inside PKCS#8 the private key OCTET STRING holds an `ECPrivateKey`. The
//! curve is named by the outer `AlgorithmIdentifier`, so the inner `[0]`
//! parameters are optional and, when present, must name the same curve.

use zeroize::Zeroizing;

use super::*;

/// `ecPrivkeyVer1`.
const EC_PRIVATE_KEY_VERSION: i64 = 1;

/// ASN.1 structure for EC private keys according to RFC 5915.
///
/// ```text
/// ECPrivateKey ::= SEQUENCE {
///   version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
///   privateKey     OCTET STRING,
///   parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
///   publicKey  [1] BIT STRING OPTIONAL
/// }
/// ```
#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct EcPrivateKey<'a> {
    version: i64,
    private_key: &'a [u8],
    #[explicit(0)]
    parameters: Option<asn1::Tlv<'a>>,
    #[explicit(1)]
    public_key: Option<asn1::BitString<'a>>,
}

impl EccPrivateKeyParameters {
    /// Decodes an `ECPrivateKey` for a known curve.
    ///
    /// A private scalar shorter than the coordinate length is accepted and
    /// left-padded. The embedded public point, if any, must be uncompressed.
    ///
    /// # Errors
    ///
    /// * `CryptoError::Asn1DecodeError` - The input is not an `ECPrivateKey`.
    /// * `CryptoError::InvalidVersion` - The version is not 1.
    /// * `CryptoError::InvalidKeyLength` - The scalar is empty or longer than
    ///   the curve's coordinate length.
    /// * `CryptoError::InvalidAlgorithmParameters` - The `[0]` parameters name
    ///   a different curve.
    /// * `CryptoError::InvalidUnusedBits` / `CryptoError::InvalidPointFormat`
    ///   - The `[1]` public key is malformed.
    pub fn from_sec1_der(curve: EccCurve, der: &[u8]) -> Result<Self, CryptoError> {
        let key: EcPrivateKey<'_> = asn1::parse_single(der).map_err(|err| {
            tracing::error!(?err, "Failed to parse ECPrivateKey");
            CryptoError::Asn1DecodeError
        })?;

        if key.version != EC_PRIVATE_KEY_VERSION {
            tracing::error!(version = key.version, "Unsupported ECPrivateKey version");
            return Err(CryptoError::InvalidVersion {
                structure: "ECPrivateKey",
                expected: EC_PRIVATE_KEY_VERSION,
                found: key.version,
            });
        }

        let point_size = curve.point_size();
        if key.private_key.is_empty() || key.private_key.len() > point_size {
            tracing::error!(?curve, len = key.private_key.len(), "Invalid EC private scalar length");
            return Err(CryptoError::InvalidKeyLength {
                expected: point_size,
                actual: key.private_key.len(),
            });
        }

        if let Some(named_curve) = &key.parameters {
            let named = named_curve.parse::<asn1::ObjectIdentifier>().ok();
            if named != Some(curve_oid(curve)) {
                tracing::error!(?curve, "ECPrivateKey parameters disagree with the algorithm identifier");
                return Err(CryptoError::InvalidAlgorithmParameters);
            }
        }

        let private = Self::new(curve, key.private_key)?;
        match &key.public_key {
            Some(public_key) => {
                let point = bit_string_payload(public_key)?;
                let public = EccPublicKeyParameters::from_encoded_point(curve, point)?;
                Ok(private.with_public_key(public))
            }
            None => Ok(private),
        }
    }

    /// Encodes the key as an `ECPrivateKey`.
    ///
    /// The scalar is written at full coordinate length. The `[0]` parameters
    /// are omitted; the `[1]` public key is written when the point is known.
    pub fn to_sec1_der(&self) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let point = self.public_key().map(EccPublicKeyParameters::encoded_point);
        let public_key = point.as_deref().map(bit_string).transpose()?;

        let key = EcPrivateKey {
            version: EC_PRIVATE_KEY_VERSION,
            private_key: self.d()?,
            parameters: None,
            public_key,
        };

        asn1::write_single(&key).map(Zeroizing::new).map_err(|err| {
            tracing::error!(?err, "Failed to encode ECPrivateKey");
            CryptoError::Asn1EncodeError
        })
    }
}
