// Copyright (C) Microsoft Corporation. All rights reserved.

//! PKCS#1 RSA key structures.
//!
//! Inside PKCS#8 the private key OCTET STRING holds a PKCS#1 `RSAPrivateKey`.
//! Inside SPKI the public key BIT STRING holds a PKCS#1 `RSAPublicKey`.

use zeroize::Zeroizing;

use super::*;

/// PKCS#1 `RSAPrivateKey` version for two-prime keys.
const RSA_PRIVATE_KEY_VERSION: i64 = 0;

/// ASN.1 structure for a PKCS#1 RSA public key.
///
/// ```text
/// RSAPublicKey ::= SEQUENCE {
///   modulus           INTEGER,  -- n
///   publicExponent    INTEGER   -- e
/// }
/// ```
#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct RsaPublicKey {
    modulus: asn1::OwnedBigInt,
    public_exponent: asn1::OwnedBigInt,
}

/// ASN.1 structure for a PKCS#1 RSA private key (RFC 8017).
///
/// ```text
/// RSAPrivateKey ::= SEQUENCE {
///   version           Version,
///   modulus           INTEGER,  -- n
///   publicExponent    INTEGER,  -- e
///   privateExponent   INTEGER,  -- d
///   prime1            INTEGER,  -- p
///   prime2            INTEGER,  -- q
///   exponent1         INTEGER,  -- d mod (p-1)
///   exponent2         INTEGER,  -- d mod (q-1)
///   coefficient       INTEGER,  -- (inverse of q) mod p
///   otherPrimeInfos   OtherPrimeInfos OPTIONAL
/// }
/// ```
///
/// `otherPrimeInfos` is read only so that a multi-prime key is rejected on
/// its version rather than as unparseable.
#[derive(asn1::Asn1Read, asn1::Asn1Write)]
struct RsaPrivateKey<'a> {
    version: i64,
    modulus: asn1::OwnedBigInt,
    public_exponent: asn1::OwnedBigInt,
    private_exponent: asn1::OwnedBigInt,
    prime1: asn1::OwnedBigInt,
    prime2: asn1::OwnedBigInt,
    exponent1: asn1::OwnedBigInt,
    exponent2: asn1::OwnedBigInt,
    coefficient: asn1::OwnedBigInt,
    other_prime_infos: Option<asn1::Tlv<'a>>,
}

/// Reads a key component that must be a positive INTEGER.
fn magnitude(
    name: &'static str,
    int: &asn1::OwnedBigInt,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let bytes: Vec<u8> = DerBigInt(int).try_into()?;
    if bytes.is_empty() {
        tracing::error!(component = name, "Zero RSA key component");
        return Err(CryptoError::ZeroKeyComponent(name));
    }
    Ok(Zeroizing::new(bytes))
}

impl RsaPublicKeyParameters {
    /// Decodes a PKCS#1 `RSAPublicKey`.
    ///
    /// # Errors
    ///
    /// * `CryptoError::Asn1DecodeError` - The input is not an `RSAPublicKey`.
    /// * `CryptoError::NegativeInteger` - `n` or `e` is negative.
    /// * `CryptoError::ZeroKeyComponent` - `n` or `e` is zero.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key: RsaPublicKey = asn1::parse_single(der).map_err(|err| {
            tracing::error!(?err, "Failed to parse RSAPublicKey");
            CryptoError::Asn1DecodeError
        })?;

        let n = magnitude("modulus", &key.modulus)?;
        let e = magnitude("publicExponent", &key.public_exponent)?;
        Self::new(&n, &e)
    }

    /// Encodes the key as a PKCS#1 `RSAPublicKey`.
    pub fn to_pkcs1_der(&self) -> Result<Vec<u8>, CryptoError> {
        let key = RsaPublicKey {
            modulus: DerSlice(self.n()).try_into()?,
            public_exponent: DerSlice(self.e()).try_into()?,
        };
        asn1::write_single(&key).map_err(|err| {
            tracing::error!(?err, "Failed to encode RSAPublicKey");
            CryptoError::Asn1EncodeError
        })
    }
}

impl RsaPrivateKeyParameters {
    /// Decodes a PKCS#1 `RSAPrivateKey`.
    ///
    /// # Errors
    ///
    /// * `CryptoError::Asn1DecodeError` - The input is not an `RSAPrivateKey`.
    /// * `CryptoError::InvalidVersion` - The version is not 0.
    /// * `CryptoError::NegativeInteger` - A component is negative.
    /// * `CryptoError::ZeroKeyComponent` - A component is zero.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key: RsaPrivateKey<'_> = asn1::parse_single(der).map_err(|err| {
            tracing::error!(?err, "Failed to parse RSAPrivateKey");
            CryptoError::Asn1DecodeError
        })?;

        if key.version != RSA_PRIVATE_KEY_VERSION {
            tracing::error!(version = key.version, "Unsupported RSAPrivateKey version");
            return Err(CryptoError::InvalidVersion {
                structure: "RSAPrivateKey",
                expected: RSA_PRIVATE_KEY_VERSION,
                found: key.version,
            });
        }

        Self::new(
            &magnitude("modulus", &key.modulus)?,
            &magnitude("publicExponent", &key.public_exponent)?,
            Some(magnitude("privateExponent", &key.private_exponent)?.as_slice()),
            &magnitude("prime1", &key.prime1)?,
            &magnitude("prime2", &key.prime2)?,
            &magnitude("exponent1", &key.exponent1)?,
            &magnitude("exponent2", &key.exponent2)?,
            &magnitude("coefficient", &key.coefficient)?,
        )
    }

    /// Encodes the key as a PKCS#1 `RSAPrivateKey`.
    ///
    /// # Errors
    ///
    /// * `CryptoError::MissingPrivateComponents` - The key has no private
    ///   exponent.
    /// * `CryptoError::BufferWiped` - The key has been wiped.
    pub fn to_pkcs1_der(&self) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let Some(d) = self.d()? else {
            tracing::error!("RSA private exponent is required for export");
            return Err(CryptoError::MissingPrivateComponents);
        };

        let key = RsaPrivateKey {
            version: RSA_PRIVATE_KEY_VERSION,
            modulus: DerSlice(self.n()).try_into()?,
            public_exponent: DerSlice(self.e()).try_into()?,
            private_exponent: DerSlice(d).try_into()?,
            prime1: DerSlice(self.p()?).try_into()?,
            prime2: DerSlice(self.q()?).try_into()?,
            exponent1: DerSlice(self.dp()?).try_into()?,
            exponent2: DerSlice(self.dq()?).try_into()?,
            coefficient: DerSlice(self.qi()?).try_into()?,
            other_prime_infos: None,
        };

        asn1::write_single(&key).map(Zeroizing::new).map_err(|err| {
            tracing::error!(?err, "Failed to encode RSAPrivateKey");
            CryptoError::Asn1EncodeError
        })
    }
}
