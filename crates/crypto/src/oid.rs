// Copyright (C) Microsoft Corporation. All rights reserved.

//! Object identifier registry.
//!
//! Static mapping between algorithm / curve object identifiers and the tags in
//! [`crate::algorithm`]. Lookups are pure and total over the supported set.
//! Anything else, including well known but unsupported identifiers such as DSA
//! or secp256k1, resolves to `CryptoError::UnsupportedOid` carrying the dotted
//! form so callers can report it.

use super::*;

/// Object Identifier for rsaEncryption.
///
/// OID: 1.2.840.113549.1.1.1
pub const OID_RSA_ENCRYPTION: asn1::ObjectIdentifier = asn1::oid!(1, 2, 840, 113549, 1, 1, 1);

/// Object Identifier for EC public keys (`id-ecPublicKey`).
///
/// OID: 1.2.840.10045.2.1
pub const OID_EC_PUBLIC_KEY: asn1::ObjectIdentifier = asn1::oid!(1, 2, 840, 10045, 2, 1);

/// Object Identifier for X25519 (`id-X25519`, RFC 8410).
///
/// OID: 1.3.101.110
pub const OID_X25519: asn1::ObjectIdentifier = asn1::oid!(1, 3, 101, 110);

/// Object Identifier for Ed25519 (`id-Ed25519`, RFC 8410).
///
/// OID: 1.3.101.112
pub const OID_ED25519: asn1::ObjectIdentifier = asn1::oid!(1, 3, 101, 112);

/// Object Identifier for the NIST P-256 (secp256r1) curve.
///
/// OID: 1.2.840.10045.3.1.7
pub const OID_P256: asn1::ObjectIdentifier = asn1::oid!(1, 2, 840, 10045, 3, 1, 7);

/// Object Identifier for the NIST P-384 (secp384r1) curve.
///
/// OID: 1.3.132.0.34
pub const OID_P384: asn1::ObjectIdentifier = asn1::oid!(1, 3, 132, 0, 34);

/// Object Identifier for the NIST P-521 (secp521r1) curve.
///
/// OID: 1.3.132.0.35
pub const OID_P521: asn1::ObjectIdentifier = asn1::oid!(1, 3, 132, 0, 35);

/// Returns the `AlgorithmIdentifier` OID for a key algorithm.
pub fn algorithm_oid(algorithm: KeyAlgorithm) -> asn1::ObjectIdentifier {
    match algorithm {
        KeyAlgorithm::Rsa => OID_RSA_ENCRYPTION,
        KeyAlgorithm::Ecc => OID_EC_PUBLIC_KEY,
        KeyAlgorithm::X25519 => OID_X25519,
        KeyAlgorithm::Ed25519 => OID_ED25519,
    }
}

/// Returns the named-curve OID for a NIST curve.
pub fn curve_oid(curve: EccCurve) -> asn1::ObjectIdentifier {
    match curve {
        EccCurve::P256 => OID_P256,
        EccCurve::P384 => OID_P384,
        EccCurve::P521 => OID_P521,
    }
}

/// Parses a dotted OID string such as `1.3.132.0.34`.
///
/// # Errors
///
/// Returns `CryptoError::MalformedOid` if the text is not a valid OID.
pub fn parse_oid(dotted: &str) -> Result<asn1::ObjectIdentifier, CryptoError> {
    asn1::ObjectIdentifier::from_string(dotted)
        .ok_or_else(|| CryptoError::MalformedOid(dotted.to_string()))
}

/// Resolves a dotted algorithm OID to a key algorithm.
///
/// Malformed text and unsupported identifiers both fail with a not-supported
/// error; the variant (`MalformedOid` or `UnsupportedOid`) tells them apart.
pub fn key_algorithm_for(dotted: &str) -> Result<KeyAlgorithm, CryptoError> {
    KeyAlgorithm::try_from(&parse_oid(dotted)?)
}

/// Resolves a dotted named-curve OID to a NIST curve.
pub fn ecc_curve_for(dotted: &str) -> Result<EccCurve, CryptoError> {
    EccCurve::try_from(&parse_oid(dotted)?)
}

/// Converts an ECC curve identifier to its corresponding ASN.1 Object Identifier.
impl From<EccCurve> for asn1::ObjectIdentifier {
    fn from(curve: EccCurve) -> Self {
        curve_oid(curve)
    }
}

impl From<KeyAlgorithm> for asn1::ObjectIdentifier {
    fn from(algorithm: KeyAlgorithm) -> Self {
        algorithm_oid(algorithm)
    }
}

/// Attempts to convert an algorithm OID to a key algorithm.
///
/// # Errors
///
/// Returns `CryptoError::UnsupportedOid` if the OID is not one of the four
/// supported algorithm identifiers.
impl TryFrom<&asn1::ObjectIdentifier> for KeyAlgorithm {
    type Error = CryptoError;

    fn try_from(oid: &asn1::ObjectIdentifier) -> Result<Self, Self::Error> {
        match *oid {
            OID_RSA_ENCRYPTION => Ok(KeyAlgorithm::Rsa),
            OID_EC_PUBLIC_KEY => Ok(KeyAlgorithm::Ecc),
            OID_X25519 => Ok(KeyAlgorithm::X25519),
            OID_ED25519 => Ok(KeyAlgorithm::Ed25519),
            _ => {
                tracing::error!(oid = %oid, "Unsupported key algorithm OID");
                Err(CryptoError::UnsupportedOid(oid.to_string()))
            }
        }
    }
}

/// Attempts to convert a named-curve OID to an ECC curve identifier.
///
/// # Errors
///
/// Returns `CryptoError::UnsupportedOid` if the OID does not match any
/// supported curve.
impl TryFrom<&asn1::ObjectIdentifier> for EccCurve {
    type Error = CryptoError;

    fn try_from(oid: &asn1::ObjectIdentifier) -> Result<Self, Self::Error> {
        match *oid {
            OID_P256 => Ok(EccCurve::P256),
            OID_P384 => Ok(EccCurve::P384),
            OID_P521 => Ok(EccCurve::P521),
            _ => {
                tracing::error!(oid = %oid, "Unsupported named curve OID");
                Err(CryptoError::UnsupportedOid(oid.to_string()))
            }
        }
    }
}

/// Attempts to convert an RFC 8410 algorithm OID to a Curve25519 flavour.
///
/// # Errors
///
/// Returns `CryptoError::UnsupportedOid` for anything but `id-X25519` and
/// `id-Ed25519`.
impl TryFrom<&asn1::ObjectIdentifier> for Curve25519Kind {
    type Error = CryptoError;

    fn try_from(oid: &asn1::ObjectIdentifier) -> Result<Self, Self::Error> {
        match *oid {
            OID_X25519 => Ok(Curve25519Kind::X25519),
            OID_ED25519 => Ok(Curve25519Kind::Ed25519),
            _ => {
                tracing::error!(oid = %oid, "Not a Curve25519 OID");
                Err(CryptoError::UnsupportedOid(oid.to_string()))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use test_with_tracing::test;

    use super::*;

    const ALGORITHMS: [KeyAlgorithm; 4] = [
        KeyAlgorithm::Rsa,
        KeyAlgorithm::Ecc,
        KeyAlgorithm::X25519,
        KeyAlgorithm::Ed25519,
    ];

    #[test]
    fn test_algorithm_oids_resolve_back() {
        for algorithm in ALGORITHMS {
            let oid = algorithm_oid(algorithm);
            assert_eq!(KeyAlgorithm::try_from(&oid), Ok(algorithm));
        }
    }

    #[test]
    fn test_curve_oids_resolve_back() {
        for curve in [EccCurve::P256, EccCurve::P384, EccCurve::P521] {
            let oid: asn1::ObjectIdentifier = curve.into();
            assert_eq!(EccCurve::try_from(&oid), Ok(curve));
        }
    }

    #[test]
    fn test_dotted_lookup() {
        assert_eq!(key_algorithm_for("1.2.840.113549.1.1.1"), Ok(KeyAlgorithm::Rsa));
        assert_eq!(key_algorithm_for("1.3.101.112"), Ok(KeyAlgorithm::Ed25519));
        assert_eq!(ecc_curve_for("1.3.132.0.35"), Ok(EccCurve::P521));
    }

    #[test]
    fn test_dsa_is_not_supported() {
        let err = key_algorithm_for("1.2.840.10040.4.1").unwrap_err();
        assert_eq!(err, CryptoError::UnsupportedOid("1.2.840.10040.4.1".into()));
        assert_eq!(err.kind(), CryptoErrorKind::NotSupported);
    }

    #[test]
    fn test_secp256k1_is_not_supported() {
        assert_eq!(
            ecc_curve_for("1.3.132.0.10"),
            Err(CryptoError::UnsupportedOid("1.3.132.0.10".into()))
        );
    }

    #[test]
    fn test_malformed_oid_is_distinct_from_unsupported() {
        let err = key_algorithm_for("not.an.oid").unwrap_err();
        assert_eq!(err, CryptoError::MalformedOid("not.an.oid".into()));
        assert_eq!(err.kind(), CryptoErrorKind::NotSupported);
    }

    #[test]
    fn test_curve25519_kind_from_oid() {
        assert_eq!(
            Curve25519Kind::try_from(&OID_X25519),
            Ok(Curve25519Kind::X25519)
        );
        assert!(Curve25519Kind::try_from(&OID_EC_PUBLIC_KEY).is_err());
    }

    #[test]
    fn test_curve_oid_is_not_an_algorithm() {
        assert!(matches!(
            KeyAlgorithm::try_from(&OID_P256),
            Err(CryptoError::UnsupportedOid(_))
        ));
    }
}
