// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key definition table.
//!
//! One immutable [`KeyDefinition`] per supported key type, held in a static
//! table that is built at compile time and never mutated. Lookups by key type,
//! OID and RSA bit length either resolve to exactly one entry or fail.

use std::fmt;
use std::str::FromStr;

use super::*;

/// Every key type the codec can represent.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyType {
    /// RSA with a 1024-bit modulus.
    Rsa1024,
    /// RSA with a 2048-bit modulus.
    Rsa2048,
    /// RSA with a 3072-bit modulus.
    Rsa3072,
    /// RSA with a 4096-bit modulus.
    Rsa4096,
    /// NIST P-256.
    EccP256,
    /// NIST P-384.
    EccP384,
    /// NIST P-521.
    EccP521,
    /// X25519.
    X25519,
    /// Ed25519.
    Ed25519,
}

impl KeyType {
    /// Returns the algorithm family of this key type.
    pub fn algorithm(&self) -> KeyAlgorithm {
        KeyDefinitions::by_key_type(*self).algorithm
    }

    /// Returns the NIST curve for ECC key types.
    pub fn ecc_curve(&self) -> Option<EccCurve> {
        match self {
            KeyType::EccP256 => Some(EccCurve::P256),
            KeyType::EccP384 => Some(EccCurve::P384),
            KeyType::EccP521 => Some(EccCurve::P521),
            _ => None,
        }
    }

    /// Returns the Curve25519 flavour for X25519 / Ed25519 key types.
    pub fn curve25519_kind(&self) -> Option<Curve25519Kind> {
        match self {
            KeyType::X25519 => Some(Curve25519Kind::X25519),
            KeyType::Ed25519 => Some(Curve25519Kind::Ed25519),
            _ => None,
        }
    }
}

impl From<EccCurve> for KeyType {
    fn from(curve: EccCurve) -> Self {
        match curve {
            EccCurve::P256 => KeyType::EccP256,
            EccCurve::P384 => KeyType::EccP384,
            EccCurve::P521 => KeyType::EccP521,
        }
    }
}

impl From<Curve25519Kind> for KeyType {
    fn from(kind: Curve25519Kind) -> Self {
        match kind {
            Curve25519Kind::X25519 => KeyType::X25519,
            Curve25519Kind::Ed25519 => KeyType::Ed25519,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(KeyDefinitions::by_key_type(*self).name)
    }
}

/// Parses the names printed by `Display` (`RSA2048`, `P384`, `Ed25519`, ...).
///
/// Matching is case-insensitive. Unknown names fail with
/// `CryptoError::InvalidParameter`.
impl FromStr for KeyType {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyDefinitions::all()
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(s))
            .map(|def| def.key_type)
            .ok_or(CryptoError::InvalidParameter("unknown key type name"))
    }
}

/// Which field of a [`KeyDefinition`] an OID lookup should match.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OidRole {
    /// Match the `AlgorithmIdentifier.algorithm` OID.
    Algorithm,
    /// Match the named-curve OID.
    Curve,
}

/// Immutable metadata for one key type.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyDefinition {
    /// The key type described.
    pub key_type: KeyType,
    /// The algorithm family.
    pub algorithm: KeyAlgorithm,
    /// Display name.
    pub name: &'static str,
    /// Modulus or field size in bits.
    pub length_in_bits: usize,
    /// Modulus or coordinate size in bytes.
    pub length_in_bytes: usize,
    /// `AlgorithmIdentifier.algorithm` OID.
    pub algorithm_oid: asn1::ObjectIdentifier,
    /// Named-curve OID. `None` for RSA. For Curve25519 keys the algorithm OID
    /// also names the curve.
    pub curve_oid: Option<asn1::ObjectIdentifier>,
}

impl KeyDefinition {
    /// Returns true for RSA definitions.
    pub fn is_rsa(&self) -> bool {
        self.algorithm == KeyAlgorithm::Rsa
    }
}

const fn rsa(key_type: KeyType, name: &'static str, bits: usize) -> KeyDefinition {
    KeyDefinition {
        key_type,
        algorithm: KeyAlgorithm::Rsa,
        name,
        length_in_bits: bits,
        length_in_bytes: bits / 8,
        algorithm_oid: OID_RSA_ENCRYPTION,
        curve_oid: None,
    }
}

const fn ecc(
    key_type: KeyType,
    name: &'static str,
    bits: usize,
    bytes: usize,
    curve_oid: asn1::ObjectIdentifier,
) -> KeyDefinition {
    KeyDefinition {
        key_type,
        algorithm: KeyAlgorithm::Ecc,
        name,
        length_in_bits: bits,
        length_in_bytes: bytes,
        algorithm_oid: OID_EC_PUBLIC_KEY,
        curve_oid: Some(curve_oid),
    }
}

const fn curve25519(
    key_type: KeyType,
    algorithm: KeyAlgorithm,
    name: &'static str,
    oid: asn1::ObjectIdentifier,
    curve: asn1::ObjectIdentifier,
) -> KeyDefinition {
    KeyDefinition {
        key_type,
        algorithm,
        name,
        length_in_bits: 256,
        length_in_bytes: 32,
        algorithm_oid: oid,
        curve_oid: Some(curve),
    }
}

// Order matches the `KeyType` declaration; `by_key_type` relies on it.
static DEFINITIONS: [KeyDefinition; 9] = [
    rsa(KeyType::Rsa1024, "RSA1024", 1024),
    rsa(KeyType::Rsa2048, "RSA2048", 2048),
    rsa(KeyType::Rsa3072, "RSA3072", 3072),
    rsa(KeyType::Rsa4096, "RSA4096", 4096),
    ecc(KeyType::EccP256, "P256", 256, 32, OID_P256),
    ecc(KeyType::EccP384, "P384", 384, 48, OID_P384),
    ecc(KeyType::EccP521, "P521", 521, 66, OID_P521),
    curve25519(KeyType::X25519, KeyAlgorithm::X25519, "X25519", OID_X25519, OID_X25519),
    curve25519(KeyType::Ed25519, KeyAlgorithm::Ed25519, "Ed25519", OID_ED25519, OID_ED25519),
];

/// Lookup functions over the static definition table.
pub struct KeyDefinitions;

impl KeyDefinitions {
    /// Returns every definition.
    pub fn all() -> &'static [KeyDefinition] {
        &DEFINITIONS
    }

    /// Returns the definition of a key type.
    pub fn by_key_type(key_type: KeyType) -> &'static KeyDefinition {
        let index = match key_type {
            KeyType::Rsa1024 => 0,
            KeyType::Rsa2048 => 1,
            KeyType::Rsa3072 => 2,
            KeyType::Rsa4096 => 3,
            KeyType::EccP256 => 4,
            KeyType::EccP384 => 5,
            KeyType::EccP521 => 6,
            KeyType::X25519 => 7,
            KeyType::Ed25519 => 8,
        };
        &DEFINITIONS[index]
    }

    /// Returns the definition of a NIST curve.
    pub fn by_curve(curve: EccCurve) -> &'static KeyDefinition {
        Self::by_key_type(curve.into())
    }

    /// Returns the definition identified by an OID.
    ///
    /// With [`OidRole::Curve`] the OID must name a curve (P-256, P-384, P-521,
    /// X25519 or Ed25519). With [`OidRole::Algorithm`] it must identify exactly
    /// one key type, which only the Curve25519 OIDs do.
    ///
    /// # Errors
    ///
    /// * `CryptoError::OidNotApplicable` - The OID is recognized but does not
    ///   select a single definition in this role. RSA has no curve OID, and the
    ///   RSA / EC algorithm OIDs each cover several key sizes.
    /// * `CryptoError::UnsupportedOid` - The OID is not known at all.
    pub fn by_oid(
        oid: &asn1::ObjectIdentifier,
        role: OidRole,
    ) -> Result<&'static KeyDefinition, CryptoError> {
        let mut matches = DEFINITIONS.iter().filter(|def| match role {
            OidRole::Algorithm => def.algorithm_oid == *oid,
            OidRole::Curve => def.curve_oid.as_ref() == Some(oid),
        });

        match (matches.next(), matches.next()) {
            (Some(def), None) => Ok(def),
            (Some(_), Some(_)) => {
                tracing::error!(oid = %oid, ?role, "OID selects more than one key definition");
                Err(CryptoError::OidNotApplicable(oid.to_string()))
            }
            (None, _) => {
                if DEFINITIONS.iter().any(|def| def.algorithm_oid == *oid) {
                    tracing::error!(oid = %oid, ?role, "Algorithm OID has no curve");
                    Err(CryptoError::OidNotApplicable(oid.to_string()))
                } else {
                    Err(CryptoError::UnsupportedOid(oid.to_string()))
                }
            }
        }
    }

    /// Returns the RSA definition for a modulus size in bits.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::UnsupportedKeySize` unless `bits` is 1024, 2048,
    /// 3072 or 4096.
    pub fn by_bit_length(bits: usize) -> Result<&'static KeyDefinition, CryptoError> {
        DEFINITIONS
            .iter()
            .find(|def| def.is_rsa() && def.length_in_bits == bits)
            .ok_or(CryptoError::UnsupportedKeySize(bits))
    }
}
