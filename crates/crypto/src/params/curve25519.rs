// Copyright (C) Microsoft Corporation. All rights reserved.

//! X25519 and Ed25519 key parameters (RFC 8410 raw keys).

use super::*;

/// Returns true if an X25519 scalar is clamped per RFC 7748.
///
/// The three low bits of byte 0 are clear, bit 7 of byte 31 is clear and bit
/// 6 of byte 31 is set.
pub fn x25519_is_clamped(scalar: &[u8; Curve25519Kind::KEY_SIZE]) -> bool {
    scalar[0] & 0x07 == 0 && scalar[31] & 0x80 == 0 && scalar[31] & 0x40 == 0x40
}

/// Checks a raw Curve25519 key length.
fn raw_key(bytes: &[u8]) -> Option<&[u8; Curve25519Kind::KEY_SIZE]> {
    bytes.try_into().ok()
}

/// Raw 32-byte Curve25519 private key tagged with its algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve25519PrivateKeyParameters {
    kind: Curve25519Kind,
    scalar: ZeroingBuffer,
}

impl Curve25519PrivateKeyParameters {
    /// Creates Curve25519 private key parameters from a copy of `scalar`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameter` if `scalar` is not exactly 32
    /// bytes, or if an X25519 scalar is not clamped.
    pub fn new(kind: Curve25519Kind, scalar: &[u8]) -> Result<Self, CryptoError> {
        let Some(raw) = raw_key(scalar) else {
            tracing::error!(?kind, len = scalar.len(), "Invalid Curve25519 private key length");
            return Err(CryptoError::InvalidParameter("Curve25519 private key must be 32 bytes"));
        };
        if kind == Curve25519Kind::X25519 && !x25519_is_clamped(raw) {
            tracing::error!("X25519 private key is not clamped");
            return Err(CryptoError::InvalidParameter("X25519 private key is not clamped"));
        }
        Ok(Self {
            kind,
            scalar: ZeroingBuffer::from_slice(scalar),
        })
    }

    /// Returns the algorithm this key belongs to.
    pub fn kind(&self) -> Curve25519Kind {
        self.kind
    }

    /// Returns the raw private key.
    pub fn scalar(&self) -> Result<&[u8], CryptoError> {
        self.scalar.as_bytes()
    }

    /// Zeroes the private key.
    pub fn wipe(&mut self) {
        self.scalar.wipe();
    }
}

/// Raw 32-byte Curve25519 public key tagged with its algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve25519PublicKeyParameters {
    kind: Curve25519Kind,
    point: Vec<u8>,
}

impl Curve25519PublicKeyParameters {
    /// Creates Curve25519 public key parameters from a copy of `point`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameter` if `point` is not exactly 32
    /// bytes.
    pub fn new(kind: Curve25519Kind, point: &[u8]) -> Result<Self, CryptoError> {
        if raw_key(point).is_none() {
            tracing::error!(?kind, len = point.len(), "Invalid Curve25519 public key length");
            return Err(CryptoError::InvalidParameter("Curve25519 public key must be 32 bytes"));
        }
        Ok(Self {
            kind,
            point: point.to_vec(),
        })
    }

    /// Returns the algorithm this key belongs to.
    pub fn kind(&self) -> Curve25519Kind {
        self.kind
    }

    /// Returns the raw public key.
    pub fn point(&self) -> &[u8] {
        &self.point
    }
}
