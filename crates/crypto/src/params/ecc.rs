// Copyright (C) Microsoft Corporation. All rights reserved.

//! NIST curve key parameters.

use super::*;

/// SEC1 leading byte of an uncompressed point.
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Public point on a NIST curve.
///
/// Both coordinates are exactly [`EccCurve::point_size`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EccPublicKeyParameters {
    curve: EccCurve,
    x: Vec<u8>,
    y: Vec<u8>,
}

impl EccPublicKeyParameters {
    /// Creates a public point from copies of its coordinates.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameter` if a coordinate does not have
    /// the curve's coordinate length.
    pub fn new(curve: EccCurve, x: &[u8], y: &[u8]) -> Result<Self, CryptoError> {
        let point_size = curve.point_size();
        if x.len() != point_size || y.len() != point_size {
            tracing::error!(?curve, x_len = x.len(), y_len = y.len(), "Invalid EC coordinate length");
            return Err(CryptoError::InvalidParameter("EC coordinate length"));
        }
        Ok(Self {
            curve,
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Parses a SEC1 uncompressed point (`0x04 || X || Y`).
    ///
    /// # Errors
    ///
    /// * `CryptoError::InvalidPointFormat` - The point is empty or does not
    ///   start with `0x04`. Compressed points are not accepted.
    /// * `CryptoError::InvalidKeyLength` - The point is not
    ///   [`EccCurve::encoded_point_size`] bytes long.
    pub fn from_encoded_point(curve: EccCurve, point: &[u8]) -> Result<Self, CryptoError> {
        match point.first() {
            Some(&UNCOMPRESSED_POINT_TAG) => {}
            tag => {
                tracing::error!(?curve, ?tag, "EC point is not uncompressed");
                return Err(CryptoError::InvalidPointFormat);
            }
        }

        let expected = curve.encoded_point_size();
        if point.len() != expected {
            tracing::error!(?curve, expected, actual = point.len(), "Invalid EC point length");
            return Err(CryptoError::InvalidKeyLength {
                expected,
                actual: point.len(),
            });
        }

        let (x, y) = point[1..].split_at(curve.point_size());
        Ok(Self {
            curve,
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Returns the SEC1 uncompressed encoding `0x04 || X || Y`.
    pub fn encoded_point(&self) -> Vec<u8> {
        let mut point = Vec::with_capacity(self.curve.encoded_point_size());
        point.push(UNCOMPRESSED_POINT_TAG);
        point.extend_from_slice(&self.x);
        point.extend_from_slice(&self.y);
        point
    }

    /// Returns the curve.
    pub fn curve(&self) -> EccCurve {
        self.curve
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> &[u8] {
        &self.y
    }
}

/// Private scalar on a NIST curve, optionally paired with its public point.
///
/// The scalar is stored left-padded to the curve's coordinate length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EccPrivateKeyParameters {
    curve: EccCurve,
    d: ZeroingBuffer,
    public: Option<EccPublicKeyParameters>,
}

impl EccPrivateKeyParameters {
    /// Creates EC private key parameters without a public point.
    ///
    /// A scalar shorter than the coordinate length is left-padded with zeros.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameter` if `d` is empty or longer than
    /// the curve's coordinate length.
    pub fn new(curve: EccCurve, d: &[u8]) -> Result<Self, CryptoError> {
        if d.is_empty() {
            return Err(CryptoError::InvalidParameter("EC private scalar is empty"));
        }
        let d = ZeroingBuffer::left_padded(d, curve.point_size()).map_err(|err| {
            tracing::error!(?curve, ?err, "EC private scalar too long");
            CryptoError::InvalidParameter("EC private scalar is longer than the curve")
        })?;
        Ok(Self {
            curve,
            d,
            public: None,
        })
    }

    /// Creates EC private key parameters with the matching public point.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameter` if the scalar or a coordinate
    /// has an invalid length.
    pub fn with_public_point(
        curve: EccCurve,
        d: &[u8],
        x: &[u8],
        y: &[u8],
    ) -> Result<Self, CryptoError> {
        let public = EccPublicKeyParameters::new(curve, x, y)?;
        Ok(Self::new(curve, d)?.with_public_key(public))
    }

    pub(crate) fn with_public_key(mut self, public: EccPublicKeyParameters) -> Self {
        self.public = Some(public);
        self
    }

    /// Returns the curve.
    pub fn curve(&self) -> EccCurve {
        self.curve
    }

    /// Returns the private scalar, padded to the coordinate length.
    pub fn d(&self) -> Result<&[u8], CryptoError> {
        self.d.as_bytes()
    }

    /// Returns the public point, if known.
    pub fn public_key(&self) -> Option<&EccPublicKeyParameters> {
        self.public.as_ref()
    }

    /// Zeroes the private scalar.
    pub fn wipe(&mut self) {
        self.d.wipe();
    }
}
