// Copyright (C) Microsoft Corporation. All rights reserved.

//! Conversions between unsigned magnitudes and DER INTEGERs.
//!
//! Key material is stored as unsigned big-endian bytes. DER INTEGERs are two's
//! complement, so a magnitude whose top bit is set gains a single `0x00` sign
//! byte on the way out and loses it on the way in.

use super::*;

/// Unsigned big-endian magnitude to be written as a DER INTEGER.
pub(crate) struct DerSlice<'a>(pub(crate) &'a [u8]);

/// DER INTEGER to be read back as an unsigned magnitude.
pub(crate) struct DerBigInt<'a>(pub(crate) &'a asn1::OwnedBigInt);

impl<'a> TryFrom<DerSlice<'a>> for asn1::OwnedBigInt {
    type Error = CryptoError;

    fn try_from(value: DerSlice<'a>) -> Result<Self, CryptoError> {
        let bytes = value.0;
        let bytes = match bytes.iter().position(|&b| b != 0) {
            Some(pos) => &bytes[pos..],
            // Zero is encoded as a single 0x00 content byte.
            None => &[0u8][..],
        };

        let needs_padding = bytes[0] & 0x80 == 0x80;

        let mut vec = Vec::with_capacity(bytes.len() + needs_padding as usize);
        if needs_padding {
            vec.push(0);
        }
        vec.extend_from_slice(bytes);

        asn1::OwnedBigInt::new(vec).ok_or(CryptoError::Asn1EncodeError)
    }
}

impl<'a> TryFrom<DerBigInt<'a>> for Vec<u8> {
    type Error = CryptoError;

    fn try_from(value: DerBigInt<'a>) -> Result<Self, CryptoError> {
        let bytes = value.0.as_bytes();

        match bytes {
            [first, ..] if first & 0x80 == 0x80 => {
                tracing::error!("Negative INTEGER in key material");
                Err(CryptoError::NegativeInteger)
            }
            [0, rest @ ..] => Ok(rest.to_vec()),
            _ => Ok(bytes.to_vec()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use test_with_tracing::test;

    use super::*;

    fn encode(magnitude: &[u8]) -> Vec<u8> {
        let int: asn1::OwnedBigInt = DerSlice(magnitude).try_into().unwrap();
        int.as_bytes().to_vec()
    }

    #[test]
    fn test_sign_byte_added_only_when_needed() {
        assert_eq!(encode(&[0x7f, 0x01]), vec![0x7f, 0x01]);
        assert_eq!(encode(&[0x80, 0x01]), vec![0x00, 0x80, 0x01]);
    }

    #[test]
    fn test_leading_zeros_are_minimized() {
        assert_eq!(encode(&[0x00, 0x00, 0x05]), vec![0x05]);
        assert_eq!(encode(&[0x00, 0x00, 0x85]), vec![0x00, 0x85]);
    }

    #[test]
    fn test_zero() {
        assert_eq!(encode(&[]), vec![0x00]);
        assert_eq!(encode(&[0, 0, 0]), vec![0x00]);
    }

    #[test]
    fn test_sign_byte_stripped_on_read() {
        let int = asn1::OwnedBigInt::new(vec![0x00, 0xc0, 0x01]).unwrap();
        let magnitude: Vec<u8> = DerBigInt(&int).try_into().unwrap();
        assert_eq!(magnitude, vec![0xc0, 0x01]);
    }

    #[test]
    fn test_negative_rejected() {
        let int = asn1::OwnedBigInt::new(vec![0xff, 0x01]).unwrap();
        let result: Result<Vec<u8>, _> = DerBigInt(&int).try_into();
        assert_eq!(result, Err(CryptoError::NegativeInteger));
    }
}
