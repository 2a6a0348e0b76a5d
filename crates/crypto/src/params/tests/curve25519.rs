// Copyright (C) Microsoft Corporation. All rights reserved.

use test_with_tracing::test;

use super::*;

#[test]
fn test_curve25519_length() {
    for len in [16, 31, 33] {
        assert!(matches!(
            Curve25519PrivateKeyParameters::new(Curve25519Kind::Ed25519, &vec![1u8; len]),
            Err(CryptoError::InvalidParameter(_))
        ));
        assert!(matches!(
            Curve25519PublicKeyParameters::new(Curve25519Kind::X25519, &vec![1u8; len]),
            Err(CryptoError::InvalidParameter(_))
        ));
    }
}

#[test]
fn test_x25519_clamping() {
    assert!(x25519_is_clamped(&clamped()));

    let mut low_bits = clamped();
    low_bits[0] |= 0x01;
    let mut high_bit = clamped();
    high_bit[31] |= 0x80;
    let mut second_bit = clamped();
    second_bit[31] &= !0x40;

    for scalar in [low_bits, high_bit, second_bit] {
        assert!(!x25519_is_clamped(&scalar));
        assert!(Curve25519PrivateKeyParameters::new(Curve25519Kind::X25519, &scalar).is_err());
    }
}

#[test]
fn test_ed25519_scalar_is_not_clamped() {
    // Ed25519 seeds are arbitrary bytes.
    let key = Curve25519PrivateKeyParameters::new(Curve25519Kind::Ed25519, &[0xff; 32]).unwrap();
    assert_eq!(key.scalar().unwrap(), &[0xff; 32]);
}

#[test]
fn test_curve25519_copy_and_wipe() {
    let mut source = clamped();
    let mut key = Curve25519PrivateKeyParameters::new(Curve25519Kind::X25519, &source).unwrap();
    source[1] = !source[1];
    assert_ne!(source, clamped());
    assert_eq!(key.scalar().unwrap(), &clamped());

    key.wipe();
    assert_eq!(key.scalar(), Err(CryptoError::BufferWiped));
    assert_eq!(key.kind(), Curve25519Kind::X25519);
}
