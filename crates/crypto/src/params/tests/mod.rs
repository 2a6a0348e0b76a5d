// Copyright (C) Microsoft Corporation. All rights reserved.

#![allow(clippy::unwrap_used)]

mod curve25519;

use test_with_tracing::test;

use super::*;

fn rsa_1024_modulus() -> Vec<u8> {
    let mut n = vec![0xc5u8; 128];
    n[127] = 0x01;
    n
}

fn sample_rsa() -> RsaPrivateKeyParameters {
    RsaPrivateKeyParameters::new(
        &rsa_1024_modulus(),
        &[0x01, 0x00, 0x01],
        Some(&[0x11; 128]),
        &[0x22; 64],
        &[0x33; 64],
        &[0x44; 64],
        &[0x55; 64],
        &[0x66; 64],
    )
    .unwrap()
}

#[test]
fn test_private_key_type_dispatch() {
    let rsa: PrivateKeyParameters = sample_rsa().into();
    assert_eq!(rsa.algorithm(), KeyAlgorithm::Rsa);
    assert_eq!(rsa.key_type(), Ok(KeyType::Rsa1024));

    let ecc: PrivateKeyParameters = EccPrivateKeyParameters::new(EccCurve::P384, &[1; 48])
        .unwrap()
        .into();
    assert_eq!(ecc.algorithm(), KeyAlgorithm::Ecc);
    assert_eq!(ecc.key_type(), Ok(KeyType::EccP384));

    let ed: PrivateKeyParameters =
        Curve25519PrivateKeyParameters::new(Curve25519Kind::Ed25519, &[9; 32])
            .unwrap()
            .into();
    assert_eq!(ed.algorithm(), KeyAlgorithm::Ed25519);
    assert_eq!(ed.key_type(), Ok(KeyType::Ed25519));
}

#[test]
fn test_public_key_derivation() {
    let rsa: PrivateKeyParameters = sample_rsa().into();
    match rsa.public_key() {
        Some(PublicKeyParameters::Rsa(public)) => {
            assert_eq!(public.n(), rsa_1024_modulus().as_slice());
            assert_eq!(public.e(), &[0x01, 0x00, 0x01]);
        }
        other => panic!("unexpected public key {other:?}"),
    }

    let x25519: PrivateKeyParameters =
        Curve25519PrivateKeyParameters::new(Curve25519Kind::X25519, &clamped())
            .unwrap()
            .into();
    assert_eq!(x25519.public_key(), None);
}

#[test]
fn test_wipe_through_sum_type() {
    let mut key: PrivateKeyParameters = sample_rsa().into();
    key.wipe();
    let PrivateKeyParameters::Rsa(rsa) = &key else {
        panic!("expected RSA");
    };
    assert_eq!(rsa.p(), Err(CryptoError::BufferWiped));
    assert_eq!(rsa.d(), Err(CryptoError::BufferWiped));
    // Public half stays readable.
    assert_eq!(rsa.e(), &[0x01, 0x00, 0x01]);
}

#[test]
fn test_public_key_type() {
    let public: PublicKeyParameters =
        Curve25519PublicKeyParameters::new(Curve25519Kind::X25519, &[3; 32])
            .unwrap()
            .into();
    assert_eq!(public.algorithm(), KeyAlgorithm::X25519);
    assert_eq!(public.key_type(), Ok(KeyType::X25519));
}

#[test]
fn test_magnitude_bits() {
    assert_eq!(magnitude_bits(&[]), 0);
    assert_eq!(magnitude_bits(&[0, 0]), 0);
    assert_eq!(magnitude_bits(&[0, 0x01]), 1);
    assert_eq!(magnitude_bits(&[0x80, 0]), 16);
    assert_eq!(magnitude_bits(&[0x01, 0xff, 0xff]), 17);
}

fn clamped() -> [u8; 32] {
    let mut scalar = [0x5au8; 32];
    scalar[0] &= 0xf8;
    scalar[31] &= 0x7f;
    scalar[31] |= 0x40;
    scalar
}
