// Copyright (C) Microsoft Corporation. All rights reserved.

//! End-to-end checks against OpenSSL as the platform crypto provider.
//!
//! Keys generated by OpenSSL are pushed through the codec, loaded back into
//! OpenSSL and used to sign, verify and agree. Encodings are also compared
//! byte for byte with OpenSSL's own PKCS#8 and SPKI output.

#![allow(clippy::unwrap_used)]

use openssl::derive::Deriver;
use openssl::ec::EcGroup;
use openssl::ec::EcKey;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::PKey;
use openssl::pkey::Private;
use openssl::pkey::Public;
use openssl::rsa::Rsa;
use openssl::sign::Signer;
use openssl::sign::Verifier;
use test_with_tracing::test;
use yubikey_crypto::*;

const MESSAGE: &[u8] = b"key codec functional equivalence";

fn to_pkcs8(key: &PrivateKeyParameters) -> Vec<u8> {
    PrivateKeyEncoder::new(key).to_der_vec().unwrap()
}

fn to_spki(key: &PublicKeyParameters) -> Vec<u8> {
    PublicKeyEncoder::new(key).to_der_vec().unwrap()
}

fn sign(key: &PKey<Private>) -> Vec<u8> {
    let mut signer = Signer::new(MessageDigest::sha256(), key).unwrap();
    signer.update(MESSAGE).unwrap();
    signer.sign_to_vec().unwrap()
}

fn verify(key: &PKey<Public>, signature: &[u8]) -> bool {
    let mut verifier = Verifier::new(MessageDigest::sha256(), key).unwrap();
    verifier.update(MESSAGE).unwrap();
    verifier.verify(signature).unwrap()
}

fn public_of(key: &PKey<Private>) -> PKey<Public> {
    PKey::public_key_from_der(&key.public_key_to_der().unwrap()).unwrap()
}

/// Signs with `original`, verifies with `ours` and the other way round.
fn assert_sign_verify_both_ways(original: &PKey<Private>, ours: &PKey<Private>) {
    assert!(verify(&public_of(ours), &sign(original)));
    assert!(verify(&public_of(original), &sign(ours)));
}

fn rsa_roundtrip(bits: u32, key_type: KeyType) {
    let rsa = Rsa::generate(bits).unwrap();
    let params: PrivateKeyParameters = RsaPrivateKeyParameters::new(
        &rsa.n().to_vec(),
        &rsa.e().to_vec(),
        Some(&rsa.d().to_vec()),
        &rsa.p().unwrap().to_vec(),
        &rsa.q().unwrap().to_vec(),
        &rsa.dmp1().unwrap().to_vec(),
        &rsa.dmq1().unwrap().to_vec(),
        &rsa.iqmp().unwrap().to_vec(),
    )
    .unwrap()
    .into();
    assert_eq!(params.key_type(), Ok(key_type));

    let original = PKey::from_rsa(rsa).unwrap();
    let der = to_pkcs8(&params);
    assert_eq!(der, original.private_key_to_pkcs8().unwrap());

    let decoded = PrivateKeyDecoder::decode(&der).unwrap();
    assert_eq!(decoded, params);
    let ours = PKey::private_key_from_pkcs8(&to_pkcs8(&decoded)).unwrap();
    assert_sign_verify_both_ways(&original, &ours);

    let spki = to_spki(&decoded.public_key().unwrap());
    assert_eq!(spki, original.public_key_to_der().unwrap());
    let public = PKey::public_key_from_der(&spki).unwrap();
    assert!(verify(&public, &sign(&original)));
}

#[test]
fn test_rsa_2048_functional_equivalence() {
    rsa_roundtrip(2048, KeyType::Rsa2048);
}

#[test]
fn test_rsa_3072_functional_equivalence() {
    rsa_roundtrip(3072, KeyType::Rsa3072);
}

#[test]
fn test_rsa_decoded_from_openssl() {
    let original = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
    let rsa = PrivateKeyDecoder::decode_rsa(&original.private_key_to_pkcs8().unwrap()).unwrap();

    let reference = original.rsa().unwrap();
    assert_eq!(rsa.n(), reference.n().to_vec().as_slice());
    assert_eq!(rsa.p().unwrap(), reference.p().unwrap().to_vec().as_slice());
    assert_eq!(rsa.qi().unwrap(), reference.iqmp().unwrap().to_vec().as_slice());

    let public = PublicKeyDecoder::decode_rsa(&original.public_key_to_der().unwrap()).unwrap();
    assert_eq!(public, rsa.public_key());
}

fn ecc_roundtrip(nid: Nid, curve: EccCurve) {
    let group = EcGroup::from_curve_name(nid).unwrap();
    let original = PKey::from_ec_key(EcKey::generate(&group).unwrap()).unwrap();
    let reference = original.private_key_to_pkcs8().unwrap();

    let decoded = PrivateKeyDecoder::decode(&reference).unwrap();
    assert_eq!(decoded.key_type(), Ok(KeyType::from(curve)));
    let der = to_pkcs8(&decoded);
    assert_eq!(der, reference);

    let ours = PKey::private_key_from_pkcs8(&der).unwrap();
    assert_sign_verify_both_ways(&original, &ours);

    let spki = to_spki(&decoded.public_key().unwrap());
    assert_eq!(spki, original.public_key_to_der().unwrap());

    // Scalar alone, without the embedded point, still loads and signs.
    let PrivateKeyParameters::Ecc(ecc) = &decoded else {
        panic!("expected ECC");
    };
    let scalar_only: PrivateKeyParameters =
        EccPrivateKeyParameters::new(curve, ecc.d().unwrap()).unwrap().into();
    let ours = PKey::private_key_from_pkcs8(&to_pkcs8(&scalar_only)).unwrap();
    assert!(verify(&public_of(&original), &sign(&ours)));
}

#[test]
fn test_p256_functional_equivalence() {
    ecc_roundtrip(Nid::X9_62_PRIME256V1, EccCurve::P256);
}

#[test]
fn test_p384_functional_equivalence() {
    ecc_roundtrip(Nid::SECP384R1, EccCurve::P384);
}

#[test]
fn test_p521_functional_equivalence() {
    ecc_roundtrip(Nid::SECP521R1, EccCurve::P521);
}

#[test]
fn test_ed25519_functional_equivalence() {
    let original = PKey::generate_ed25519().unwrap();
    let params: PrivateKeyParameters = Curve25519PrivateKeyParameters::new(
        Curve25519Kind::Ed25519,
        &original.raw_private_key().unwrap(),
    )
    .unwrap()
    .into();

    let der = to_pkcs8(&params);
    assert_eq!(der, original.private_key_to_pkcs8().unwrap());
    let ours = PKey::private_key_from_pkcs8(&der).unwrap();

    let public: PublicKeyParameters = Curve25519PublicKeyParameters::new(
        Curve25519Kind::Ed25519,
        &original.raw_public_key().unwrap(),
    )
    .unwrap()
    .into();
    let spki = to_spki(&public);
    assert_eq!(spki, original.public_key_to_der().unwrap());
    let public = PKey::public_key_from_der(&spki).unwrap();

    let mut signer = Signer::new_without_digest(&ours).unwrap();
    let signature = signer.sign_oneshot_to_vec(MESSAGE).unwrap();
    let mut verifier = Verifier::new_without_digest(&public).unwrap();
    assert!(verifier.verify_oneshot(&signature, MESSAGE).unwrap());
}

#[test]
fn test_x25519_functional_equivalence() {
    let original = PKey::generate_x25519().unwrap();
    let peer = PKey::generate_x25519().unwrap();

    let decoded =
        PrivateKeyDecoder::decode_curve25519(&original.private_key_to_pkcs8().unwrap()).unwrap();
    assert_eq!(decoded.scalar().unwrap(), original.raw_private_key().unwrap().as_slice());

    let params: PrivateKeyParameters = decoded.into();
    let ours = PKey::private_key_from_pkcs8(&to_pkcs8(&params)).unwrap();
    let peer_public = public_of(&peer);

    let mut deriver = Deriver::new(&original).unwrap();
    deriver.set_peer(&peer_public).unwrap();
    let expected = deriver.derive_to_vec().unwrap();

    let mut deriver = Deriver::new(&ours).unwrap();
    deriver.set_peer(&peer_public).unwrap();
    assert_eq!(deriver.derive_to_vec().unwrap(), expected);

    let public = PublicKeyDecoder::decode(&original.public_key_to_der().unwrap()).unwrap();
    assert_eq!(public.key_type(), Ok(KeyType::X25519));
    assert_eq!(to_spki(&public), original.public_key_to_der().unwrap());
}

#[cfg(feature = "pem")]
#[test]
fn test_pem_matches_openssl() {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).unwrap();
    let original = PKey::from_ec_key(EcKey::generate(&group).unwrap()).unwrap();

    let reference = String::from_utf8(original.public_key_to_pem().unwrap()).unwrap();
    let public = pem::public_key_from_pem(&reference).unwrap();
    assert_eq!(
        pem::public_key_to_pem(&public).unwrap().trim_end(),
        reference.trim_end()
    );

    let reference = String::from_utf8(original.private_key_to_pem_pkcs8().unwrap()).unwrap();
    let private = pem::private_key_from_pem(&reference).unwrap();
    assert_eq!(
        pem::private_key_to_pem(&private).unwrap().trim_end(),
        reference.trim_end()
    );
}
