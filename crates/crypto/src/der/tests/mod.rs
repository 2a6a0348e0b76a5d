// Copyright (C) Microsoft Corporation. All rights reserved.

#![allow(clippy::unwrap_used)]


use vectors::*;

use super::*;

/// Returns a copy of `der` with the first occurrence of `from` replaced by `to`.
fn patch(der: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    assert_eq!(from.len(), to.len());
    let pos = der
        .windows(from.len())
        .position(|window| window == from)
        .unwrap();
    let mut out = der.to_vec();
    out[pos..pos + to.len()].copy_from_slice(to);
    out
}

/// Wraps `content` in a DER SEQUENCE (short or one-byte long form).
fn sequence(content: &[u8]) -> Vec<u8> {
    tlv(0x30, content)
}

fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    if content.len() < 0x80 {
        out.push(content.len() as u8);
    } else {
        assert!(content.len() < 0x100);
        out.extend_from_slice(&[0x81, content.len() as u8]);
    }
    out.extend_from_slice(content);
    out
}

fn private_roundtrip(der: &[u8]) -> PrivateKeyParameters {
    let key = PrivateKeyDecoder::decode(der).unwrap();
    let encoder = PrivateKeyEncoder::new(&key);

    let len = encoder.to_der(None).unwrap();
    let mut buf = vec![0u8; len];
    let len2 = encoder.to_der(Some(&mut buf)).unwrap();
    assert_eq!(len, len2);
    assert_eq!(buf.as_slice(), der);
    assert_eq!(encoder.to_der_vec().unwrap(), der);

    let again = PrivateKeyDecoder::decode(&buf).unwrap();
    assert_eq!(again, key);
    key
}

fn public_roundtrip(der: &[u8]) -> PublicKeyParameters {
    let key = PublicKeyDecoder::decode(der).unwrap();
    let encoder = PublicKeyEncoder::new(&key);

    let len = encoder.to_der(None).unwrap();
    let mut buf = vec![0u8; len];
    let len2 = encoder.to_der(Some(&mut buf)).unwrap();
    assert_eq!(len, len2);
    assert_eq!(buf.as_slice(), der);

    let again = PublicKeyDecoder::decode(&buf).unwrap();
    assert_eq!(again, key);
    key
}
