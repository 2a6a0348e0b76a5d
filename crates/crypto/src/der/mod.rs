// Copyright (C) Microsoft Corporation. All rights reserved.

//! DER encoding and decoding of key containers.
//!
//! This module converts between [`PrivateKeyParameters`] /
//! [`PublicKeyParameters`] and their standard DER containers:
//!
//! - [`PrivateKeyDecoder`] / [`PrivateKeyEncoder`]: PKCS#8 `PrivateKeyInfo`
//! - [`PublicKeyDecoder`] / [`PublicKeyEncoder`]: X.509 `SubjectPublicKeyInfo`
//!
//! # Standards Support
//!
//! - **RFC 5958 / PKCS#8**: private key container (version 0 only)
//! - **RFC 5280**: SubjectPublicKeyInfo
//! - **RFC 8017 / PKCS#1**: RSA inner structures
//! - **RFC 5915 / SEC1**: EC private key and uncompressed point encoding
//! - **RFC 8410**: X25519 and Ed25519 raw keys
//!
//! Tag-length-value parsing and writing is delegated to the `asn1` crate.
//! This module adds the semantic checks: version fields, algorithm parameter
//! shapes, key lengths, point format, X25519 clamping and BIT STRING unused
//! bits. Decoding and encoding are stateless and may run concurrently.
mod curve25519;
mod ecc;
mod identifier;
mod int;
mod private;
mod public;
mod rsa;

pub(crate) use curve25519::*;
pub(crate) use identifier::*;
pub(crate) use int::*;
pub use private::*;
pub use public::*;

use super::*;

#[cfg(test)]
mod tests;
