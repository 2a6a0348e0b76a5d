// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA key parameters.
//!
//! Integers are unsigned big-endian magnitudes. The sign byte that DER adds to
//! keep an INTEGER positive is not part of the stored value.

use super::*;

/// RSA public key: modulus and public exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKeyParameters {
    n: Vec<u8>,
    e: Vec<u8>,
}

impl RsaPublicKeyParameters {
    /// Creates RSA public key parameters from copies of `n` and `e`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidParameter` if either value is zero.
    pub fn new(n: &[u8], e: &[u8]) -> Result<Self, CryptoError> {
        let n = trim_leading_zeros(n);
        let e = trim_leading_zeros(e);
        if n.is_empty() {
            return Err(CryptoError::InvalidParameter("RSA modulus is zero"));
        }
        if e.is_empty() {
            return Err(CryptoError::InvalidParameter("RSA public exponent is zero"));
        }
        Ok(Self {
            n: n.to_vec(),
            e: e.to_vec(),
        })
    }

    /// Returns the modulus ($n$).
    pub fn n(&self) -> &[u8] {
        &self.n
    }

    /// Returns the public exponent ($e$).
    pub fn e(&self) -> &[u8] {
        &self.e
    }

    /// Returns the modulus size in bits.
    pub fn bit_length(&self) -> usize {
        magnitude_bits(&self.n)
    }

    /// Resolves the key type from the modulus size.
    pub fn key_type(&self) -> Result<KeyType, CryptoError> {
        KeyDefinitions::by_bit_length(self.bit_length()).map(|def| def.key_type)
    }
}

/// RSA private key in CRT form.
///
/// The private exponent is optional: devices commonly hand out only the CRT
/// components. Such keys can be held and inspected, but PKCS#8 export needs
/// `d` and fails with `CryptoError::MissingPrivateComponents` without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKeyParameters {
    public: RsaPublicKeyParameters,
    d: Option<ZeroingBuffer>,
    p: ZeroingBuffer,
    q: ZeroingBuffer,
    dp: ZeroingBuffer,
    dq: ZeroingBuffer,
    qi: ZeroingBuffer,
}

impl RsaPrivateKeyParameters {
    /// Creates RSA private key parameters from copies of the given components.
    ///
    /// # Arguments
    ///
    /// * `n` - Modulus
    /// * `e` - Public exponent
    /// * `d` - Private exponent, if known
    /// * `p` - First prime factor
    /// * `q` - Second prime factor
    /// * `dp` - $d \bmod (p-1)$
    /// * `dq` - $d \bmod (q-1)$
    /// * `qi` - CRT coefficient ($q^{-1} \bmod p$)
    ///
    /// # Errors
    ///
    /// * `CryptoError::InvalidParameter` - `n` or `e` is zero.
    /// * `CryptoError::MissingPrivateComponents` - A CRT component is empty or
    ///   zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: &[u8],
        e: &[u8],
        d: Option<&[u8]>,
        p: &[u8],
        q: &[u8],
        dp: &[u8],
        dq: &[u8],
        qi: &[u8],
    ) -> Result<Self, CryptoError> {
        let public = RsaPublicKeyParameters::new(n, e)?;

        let secret = |value: &[u8]| -> Result<ZeroingBuffer, CryptoError> {
            let value = trim_leading_zeros(value);
            if value.is_empty() {
                tracing::error!("RSA CRT component is missing");
                return Err(CryptoError::MissingPrivateComponents);
            }
            Ok(ZeroingBuffer::from_slice(value))
        };

        Ok(Self {
            public,
            d: d.map(secret).transpose()?,
            p: secret(p)?,
            q: secret(q)?,
            dp: secret(dp)?,
            dq: secret(dq)?,
            qi: secret(qi)?,
        })
    }

    /// Returns the modulus ($n$).
    pub fn n(&self) -> &[u8] {
        self.public.n()
    }

    /// Returns the public exponent ($e$).
    pub fn e(&self) -> &[u8] {
        self.public.e()
    }

    /// Returns the private exponent ($d$), or `None` for a CRT-only key.
    pub fn d(&self) -> Result<Option<&[u8]>, CryptoError> {
        self.d.as_ref().map(ZeroingBuffer::as_bytes).transpose()
    }

    /// Returns the first prime factor ($p$).
    pub fn p(&self) -> Result<&[u8], CryptoError> {
        self.p.as_bytes()
    }

    /// Returns the second prime factor ($q$).
    pub fn q(&self) -> Result<&[u8], CryptoError> {
        self.q.as_bytes()
    }

    /// Returns $d \bmod (p-1)$.
    pub fn dp(&self) -> Result<&[u8], CryptoError> {
        self.dp.as_bytes()
    }

    /// Returns $d \bmod (q-1)$.
    pub fn dq(&self) -> Result<&[u8], CryptoError> {
        self.dq.as_bytes()
    }

    /// Returns the CRT coefficient ($q^{-1} \bmod p$).
    pub fn qi(&self) -> Result<&[u8], CryptoError> {
        self.qi.as_bytes()
    }

    /// Returns the modulus size in bits.
    pub fn bit_length(&self) -> usize {
        self.public.bit_length()
    }

    /// Resolves the key type from the modulus size.
    pub fn key_type(&self) -> Result<KeyType, CryptoError> {
        self.public.key_type()
    }

    /// Returns a copy of the public half.
    pub fn public_key(&self) -> RsaPublicKeyParameters {
        self.public.clone()
    }

    /// Zeroes `d` and the CRT components.
    pub fn wipe(&mut self) {
        if let Some(d) = self.d.as_mut() {
            d.wipe();
        }
        self.p.wipe();
        self.q.wipe();
        self.dp.wipe();
        self.dq.wipe();
        self.qi.wipe();
    }
}
