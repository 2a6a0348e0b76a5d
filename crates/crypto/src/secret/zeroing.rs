// Copyright (C) Microsoft Corporation. All rights reserved.

//! Zeroing byte buffer.

use std::fmt;

use zeroize::Zeroize;

use super::*;

enum State {
    Live(Vec<u8>),
    Wiped,
}

/// Owned byte buffer that is zeroed on wipe and on drop.
///
/// The buffer has two states, live and wiped. Wiped is terminal: once reached
/// through [`ZeroingBuffer::wipe`] or by dropping the value, the contents are
/// overwritten with zeros and every accessor returns
/// `CryptoError::BufferWiped`.
///
/// Construction always copies the caller's bytes, so later changes to the
/// source slice are not observed by the buffer and vice versa.
pub struct ZeroingBuffer {
    state: State,
}

impl ZeroingBuffer {
    /// Creates a live buffer of `len` zero bytes.
    pub fn new(len: usize) -> Self {
        Self {
            state: State::Live(vec![0u8; len]),
        }
    }

    /// Creates a live buffer holding a copy of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            state: State::Live(bytes.to_vec()),
        }
    }

    /// Creates a live buffer holding `bytes` left-padded with zeros to `len`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeyLength` if `bytes` is longer than `len`.
    pub fn left_padded(bytes: &[u8], len: usize) -> Result<Self, CryptoError> {
        if bytes.len() > len {
            return Err(CryptoError::InvalidKeyLength {
                expected: len,
                actual: bytes.len(),
            });
        }
        let mut buffer = Self::new(len);
        if let State::Live(data) = &mut buffer.state {
            data[len - bytes.len()..].copy_from_slice(bytes);
        }
        Ok(buffer)
    }

    /// Returns the contents.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::BufferWiped` after the buffer has been wiped.
    pub fn as_bytes(&self) -> Result<&[u8], CryptoError> {
        match &self.state {
            State::Live(data) => Ok(data),
            State::Wiped => {
                tracing::error!("Read of a wiped buffer");
                Err(CryptoError::BufferWiped)
            }
        }
    }

    /// Returns the contents for in-place modification.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::BufferWiped` after the buffer has been wiped.
    pub fn as_bytes_mut(&mut self) -> Result<&mut [u8], CryptoError> {
        match &mut self.state {
            State::Live(data) => Ok(data),
            State::Wiped => {
                tracing::error!("Write to a wiped buffer");
                Err(CryptoError::BufferWiped)
            }
        }
    }

    /// Returns an owned copy of the contents.
    pub fn to_vec(&self) -> Result<Vec<u8>, CryptoError> {
        self.as_bytes().map(<[u8]>::to_vec)
    }

    /// Length of the live contents; zero once wiped.
    pub fn len(&self) -> usize {
        match &self.state {
            State::Live(data) => data.len(),
            State::Wiped => 0,
        }
    }

    /// Returns true if the buffer holds no bytes or has been wiped.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once the buffer has been wiped.
    pub fn is_wiped(&self) -> bool {
        matches!(self.state, State::Wiped)
    }

    /// Zeroes the contents and moves the buffer to the wiped state.
    ///
    /// Wiping an already wiped buffer is a no-op.
    pub fn wipe(&mut self) {
        if let State::Live(mut data) = std::mem::replace(&mut self.state, State::Wiped) {
            data.zeroize();
        }
    }
}

impl Drop for ZeroingBuffer {
    fn drop(&mut self) {
        self.wipe();
    }
}

/// Cloning copies the contents; a wiped buffer clones to a wiped buffer.
impl Clone for ZeroingBuffer {
    fn clone(&self) -> Self {
        match &self.state {
            State::Live(data) => Self::from_slice(data),
            State::Wiped => Self {
                state: State::Wiped,
            },
        }
    }
}

/// Two buffers are equal when both are live with the same contents or both are
/// wiped.
impl PartialEq for ZeroingBuffer {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Live(a), State::Live(b)) => a == b,
            (State::Wiped, State::Wiped) => true,
            _ => false,
        }
    }
}

impl Eq for ZeroingBuffer {}

// Never prints the contents.
impl fmt::Debug for ZeroingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Live(data) => write!(f, "ZeroingBuffer(live, {} bytes)", data.len()),
            State::Wiped => f.write_str("ZeroingBuffer(wiped)"),
        }
    }
}
