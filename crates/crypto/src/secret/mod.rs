// Copyright (C) Microsoft Corporation. All rights reserved.

//! Sensitive memory handling.
//!
//! Every private key variant keeps its secret components in a
//! [`ZeroingBuffer`]. The buffer is zeroed when it is wiped explicitly or when
//! it goes out of scope, and any read after that point fails with
//! `CryptoError::BufferWiped` instead of handing out stale or zeroed bytes.
mod zeroing;

pub use zeroing::*;

use super::*;
