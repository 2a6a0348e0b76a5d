// Copyright (C) Microsoft Corporation. All rights reserved.

//! Core codec operation traits.
//!
//! - [`EncodeOp`]: key parameters to DER bytes
//! - [`DecodeOp`]: DER bytes to key parameters
//!
//! # Buffer Patterns
//!
//! Encoding uses an optional buffer pattern:
//! - `None`: Query required buffer size
//! - `Some(buffer)`: Perform actual operation
//!
//! This lets callers hand in pre-allocated (for example pinned or locked)
//! memory for private key output.
mod encoding;

pub use encoding::*;

use super::*;
