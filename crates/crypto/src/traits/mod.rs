// Copyright (C) Microsoft Corporation. All rights reserved.

//! High-level codec operation wrappers.
//!
//! - [`Encoder`]: size-query and `Vec` encoding over any [`EncodeOp`]
//! - [`Decoder`]: decoding over any [`DecodeOp`]
mod decoder;
mod encoder;

pub use decoder::*;
pub use encoder::*;

use super::*;
