// Copyright (C) Microsoft Corporation. All rights reserved.

//! Test attribute that routes `tracing` output from the codec into the test
//! harness.
//!
//! `RUST_LOG` selects targets with the usual `target=level` syntax. Without it
//! the codec crate logs at `TRACE` and every other target at `WARN`.

#[cfg(test)]
extern crate self as test_with_tracing;

use std::sync::Once;

pub use test_with_tracing_macro::test;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

const CODEC_TARGET: &str = "yubikey_crypto";

fn default_targets() -> Targets {
    Targets::new()
        .with_target(CODEC_TARGET, LevelFilter::TRACE)
        .with_default(LevelFilter::WARN)
}

fn targets_from_env() -> Targets {
    match std::env::var("RUST_LOG") {
        Ok(var) => var.parse().unwrap_or_else(|err| {
            eprintln!("ignoring malformed RUST_LOG ({err}), using defaults");
            default_targets()
        }),
        Err(_) => default_targets(),
    }
}

#[doc(hidden)]
/// Installs the test subscriber once per process.
pub fn init() {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        let layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_test_writer()
            .with_thread_names(true);

        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(layer)
            .with(targets_from_env())
            .try_init();
    });
}
