// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Structured logging setup.
//!
//! Initializes the `tracing` subscriber with environment-based filtering:
//! `RUST_LOG` overrides the configured default level when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call exactly once, early in `main()`; subsequent calls panic.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
