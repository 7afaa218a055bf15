// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for startup configuration.

use std::path::PathBuf;

/// Errors raised while resolving process configuration at startup.
///
/// These are the only fatal errors in the system: the process exits before
/// entering the pipeline if configuration cannot be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be parsed as TOML.
    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configured endpoint is not a valid URL.
    #[error("Invalid {field} endpoint {value:?}: {details}")]
    Endpoint {
        field: &'static str,
        value: String,
        details: String,
    },

    /// The display denomination could not be resolved, neither from explicit
    /// configuration nor from the chain's denomination metadata.
    #[error("Could not resolve display denomination: {details}")]
    DenomUnresolvable { details: String },

    /// The node was unreachable during startup denom resolution.
    #[error("Node unreachable at startup: {0}")]
    NodeUnreachable(#[from] reqwest::Error),
}
