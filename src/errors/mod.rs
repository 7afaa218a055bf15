// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the chainherald pipeline.
//!
//! This module provides strongly-typed errors for each stage of the pipeline.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`DecodeError`],
//!   [`EnrichmentError`], [`DeliveryError`], [`SourceError`], [`ConfigError`])
//! - **Unified error type** ([`HeraldError`]) for call sites that don't need to
//!   distinguish between error sources
//!
//! # Error policy
//!
//! The taxonomy matches the pipeline's degradation rules:
//!
//! - [`DecodeError`] — malformed operation payload: the message becomes its
//!   empty sentinel, is logged, and is excluded from the report. Never fatal.
//! - [`EnrichmentError`] — gateway or rate source unreachable: the affected
//!   rendered field (moniker, fiat annotation) is omitted. Never fatal.
//! - [`ConfigError`] — unresolvable denomination, unreachable node at startup:
//!   fatal, the process exits before the pipeline starts.
//! - [`DeliveryError`] — channel transport failure: logged per channel, no
//!   retry, other channels unaffected.
//! - [`SourceError`] — websocket drop or malformed frame: handled by the
//!   reconnect loop.
//!
//! No error in this taxonomy is allowed to crash a running pipeline; only
//! startup-time [`ConfigError`]s are fatal.

mod config;
mod decode;
mod delivery;
mod enrichment;
mod source;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use delivery::DeliveryError;
pub use enrichment::EnrichmentError;
pub use source::SourceError;

/// Unified error type for all chainherald operations.
///
/// Wraps the module-specific error types; each converts via `From` so `?`
/// propagates naturally at call sites that don't need fine-grained matching.
#[derive(Debug, thiserror::Error)]
pub enum HeraldError {
    /// Error from transaction or message decoding.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error from an enrichment lookup.
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Error from report delivery.
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Error from the event source.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Error from startup configuration.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
