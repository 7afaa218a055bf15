// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the enrichment gateway and cache.

/// Errors raised by on-chain and off-chain enrichment lookups.
///
/// Enrichment failures degrade the specific rendered field (the validator
/// moniker, the fiat annotation) rather than failing the report. Callers are
/// expected to log at warning level and fall back to the undecorated value.
///
/// # Examples
///
/// ```rust,ignore
/// match cache.validator(&address).await {
///     Ok(info) => render_with_moniker(&info),
///     Err(e) => {
///         tracing::warn!(address = %address, error = %e, "Could not load validator info");
///         render_address_only(&address)
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    /// The HTTP request to the gateway failed outright.
    #[error("Gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("Gateway returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, truncated for logging
        body: String,
    },

    /// The gateway response did not match the expected shape.
    #[error("Unexpected gateway response: {details}")]
    Response { details: String },

    /// The exchange-rate source is not configured for this deployment.
    ///
    /// Amounts render without a fiat annotation; this is not a failure worth
    /// logging above trace level.
    #[error("Exchange-rate source is not configured")]
    RateSourceDisabled,
}
