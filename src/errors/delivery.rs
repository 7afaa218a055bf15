// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for report delivery.

/// Errors raised while delivering a rendered report to a notification channel.
///
/// A delivery failure is logged for the affected channel and never retried;
/// it does not block delivery to other channels, and the transaction is still
/// committed to the dedup set afterwards.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The transport request failed.
    #[error("Transport request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The channel API accepted the request but reported an error.
    #[error("Channel {channel} rejected the report: {details}")]
    Rejected {
        /// Reporter name
        channel: &'static str,
        /// Error description returned by the channel API
        details: String,
    },
}
