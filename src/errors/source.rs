// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the transaction event source.

/// Errors raised by the websocket event subscription.
///
/// Once the pipeline is running these are handled by the reconnect loop and
/// never propagate out of the source task.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The websocket connection failed or was closed.
    #[error("Websocket error: {0}")]
    Websocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// The subscription request was rejected by the node.
    #[error("Subscription to query {query:?} failed: {details}")]
    Subscription { query: String, details: String },

    /// An incoming frame could not be parsed as an event envelope.
    #[error("Malformed event frame: {0}")]
    Frame(#[from] serde_json::Error),
}
