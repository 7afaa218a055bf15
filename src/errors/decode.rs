// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transaction and message decoding.

/// Errors raised while decoding a raw transaction or one of its operations.
///
/// Decode failures are never fatal to the pipeline: a malformed operation
/// payload produces the message kind's empty sentinel and is excluded from
/// the report, while the rest of the transaction keeps processing.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The protobuf payload could not be decoded against the canonical schema.
    #[error("Failed to decode protobuf payload: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// A numeric field carried a value that could not be parsed.
    #[error("Could not parse numeric value {value:?}: {details}")]
    Numeric { value: String, details: String },
}
