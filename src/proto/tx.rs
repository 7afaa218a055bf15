// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! `cosmos.tx.v1beta1` transaction envelope.

use super::Any;

/// `cosmos.tx.v1beta1.Tx`
///
/// Only the body is decoded; signer and signature info are skipped.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tx {
    #[prost(message, optional, tag = "1")]
    pub body: ::core::option::Option<TxBody>,
}

/// `cosmos.tx.v1beta1.TxBody`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxBody {
    #[prost(message, repeated, tag = "1")]
    pub messages: ::prost::alloc::vec::Vec<Any>,
    #[prost(string, tag = "2")]
    pub memo: ::prost::alloc::string::String,
}
