// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Hand-written protobuf types for the host chain's canonical message schema.
//!
//! These are compatibility structs in the generated-prost shape, carrying only
//! the fields the pipeline reads; prost skips unknown tags, so decoding stays
//! correct against the full on-wire messages. Field numbers follow the
//! canonical Cosmos SDK and IBC schemas and must not be changed.

pub mod bank;
pub mod distribution;
pub mod gov;
pub mod ibc;
pub mod staking;
pub mod tx;

/// `cosmos.base.v1beta1.Coin`
///
/// The amount is a base-10 integer string in base units.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub amount: ::prost::alloc::string::String,
}

/// `google.protobuf.Any`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: ::prost::alloc::vec::Vec<u8>,
}
