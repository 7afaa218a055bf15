// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! IBC transfer and channel messages.

use super::Coin;

/// `ibc.applications.transfer.v1.MsgTransfer`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgTransfer {
    #[prost(string, tag = "1")]
    pub source_port: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub source_channel: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub token: ::core::option::Option<Coin>,
    #[prost(string, tag = "4")]
    pub sender: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub receiver: ::prost::alloc::string::String,
}

/// `ibc.core.channel.v1.MsgRecvPacket`
///
/// Proofs are skipped; only the packet and signer are read.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgRecvPacket {
    #[prost(message, optional, tag = "1")]
    pub packet: ::core::option::Option<Packet>,
    #[prost(string, tag = "4")]
    pub signer: ::prost::alloc::string::String,
}

/// `ibc.core.channel.v1.Packet`
///
/// For ICS-20 transfers the data field is JSON-encoded
/// `FungibleTokenPacketData`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Packet {
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    #[prost(string, tag = "2")]
    pub source_port: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub source_channel: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub destination_port: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub destination_channel: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "6")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}
