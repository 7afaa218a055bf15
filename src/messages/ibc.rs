// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! IBC operations: outgoing transfers and received packets.

use prost::Message;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::proto;
use crate::render::RenderContext;
use crate::scale::{AmountScaler, DELEGATION_PRECISION};

use super::CoinValue;

/// ICS-20 packet payload, JSON-encoded inside the channel packet.
///
/// The amount is a string on current chains but was a bare number on older
/// ones; both shapes are accepted.
#[derive(Debug, Deserialize)]
struct FungibleTokenPacketData {
    #[serde(default)]
    denom: String,
    #[serde(default)]
    amount: serde_json::Value,
    #[serde(default)]
    sender: String,
    #[serde(default)]
    receiver: String,
}

impl FungibleTokenPacketData {
    fn amount_string(&self) -> Option<String> {
        match &self.amount {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// An outgoing cross-chain transfer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IbcTransfer {
    pub from_address: String,
    pub to_address: String,
    pub source_channel: String,
    pub amount: Option<CoinValue>,
}

impl IbcTransfer {
    pub fn is_empty(&self) -> bool {
        self.from_address.is_empty()
    }

    pub fn parse(payload: &[u8], scaler: &AmountScaler) -> Self {
        let parsed = match proto::ibc::MsgTransfer::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgTransfer");
                return Self::default();
            }
        };

        let amount = parsed.token.as_ref().and_then(|token| {
            match CoinValue::from_coin(token, scaler) {
                Ok(value) => Some(value),
                Err(e) => {
                    error!(denom = %token.denom, error = %e, "Could not parse IBC token amount");
                    None
                }
            }
        });

        info!(
            from = %parsed.sender,
            to = %parsed.receiver,
            channel = %parsed.source_channel,
            "MsgTransfer"
        );

        Self {
            from_address: parsed.sender,
            to_address: parsed.receiver,
            source_channel: parsed.source_channel,
            amount,
        }
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = ctx.markup.strong("IBC transfer");

        if let Some(amount) = &self.amount {
            out.push('\n');
            out.push_str(&ctx.coin(amount, DELEGATION_PRECISION).await);
        }

        out.push_str(&format!(
            "\n{} {}",
            ctx.markup.strong("From:"),
            ctx.wallet_with_alias(&self.from_address),
        ));
        out.push_str(&format!(
            "\n{} {}",
            ctx.markup.strong("To:"),
            ctx.wallet_with_alias(&self.to_address),
        ));
        out.push_str(&format!(
            "\n{} {}",
            ctx.markup.strong("IBC channel:"),
            self.source_channel,
        ));

        out
    }
}

/// An incoming cross-chain packet.
///
/// The signer is the relayer submitting the packet; sender and receiver come
/// from the ICS-20 payload when it decodes, and the message stays renderable
/// without them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IbcReceivePacket {
    pub signer: String,
    pub from_address: String,
    pub to_address: String,
    pub source_channel: String,
    pub destination_channel: String,
    pub amount: Option<CoinValue>,
}

impl IbcReceivePacket {
    pub fn is_empty(&self) -> bool {
        self.signer.is_empty()
    }

    pub fn parse(payload: &[u8], scaler: &AmountScaler) -> Self {
        let parsed = match proto::ibc::MsgRecvPacket::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgRecvPacket");
                return Self::default();
            }
        };

        let packet = parsed.packet.unwrap_or_default();
        let mut result = Self {
            signer: parsed.signer,
            source_channel: packet.source_channel.clone(),
            destination_channel: packet.destination_channel.clone(),
            ..Self::default()
        };

        let data: FungibleTokenPacketData = match serde_json::from_slice(&packet.data) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Could not parse MsgRecvPacket data");
                return result;
            }
        };

        result.amount = data.amount_string().and_then(|amount| {
            match CoinValue::from_parts(&amount, &data.denom, scaler) {
                Ok(value) => Some(value),
                Err(e) => {
                    error!(denom = %data.denom, error = %e, "Could not parse packet amount");
                    None
                }
            }
        });

        info!(
            signer = %result.signer,
            from = %data.sender,
            to = %data.receiver,
            denom = %data.denom,
            "MsgRecvPacket"
        );

        result.from_address = data.sender;
        result.to_address = data.receiver;
        result
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = ctx.markup.strong("IBC receive packet");

        out.push_str(&format!(
            "\n{} {}",
            ctx.markup.strong("Signer:"),
            ctx.markup.link(&ctx.links.account(&self.signer), &self.signer),
        ));

        if let Some(amount) = &self.amount {
            out.push('\n');
            out.push_str(&ctx.coin(amount, DELEGATION_PRECISION).await);
        }

        if !self.from_address.is_empty() {
            out.push_str(&format!(
                "\n{} {}",
                ctx.markup.strong("From:"),
                ctx.wallet_with_alias(&self.from_address),
            ));
        }

        if !self.to_address.is_empty() {
            out.push_str(&format!(
                "\n{} {}",
                ctx.markup.strong("To:"),
                ctx.wallet_with_alias(&self.to_address),
            ));
        }

        out.push_str(&format!(
            "\n{} {} -> {}",
            ctx.markup.strong("IBC channel:"),
            self.source_channel,
            self.destination_channel,
        ));

        out
    }
}
