// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bank transfers.

use prost::Message;
use tracing::{error, info};

use crate::proto;
use crate::render::RenderContext;
use crate::scale::{AmountScaler, DELEGATION_PRECISION};

use super::CoinValue;

/// A `MsgSend` transfer between two accounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transfer {
    pub from_address: String,
    pub to_address: String,
    pub amounts: Vec<CoinValue>,
}

impl Transfer {
    pub fn is_empty(&self) -> bool {
        self.from_address.is_empty()
    }

    pub fn parse(payload: &[u8], scaler: &AmountScaler) -> Self {
        let parsed = match proto::bank::MsgSend::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgSend");
                return Self::default();
            }
        };

        let amounts = parsed
            .amount
            .iter()
            .filter_map(|coin| match CoinValue::from_coin(coin, scaler) {
                Ok(value) => Some(value),
                Err(e) => {
                    error!(denom = %coin.denom, error = %e, "Could not parse transfer amount");
                    None
                }
            })
            .collect();

        info!(
            from = %parsed.from_address,
            to = %parsed.to_address,
            "MsgSend"
        );

        Self {
            from_address: parsed.from_address,
            to_address: parsed.to_address,
            amounts,
        }
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = ctx.markup.strong("Transfer");

        for amount in &self.amounts {
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

        out
    }
}
