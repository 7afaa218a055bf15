// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Staking operations: delegate, undelegate, redelegate.

use prost::Message;
use tracing::{error, info};

use crate::proto;
use crate::render::RenderContext;
use crate::scale::{AmountScaler, DELEGATION_PRECISION};

use super::CoinValue;

fn parse_stake_amount(coin: Option<&proto::Coin>, scaler: &AmountScaler) -> Option<CoinValue> {
    let coin = coin?;
    match CoinValue::from_coin(coin, scaler) {
        Ok(value) => Some(value),
        Err(e) => {
            error!(denom = %coin.denom, error = %e, "Could not parse staking amount");
            None
        }
    }
}

async fn render_stake_amount(ctx: &RenderContext<'_>, amount: Option<&CoinValue>) -> String {
    match amount {
        Some(amount) => {
            let mut out = ctx.coin(amount, DELEGATION_PRECISION).await;
            out.push('\n');
            out
        }
        None => String::new(),
    }
}

/// A delegation to a validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Option<CoinValue>,
}

impl Delegate {
    pub fn is_empty(&self) -> bool {
        self.delegator_address.is_empty()
    }

    pub fn parse(payload: &[u8], scaler: &AmountScaler) -> Self {
        let parsed = match proto::staking::MsgDelegate::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgDelegate");
                return Self::default();
            }
        };

        info!(
            from = %parsed.delegator_address,
            to = %parsed.validator_address,
            "MsgDelegate"
        );

        Self {
            amount: parse_stake_amount(parsed.amount.as_ref(), scaler),
            delegator_address: parsed.delegator_address,
            validator_address: parsed.validator_address,
        }
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{}{} {}\n{} {}",
            ctx.markup.strong("Delegate"),
            render_stake_amount(ctx, self.amount.as_ref()).await,
            ctx.markup.strong("From:"),
            ctx.wallet_with_alias(&self.delegator_address),
            ctx.markup.strong("To:"),
            ctx.validator_with_moniker(&self.validator_address).await,
        )
    }
}

/// An undelegation from a validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Undelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Option<CoinValue>,
}

impl Undelegate {
    pub fn is_empty(&self) -> bool {
        self.delegator_address.is_empty()
    }

    pub fn parse(payload: &[u8], scaler: &AmountScaler) -> Self {
        let parsed = match proto::staking::MsgUndelegate::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgUndelegate");
                return Self::default();
            }
        };

        info!(
            from = %parsed.validator_address,
            by = %parsed.delegator_address,
            "MsgUndelegate"
        );

        Self {
            amount: parse_stake_amount(parsed.amount.as_ref(), scaler),
            delegator_address: parsed.delegator_address,
            validator_address: parsed.validator_address,
        }
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{}{} {}\n{} {}",
            ctx.markup.strong("Undelegate"),
            render_stake_amount(ctx, self.amount.as_ref()).await,
            ctx.markup.strong("From:"),
            ctx.validator_with_moniker(&self.validator_address).await,
            ctx.markup.strong("To:"),
            ctx.wallet_with_alias(&self.delegator_address),
        )
    }
}

/// A redelegation between two validators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeginRedelegate {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub amount: Option<CoinValue>,
}

impl BeginRedelegate {
    pub fn is_empty(&self) -> bool {
        self.delegator_address.is_empty()
    }

    pub fn parse(payload: &[u8], scaler: &AmountScaler) -> Self {
        let parsed = match proto::staking::MsgBeginRedelegate::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgBeginRedelegate");
                return Self::default();
            }
        };

        info!(
            by = %parsed.delegator_address,
            from = %parsed.validator_src_address,
            to = %parsed.validator_dst_address,
            "MsgBeginRedelegate"
        );

        Self {
            amount: parse_stake_amount(parsed.amount.as_ref(), scaler),
            delegator_address: parsed.delegator_address,
            validator_src_address: parsed.validator_src_address,
            validator_dst_address: parsed.validator_dst_address,
        }
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{}{} {}\n{} {}\n{} {}",
            ctx.markup.strong("Redelegate"),
            render_stake_amount(ctx, self.amount.as_ref()).await,
            ctx.markup.strong("By:"),
            ctx.wallet_with_alias(&self.delegator_address),
            ctx.markup.strong("From:"),
            ctx.validator_with_moniker(&self.validator_src_address).await,
            ctx.markup.strong("To:"),
            ctx.validator_with_moniker(&self.validator_dst_address).await,
        )
    }
}
