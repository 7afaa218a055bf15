// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Distribution operations: withdraw-address changes, reward and commission
//! withdrawals.
//!
//! Withdrawal operations carry no amount on the wire; the withdrawn balance
//! is recovered at render time by querying the block immediately preceding
//! the withdrawal. The on-chain event is a balance snapshot, not a flow, so
//! the pre-withdrawal height is the one that holds the amount. The `- 1` in
//! the render paths must stay exactly as is: changing it silently changes
//! every reported amount.

use prost::Message;
use tracing::{error, info};

use crate::proto;
use crate::render::RenderContext;

/// A change of reward withdrawal address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetWithdrawAddress {
    pub delegator_address: String,
    pub withdraw_address: String,
}

impl SetWithdrawAddress {
    pub fn is_empty(&self) -> bool {
        self.delegator_address.is_empty()
    }

    pub fn parse(payload: &[u8]) -> Self {
        let parsed = match proto::distribution::MsgSetWithdrawAddress::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgSetWithdrawAddress");
                return Self::default();
            }
        };

        info!(
            by = %parsed.delegator_address,
            withdraw_address = %parsed.withdraw_address,
            "MsgSetWithdrawAddress"
        );

        Self {
            delegator_address: parsed.delegator_address,
            withdraw_address: parsed.withdraw_address,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{} {}\n{} {}",
            ctx.markup.strong("Set withdraw address"),
            ctx.markup.strong("By:"),
            ctx.markup
                .link(&ctx.links.account(&self.delegator_address), &self.delegator_address),
            ctx.markup.strong("New withdraw address:"),
            ctx.wallet_with_alias(&self.withdraw_address),
        )
    }
}

/// A delegation reward withdrawal at a known block height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithdrawDelegatorReward {
    pub delegator_address: String,
    pub validator_address: String,
    /// Height of the block containing the withdrawal
    pub height: u64,
}

impl WithdrawDelegatorReward {
    pub fn is_empty(&self) -> bool {
        self.validator_address.is_empty()
    }

    pub fn parse(payload: &[u8], height: u64) -> Self {
        let parsed = match proto::distribution::MsgWithdrawDelegatorReward::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgWithdrawDelegatorReward");
                return Self::default();
            }
        };

        info!(
            from = %parsed.validator_address,
            to = %parsed.delegator_address,
            "MsgWithdrawDelegatorReward"
        );

        Self {
            delegator_address: parsed.delegator_address,
            validator_address: parsed.validator_address,
            height,
        }
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{}{} {}\n{} {}",
            ctx.markup.strong("Withdraw rewards"),
            ctx.rewards_at_height(
                &self.validator_address,
                &self.delegator_address,
                self.height.saturating_sub(1),
            )
            .await,
            ctx.markup.strong("From:"),
            ctx.validator_with_moniker(&self.validator_address).await,
            ctx.markup.strong("To:"),
            ctx.wallet_with_alias(&self.delegator_address),
        )
    }
}

/// A validator commission withdrawal at a known block height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithdrawValidatorCommission {
    pub validator_address: String,
    /// Height of the block containing the withdrawal
    pub height: u64,
}

impl WithdrawValidatorCommission {
    pub fn is_empty(&self) -> bool {
        self.validator_address.is_empty()
    }

    pub fn parse(payload: &[u8], height: u64) -> Self {
        let parsed = match proto::distribution::MsgWithdrawValidatorCommission::decode(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!(error = %e, "Could not parse MsgWithdrawValidatorCommission");
                return Self::default();
            }
        };

        info!(address = %parsed.validator_address, "MsgWithdrawValidatorCommission");

        Self {
            validator_address: parsed.validator_address,
            height,
        }
    }

    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        format!(
            "{}\n{}{} {}",
            ctx.markup.strong("Withdraw validator commission"),
            ctx.commission_at_height(&self.validator_address, self.height.saturating_sub(1))
                .await,
            ctx.markup.strong("Validator:"),
            ctx.validator_with_moniker(&self.validator_address).await,
        )
    }
}
