// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The typed domain model for supported operation kinds.
//!
//! Each on-chain operation parses into one [`ChainMessage`] variant. Parsing
//! never fails outright: a malformed payload produces the variant's empty
//! sentinel (`is_empty()` true), which the report assembler filters out.
//! Variants are produced once at parse time and are immutable afterwards.
//!
//! Rendering is dispatched through the enum with an exhaustive match, so a
//! new kind cannot be added without wiring its renderer.

use crate::errors::DecodeError;
use crate::proto;
use crate::render::RenderContext;
use crate::scale::{AmountScaler, ScaledAmount};

mod bank;
mod distribution;
mod gov;
mod ibc;
mod staking;

pub use bank::Transfer;
pub use distribution::{SetWithdrawAddress, WithdrawDelegatorReward, WithdrawValidatorCommission};
pub use gov::{SubmitProposal, Vote};
pub use ibc::{IbcReceivePacket, IbcTransfer};
pub use staking::{BeginRedelegate, Delegate, Undelegate};

/// A coin amount classified at parse time.
///
/// Native amounts are scaled into display units; foreign denominations (e.g.
/// `ibc/...` vouchers) keep their raw value and intrinsic denom string.
#[derive(Debug, Clone, PartialEq)]
pub enum CoinValue {
    Native(ScaledAmount),
    Foreign { value: f64, denom: String },
}

impl CoinValue {
    /// Classify a wire coin against the configured native denomination.
    pub fn from_coin(coin: &proto::Coin, scaler: &AmountScaler) -> Result<Self, DecodeError> {
        Self::from_parts(&coin.amount, &coin.denom, scaler)
    }

    /// Classify an amount string and denom against the configured native
    /// denomination.
    pub fn from_parts(
        amount: &str,
        denom: &str,
        scaler: &AmountScaler,
    ) -> Result<Self, DecodeError> {
        if scaler.is_native(denom) {
            let base: u128 = amount.parse().map_err(|e| DecodeError::Numeric {
                value: amount.to_string(),
                details: format!("{e}"),
            })?;
            Ok(Self::Native(scaler.scale(base)))
        } else {
            let value: f64 = amount.parse().map_err(|e| DecodeError::Numeric {
                value: amount.to_string(),
                details: format!("{e}"),
            })?;
            Ok(Self::Foreign {
                value,
                denom: denom.to_string(),
            })
        }
    }
}

/// One parsed operation, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainMessage {
    Transfer(Transfer),
    Delegate(Delegate),
    Undelegate(Undelegate),
    BeginRedelegate(BeginRedelegate),
    Vote(Vote),
    SubmitProposal(SubmitProposal),
    SetWithdrawAddress(SetWithdrawAddress),
    WithdrawDelegatorReward(WithdrawDelegatorReward),
    WithdrawValidatorCommission(WithdrawValidatorCommission),
    IbcTransfer(IbcTransfer),
    IbcReceivePacket(IbcReceivePacket),
}

impl ChainMessage {
    /// Whether the message is its kind's empty sentinel: required fields are
    /// absent because decoding failed or the payload was structurally
    /// incomplete.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Transfer(m) => m.is_empty(),
            Self::Delegate(m) => m.is_empty(),
            Self::Undelegate(m) => m.is_empty(),
            Self::BeginRedelegate(m) => m.is_empty(),
            Self::Vote(m) => m.is_empty(),
            Self::SubmitProposal(m) => m.is_empty(),
            Self::SetWithdrawAddress(m) => m.is_empty(),
            Self::WithdrawDelegatorReward(m) => m.is_empty(),
            Self::WithdrawValidatorCommission(m) => m.is_empty(),
            Self::IbcTransfer(m) => m.is_empty(),
            Self::IbcReceivePacket(m) => m.is_empty(),
        }
    }

    /// Short kind name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "transfer",
            Self::Delegate(_) => "delegate",
            Self::Undelegate(_) => "undelegate",
            Self::BeginRedelegate(_) => "begin-redelegate",
            Self::Vote(_) => "vote",
            Self::SubmitProposal(_) => "submit-proposal",
            Self::SetWithdrawAddress(_) => "set-withdraw-address",
            Self::WithdrawDelegatorReward(_) => "withdraw-delegator-reward",
            Self::WithdrawValidatorCommission(_) => "withdraw-validator-commission",
            Self::IbcTransfer(_) => "ibc-transfer",
            Self::IbcReceivePacket(_) => "ibc-receive-packet",
        }
    }

    /// Render the message for one channel.
    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Self::Transfer(m) => m.render(ctx).await,
            Self::Delegate(m) => m.render(ctx).await,
            Self::Undelegate(m) => m.render(ctx).await,
            Self::BeginRedelegate(m) => m.render(ctx).await,
            Self::Vote(m) => m.render(ctx),
            Self::SubmitProposal(m) => m.render(ctx),
            Self::SetWithdrawAddress(m) => m.render(ctx),
            Self::WithdrawDelegatorReward(m) => m.render(ctx).await,
            Self::WithdrawValidatorCommission(m) => m.render(ctx).await,
            Self::IbcTransfer(m) => m.render(ctx).await,
            Self::IbcReceivePacket(m) => m.render(ctx).await,
        }
    }
}
