// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Operation dispatch: canonical type-URL to parser.
//!
//! An unrecognized type-URL produces no message and a warning; the rest of
//! the transaction keeps processing.

use tracing::warn;

use crate::messages::{
    BeginRedelegate, ChainMessage, Delegate, IbcReceivePacket, IbcTransfer, SetWithdrawAddress,
    SubmitProposal, Transfer, Undelegate, Vote, WithdrawDelegatorReward,
    WithdrawValidatorCommission,
};
use crate::scale::AmountScaler;

/// Canonical type-URLs of the supported operation kinds.
pub mod type_url {
    pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
    pub const MSG_VOTE: &str = "/cosmos.gov.v1beta1.MsgVote";
    pub const MSG_SUBMIT_PROPOSAL: &str = "/cosmos.gov.v1beta1.MsgSubmitProposal";
    pub const MSG_DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";
    pub const MSG_UNDELEGATE: &str = "/cosmos.staking.v1beta1.MsgUndelegate";
    pub const MSG_BEGIN_REDELEGATE: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
    pub const MSG_SET_WITHDRAW_ADDRESS: &str =
        "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress";
    pub const MSG_WITHDRAW_DELEGATOR_REWARD: &str =
        "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
    pub const MSG_WITHDRAW_VALIDATOR_COMMISSION: &str =
        "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission";
    pub const MSG_IBC_TRANSFER: &str = "/ibc.applications.transfer.v1.MsgTransfer";
    pub const MSG_IBC_RECV_PACKET: &str = "/ibc.core.channel.v1.MsgRecvPacket";
}

/// Parse one operation payload by its type-URL.
///
/// `height` is the containing block height, consumed by the withdrawal kinds
/// whose amounts are recovered from historical balances.
pub fn dispatch(
    type_url: &str,
    payload: &[u8],
    height: u64,
    scaler: &AmountScaler,
) -> Option<ChainMessage> {
    let message = match type_url {
        type_url::MSG_SEND => ChainMessage::Transfer(Transfer::parse(payload, scaler)),
        type_url::MSG_VOTE => ChainMessage::Vote(Vote::parse(payload)),
        type_url::MSG_SUBMIT_PROPOSAL => {
            ChainMessage::SubmitProposal(SubmitProposal::parse(payload))
        }
        type_url::MSG_DELEGATE => ChainMessage::Delegate(Delegate::parse(payload, scaler)),
        type_url::MSG_UNDELEGATE => ChainMessage::Undelegate(Undelegate::parse(payload, scaler)),
        type_url::MSG_BEGIN_REDELEGATE => {
            ChainMessage::BeginRedelegate(BeginRedelegate::parse(payload, scaler))
        }
        type_url::MSG_SET_WITHDRAW_ADDRESS => {
            ChainMessage::SetWithdrawAddress(SetWithdrawAddress::parse(payload))
        }
        type_url::MSG_WITHDRAW_DELEGATOR_REWARD => {
            ChainMessage::WithdrawDelegatorReward(WithdrawDelegatorReward::parse(payload, height))
        }
        type_url::MSG_WITHDRAW_VALIDATOR_COMMISSION => ChainMessage::WithdrawValidatorCommission(
            WithdrawValidatorCommission::parse(payload, height),
        ),
        type_url::MSG_IBC_TRANSFER => {
            ChainMessage::IbcTransfer(IbcTransfer::parse(payload, scaler))
        }
        type_url::MSG_IBC_RECV_PACKET => {
            ChainMessage::IbcReceivePacket(IbcReceivePacket::parse(payload, scaler))
        }
        unknown => {
            warn!(type_url = %unknown, "Got a message kind which is not supported");
            return None;
        }
    };

    Some(message)
}
