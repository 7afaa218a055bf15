// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end pipeline tests: dedup semantics, historical-balance heights,
//! and delivery behavior, exercised against mock collaborators.

mod helpers;

use std::sync::Arc;

use prost::Message;

use chainherald::aliases::AliasDirectory;
use chainherald::dedup::Deduplicator;
use chainherald::enrichment::{DecCoin, EnrichmentCache};
use chainherald::pipeline::Pipeline;
use chainherald::render::ExplorerLinks;
use chainherald::reporters::Reporter;
use chainherald::scale::AmountScaler;
use chainherald::source::TxEvent;
use chainherald::{dispatch, proto};

use helpers::{CollectingReporter, FailingReporter, MockGateway};

fn scaler() -> AmountScaler {
    AmountScaler::new("atom", "uatom", 1_000_000.0)
}

fn tx_event(height: u64, operations: Vec<proto::Any>) -> TxEvent {
    let raw = proto::tx::Tx {
        body: Some(proto::tx::TxBody {
            messages: operations,
            memo: String::new(),
        }),
    }
    .encode_to_vec();
    TxEvent { height, raw }
}

fn send_operation(from: &str, to: &str, amount: &str, denom: &str) -> proto::Any {
    let msg = proto::bank::MsgSend {
        from_address: from.to_string(),
        to_address: to.to_string(),
        amount: vec![proto::Coin {
            denom: denom.to_string(),
            amount: amount.to_string(),
        }],
    };
    proto::Any {
        type_url: dispatch::type_url::MSG_SEND.to_string(),
        value: msg.encode_to_vec(),
    }
}

struct Fixture {
    gateway: Arc<MockGateway>,
    reporter: Arc<CollectingReporter>,
    pipeline: Pipeline,
}

fn fixture_with(gateway: MockGateway, aliases: AliasDirectory) -> Fixture {
    let gateway = Arc::new(gateway);
    let reporter = Arc::new(CollectingReporter::new());

    let pipeline = Pipeline::new(
        scaler(),
        Deduplicator::unbounded(),
        EnrichmentCache::new(gateway.clone()),
        Arc::new(aliases),
        ExplorerLinks::new("cosmos"),
        vec![reporter.clone() as Arc<dyn Reporter>],
    );

    Fixture {
        gateway,
        reporter,
        pipeline,
    }
}

fn fixture() -> Fixture {
    fixture_with(MockGateway::new(), AliasDirectory::disabled())
}

#[tokio::test]
async fn test_duplicate_transactions_deliver_once() {
    let mut fx = fixture();
    let event = tx_event(100, vec![send_operation("cosmos1aaa", "cosmos1bbb", "1", "uatom")]);

    fx.pipeline.process(&event).await;
    fx.pipeline.process(&event).await;

    assert_eq!(fx.reporter.sent().len(), 1, "duplicate hash must not re-deliver");
}

#[tokio::test]
async fn test_transfer_scenario_renders_scaled_amount_and_alias() {
    let alias_file = tempfile::NamedTempFile::new().unwrap();
    let aliases = AliasDirectory::load(alias_file.path()).unwrap();
    aliases.set("cosmos1recipient", "alice");

    let mut fx = fixture_with(MockGateway::new(), aliases);
    let event = tx_event(
        100,
        vec![send_operation(
            "cosmos1sender",
            "cosmos1recipient",
            "1000000",
            "uatom",
        )],
    );

    fx.pipeline.process(&event).await;

    let sent = fx.reporter.sent();
    assert_eq!(sent.len(), 1);
    let text = &sent[0];

    assert!(text.contains("1.00 atom"), "scaled amount missing: {text}");
    assert!(
        text.contains("https://mintscan.io/cosmos/account/cosmos1sender"),
        "sender link missing: {text}"
    );
    assert!(
        text.contains("https://mintscan.io/cosmos/account/cosmos1recipient"),
        "recipient link missing: {text}"
    );
    assert_eq!(
        text.matches("alice").count(),
        1,
        "alias annotation must appear exactly once: {text}"
    );
}

#[tokio::test]
async fn test_commission_withdrawal_queries_preceding_block() {
    let gateway = MockGateway::new()
        .with_moniker("cosmosvaloper1xyz", "herald-one")
        .with_commission(vec![DecCoin {
            denom: "uatom".to_string(),
            amount: "123456.789".to_string(),
        }]);
    let mut fx = fixture_with(gateway, AliasDirectory::disabled());

    let msg = proto::distribution::MsgWithdrawValidatorCommission {
        validator_address: "cosmosvaloper1xyz".to_string(),
    };
    let event = tx_event(
        1000,
        vec![proto::Any {
            type_url: dispatch::type_url::MSG_WITHDRAW_VALIDATOR_COMMISSION.to_string(),
            value: msg.encode_to_vec(),
        }],
    );

    fx.pipeline.process(&event).await;

    assert_eq!(
        fx.gateway.commission_heights(),
        vec![999],
        "commission must be queried at the block preceding the withdrawal"
    );
    assert_eq!(fx.reporter.sent().len(), 1);
}

#[tokio::test]
async fn test_reward_withdrawal_queries_preceding_block() {
    let gateway = MockGateway::new()
        .with_moniker("cosmosvaloper1xyz", "herald-one")
        .with_rewards(vec![DecCoin {
            denom: "uatom".to_string(),
            amount: "1500000".to_string(),
        }]);
    let mut fx = fixture_with(gateway, AliasDirectory::disabled());

    let msg = proto::distribution::MsgWithdrawDelegatorReward {
        delegator_address: "cosmos1xyz".to_string(),
        validator_address: "cosmosvaloper1xyz".to_string(),
    };
    let event = tx_event(
        500,
        vec![proto::Any {
            type_url: dispatch::type_url::MSG_WITHDRAW_DELEGATOR_REWARD.to_string(),
            value: msg.encode_to_vec(),
        }],
    );

    fx.pipeline.process(&event).await;

    assert_eq!(fx.gateway.reward_heights(), vec![499]);

    let sent = fx.reporter.sent();
    assert!(
        sent[0].contains("1.500000 atom"),
        "reward amount must use 6 decimal places: {}",
        sent[0]
    );
}

#[tokio::test]
async fn test_unknown_operations_produce_no_delivery() {
    let mut fx = fixture();
    let event = tx_event(
        100,
        vec![proto::Any {
            type_url: "/cosmos.authz.v1beta1.MsgExec".to_string(),
            value: vec![],
        }],
    );

    fx.pipeline.process(&event).await;

    assert!(fx.reporter.sent().is_empty());
}

#[tokio::test]
async fn test_undecodable_transaction_is_not_retried() {
    let mut fx = fixture();
    let event = TxEvent {
        height: 100,
        raw: vec![0xff, 0xff, 0xff, 0x01],
    };

    fx.pipeline.process(&event).await;
    fx.pipeline.process(&event).await;

    assert!(fx.reporter.sent().is_empty());
}

#[tokio::test]
async fn test_failed_delivery_commits_the_hash_and_reaches_other_channels() {
    let gateway = Arc::new(MockGateway::new());
    let failing = Arc::new(FailingReporter::default());
    let collecting = Arc::new(CollectingReporter::new());

    let mut pipeline = Pipeline::new(
        scaler(),
        Deduplicator::unbounded(),
        EnrichmentCache::new(gateway),
        Arc::new(AliasDirectory::disabled()),
        ExplorerLinks::new("cosmos"),
        vec![
            failing.clone() as Arc<dyn Reporter>,
            collecting.clone() as Arc<dyn Reporter>,
        ],
    );

    let event = tx_event(100, vec![send_operation("cosmos1aaa", "cosmos1bbb", "1", "uatom")]);
    pipeline.process(&event).await;
    pipeline.process(&event).await;

    assert_eq!(
        failing.attempts.load(std::sync::atomic::Ordering::SeqCst),
        1,
        "failed delivery must not be retried"
    );
    assert_eq!(
        collecting.sent().len(),
        1,
        "a failing channel must not block the others"
    );
}

#[tokio::test]
async fn test_validator_cache_generation_per_event() {
    let gateway = MockGateway::new().with_moniker("cosmosvaloper1xyz", "herald-one");
    let mut fx = fixture_with(gateway, AliasDirectory::disabled());

    let delegate = proto::staking::MsgDelegate {
        delegator_address: "cosmos1xyz".to_string(),
        validator_address: "cosmosvaloper1xyz".to_string(),
        amount: None,
    };

    // Two delegations to the same validator in one transaction: one lookup.
    let op = proto::Any {
        type_url: dispatch::type_url::MSG_DELEGATE.to_string(),
        value: delegate.encode_to_vec(),
    };
    let event = tx_event(100, vec![op.clone(), op.clone()]);
    fx.pipeline.process(&event).await;

    assert_eq!(
        fx.gateway
            .validator_calls
            .load(std::sync::atomic::Ordering::SeqCst),
        1
    );

    // A second event re-queries: the generation was cleared.
    let event2 = tx_event(101, vec![op]);
    fx.pipeline.process(&event2).await;

    assert_eq!(
        fx.gateway
            .validator_calls
            .load(std::sync::atomic::Ordering::SeqCst),
        2
    );
}
