// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rendering tests: markup dialects, enrichment decoration, and graceful
//! degradation when lookups fail.

mod helpers;

use std::sync::Arc;

use chainherald::aliases::AliasDirectory;
use chainherald::enrichment::EnrichmentCache;
use chainherald::messages::{ChainMessage, CoinValue, Delegate};
use chainherald::render::{ExplorerLinks, HtmlMarkup, Markup, MrkdwnMarkup, RenderContext};
use chainherald::scale::AmountScaler;
use chainherald::tx::TxSummary;

use helpers::MockGateway;

struct RenderFixture {
    cache: EnrichmentCache,
    aliases: AliasDirectory,
    links: ExplorerLinks,
    scaler: AmountScaler,
}

impl RenderFixture {
    fn new(gateway: MockGateway) -> Self {
        Self {
            cache: EnrichmentCache::new(Arc::new(gateway)),
            aliases: AliasDirectory::disabled(),
            links: ExplorerLinks::new("cosmos"),
            scaler: AmountScaler::new("atom", "uatom", 1_000_000.0),
        }
    }

    fn context<'a>(&'a self, markup: &'a dyn Markup) -> RenderContext<'a> {
        RenderContext {
            markup,
            cache: &self.cache,
            aliases: &self.aliases,
            links: &self.links,
            scaler: &self.scaler,
        }
    }
}

fn delegate_message() -> ChainMessage {
    ChainMessage::Delegate(Delegate {
        delegator_address: "cosmos1xyz".to_string(),
        validator_address: "cosmosvaloper1xyz".to_string(),
        amount: Some(CoinValue::Native(chainherald::scale::ScaledAmount {
            value: 2.5,
            denom: "atom".to_string(),
        })),
    })
}

#[tokio::test]
async fn test_fiat_annotation_uses_three_decimals() {
    let fx = RenderFixture::new(MockGateway::new().with_rate(10.0));
    let ctx = fx.context(&HtmlMarkup);

    let rendered = ctx.amount_with_fiat(1.0, "atom", 2).await;
    assert_eq!(rendered, "<code>1.00 atom ($10.000)</code>");
}

#[tokio::test]
async fn test_rate_failure_omits_fiat_annotation() {
    let fx = RenderFixture::new(MockGateway::new());
    let ctx = fx.context(&HtmlMarkup);

    let rendered = ctx.amount_with_fiat(1.0, "atom", 2).await;
    assert_eq!(rendered, "<code>1.00 atom</code>");
}

#[tokio::test]
async fn test_thousands_separator_in_rendered_amounts() {
    let fx = RenderFixture::new(MockGateway::new());
    let ctx = fx.context(&HtmlMarkup);

    let rendered = ctx.amount_formatted(1_234_567.8, "atom", 2);
    assert_eq!(rendered, "<code>1,234,567.80 atom</code>");
}

#[tokio::test]
async fn test_validator_moniker_annotation() {
    let fx = RenderFixture::new(MockGateway::new().with_moniker("cosmosvaloper1xyz", "herald-one"));
    let ctx = fx.context(&HtmlMarkup);

    let rendered = ctx.validator_with_moniker("cosmosvaloper1xyz").await;
    assert!(rendered.contains("https://mintscan.io/cosmos/validators/cosmosvaloper1xyz"));
    assert!(rendered.contains("(<code>herald-one</code>)"));
}

#[tokio::test]
async fn test_failed_moniker_lookup_degrades_to_bare_link() {
    let fx = RenderFixture::new(MockGateway::new().failing_validators());
    let ctx = fx.context(&HtmlMarkup);

    let rendered = ctx.validator_with_moniker("cosmosvaloper1xyz").await;
    assert!(rendered.contains("cosmosvaloper1xyz"));
    assert!(!rendered.contains('('), "no moniker annotation on failure: {rendered}");
}

#[tokio::test]
async fn test_header_memo_inline_vs_block() {
    let fx = RenderFixture::new(MockGateway::new());
    let ctx = fx.context(&HtmlMarkup);

    let single = TxSummary {
        hash: "ABCDEF0123456789".to_string(),
        height: 42,
        memo: "gm".to_string(),
    };
    let rendered = single.render(&ctx);
    assert!(rendered.contains("<strong>Memo:</strong> <code>gm</code>"));
    assert!(rendered.contains(">ABCDEF01</a>"), "hash must be shortened: {rendered}");

    let multi = TxSummary {
        memo: "line one\nline two".to_string(),
        ..single
    };
    let rendered = multi.render(&ctx);
    assert!(rendered.contains("<pre>line one\nline two</pre>"));
}

#[tokio::test]
async fn test_same_message_renders_in_both_dialects() {
    let fx = RenderFixture::new(MockGateway::new().with_moniker("cosmosvaloper1xyz", "herald-one"));
    let message = delegate_message();

    let html = message.render(&fx.context(&HtmlMarkup)).await;
    assert!(html.contains("<strong>Delegate</strong>"));
    assert!(html.contains("<code>2.50 atom</code>"));

    let mrkdwn = message.render(&fx.context(&MrkdwnMarkup)).await;
    assert!(mrkdwn.contains("*Delegate*"));
    assert!(mrkdwn.contains("`2.50 atom`"));
    assert!(mrkdwn.contains("<https://mintscan.io/cosmos/validators/cosmosvaloper1xyz|cosmosvaloper1xyz>"));
}

#[tokio::test]
async fn test_alias_annotation_independent_per_address() {
    let alias_file = tempfile::NamedTempFile::new().unwrap();
    let aliases = AliasDirectory::load(alias_file.path()).unwrap();
    aliases.set("cosmos1bbb", "bob");

    let fx = RenderFixture {
        aliases,
        ..RenderFixture::new(MockGateway::new())
    };
    let ctx = fx.context(&HtmlMarkup);

    let plain = ctx.wallet_with_alias("cosmos1aaa");
    assert!(!plain.contains('('));

    let labeled = ctx.wallet_with_alias("cosmos1bbb");
    assert!(labeled.ends_with("(<code>bob</code>)"));
}
