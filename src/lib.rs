// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction notification pipeline for Cosmos SDK chains.
//!
//! chainherald watches a node's transaction event stream, classifies each
//! transaction's operations into a closed set of known message kinds,
//! enriches them with on-chain and off-chain context (validator monikers,
//! historical balances, the fiat exchange rate), and delivers a rendered
//! report to each configured notification channel at most once per unique
//! transaction per run.

pub mod aliases;
pub mod bootstrap;
pub mod config;
pub mod dedup;
pub mod dispatch;
pub mod enrichment;
pub mod errors;
pub mod logging;
pub mod messages;
pub mod pipeline;
pub mod proto;
pub mod render;
pub mod report;
pub mod reporters;
pub mod scale;
pub mod source;
pub mod tx;

pub(crate) mod spans;

pub use aliases::AliasDirectory;
pub use config::AppConfig;
pub use dedup::Deduplicator;
pub use enrichment::{DecCoin, EnrichmentCache, EnrichmentGateway, HttpGateway, ValidatorInfo};
pub use errors::{
    ConfigError, DecodeError, DeliveryError, EnrichmentError, HeraldError, SourceError,
};
pub use messages::{ChainMessage, CoinValue};
pub use pipeline::Pipeline;
pub use render::{ExplorerLinks, HtmlMarkup, Markup, MrkdwnMarkup, RenderContext};
pub use report::Report;
pub use reporters::Reporter;
pub use scale::{AmountScaler, ScaledAmount};
pub use source::{TxEvent, WsSubscriber};
pub use tx::TxSummary;
