// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! On-chain and off-chain enrichment lookups.
//!
//! This module provides a trait-based gateway for the auxiliary data that
//! turns a raw report into a readable one: validator metadata, historical
//! commission and reward balances, and the fiat exchange rate.
//!
//! # Architecture
//!
//! - [`EnrichmentGateway`] is the narrow interface the pipeline consumes. The
//!   production implementation ([`HttpGateway`]) speaks the chain's REST API
//!   and CoinGecko; tests inject mocks.
//! - [`EnrichmentCache`] wraps a gateway with per-report-cycle memoization of
//!   validator lookups and a time-windowed exchange-rate cache.
//!
//! Historical balance queries are height-pinned: reward and commission
//! withdrawal events are balance snapshots, so the withdrawn amount is the
//! balance at the block immediately preceding the withdrawal.

use async_trait::async_trait;

use crate::errors::EnrichmentError;

pub mod cache;
pub mod http;

pub use cache::EnrichmentCache;
pub use http::HttpGateway;

/// Validator metadata as known on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorInfo {
    /// Operator address (`...valoper...`)
    pub address: String,
    /// Human-readable moniker from the validator description
    pub moniker: String,
}

/// A decimal coin balance.
///
/// Historical balances arrive as decimal strings in base units; parsing to a
/// number is deferred to the renderer so a single malformed coin degrades
/// only its own line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecCoin {
    pub denom: String,
    pub amount: String,
}

/// External lookups used to enrich reports.
///
/// Implementations own request construction only; caching and degradation
/// policy live in [`EnrichmentCache`] and the rendering layer.
#[async_trait]
pub trait EnrichmentGateway: Send + Sync {
    /// Look up a validator by operator address.
    async fn validator(&self, address: &str) -> Result<ValidatorInfo, EnrichmentError>;

    /// Outstanding commission of `address` as of `height`.
    async fn validator_commission_at_height(
        &self,
        address: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError>;

    /// Accumulated delegation rewards of `delegator` with `validator` as of
    /// `height`.
    async fn delegator_rewards_at_height(
        &self,
        validator: &str,
        delegator: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError>;

    /// Current fiat exchange rate for the chain's display token.
    async fn exchange_rate(&self) -> Result<f64, EnrichmentError>;
}
