// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Memoization layer over the enrichment gateway.
//!
//! Two independent caches with different lifetimes:
//!
//! - **Validator cache**: one generation per report cycle. The pipeline clears
//!   it after every delivery attempt so validator metadata never leaks across
//!   blocks. Failed lookups are not cached and are retried on next access.
//! - **Exchange-rate cache**: a single rate with a fixed freshness window,
//!   refreshed lazily on read. Never cleared per-event.
//!
//! Historical commission and reward queries pass straight through to the
//! gateway; balance snapshots are height-specific and must not be memoized.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::trace;

use crate::errors::EnrichmentError;

use super::{DecCoin, EnrichmentGateway, ValidatorInfo};

/// How long a fetched exchange rate stays fresh.
pub const RATE_FRESHNESS_WINDOW: Duration = Duration::from_secs(10 * 60);

struct RateSlot {
    value: f64,
    fetched_at: Instant,
}

/// Caching wrapper around an [`EnrichmentGateway`].
pub struct EnrichmentCache {
    gateway: Arc<dyn EnrichmentGateway>,
    validators: Mutex<HashMap<String, ValidatorInfo>>,
    rate: Mutex<Option<RateSlot>>,
    rate_window: Duration,
}

impl EnrichmentCache {
    /// Wrap `gateway` with the default rate freshness window.
    pub fn new(gateway: Arc<dyn EnrichmentGateway>) -> Self {
        Self::with_rate_window(gateway, RATE_FRESHNESS_WINDOW)
    }

    /// Wrap `gateway` with a custom rate freshness window.
    pub fn with_rate_window(gateway: Arc<dyn EnrichmentGateway>, rate_window: Duration) -> Self {
        Self {
            gateway,
            validators: Mutex::new(HashMap::new()),
            rate: Mutex::new(None),
            rate_window,
        }
    }

    /// Look up a validator, hitting the gateway at most once per address per
    /// cache generation.
    ///
    /// A failed lookup is not cached: the next access retries, and the error
    /// propagates so the caller can render the address without its moniker.
    pub async fn validator(&self, address: &str) -> Result<ValidatorInfo, EnrichmentError> {
        let mut validators = self.validators.lock().await;

        if let Some(info) = validators.get(address) {
            trace!(address = %address, "Validator served from cache");
            return Ok(info.clone());
        }

        trace!(address = %address, "Validator not cached, querying gateway");
        let info = self.gateway.validator(address).await?;
        validators.insert(address.to_string(), info.clone());
        Ok(info)
    }

    /// Drop the validator cache generation.
    ///
    /// Called by the pipeline after each delivery attempt, successful or not.
    pub async fn clear_generation(&self) {
        trace!("Clearing validator cache generation");
        self.validators.lock().await.clear();
    }

    /// The fiat exchange rate, served from cache while younger than the
    /// freshness window, otherwise refreshed with exactly one gateway call.
    ///
    /// A refresh failure propagates; callers degrade by omitting the fiat
    /// annotation rather than failing the report.
    pub async fn rate(&self) -> Result<f64, EnrichmentError> {
        let mut slot = self.rate.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.fetched_at.elapsed() < self.rate_window {
                trace!("Exchange rate served from cache");
                return Ok(cached.value);
            }
        }

        let value = self.gateway.exchange_rate().await?;
        *slot = Some(RateSlot {
            value,
            fetched_at: Instant::now(),
        });
        Ok(value)
    }

    /// Commission balance of `address` as of `height`, uncached.
    pub async fn validator_commission_at_height(
        &self,
        address: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError> {
        self.gateway
            .validator_commission_at_height(address, height)
            .await
    }

    /// Reward balance of `delegator` with `validator` as of `height`,
    /// uncached.
    pub async fn delegator_rewards_at_height(
        &self,
        validator: &str,
        delegator: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError> {
        self.gateway
            .delegator_rewards_at_height(validator, delegator, height)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct CountingGateway {
        validator_calls: AtomicUsize,
        rate_calls: AtomicUsize,
        fail_validator: bool,
    }

    #[async_trait]
    impl EnrichmentGateway for CountingGateway {
        async fn validator(&self, address: &str) -> Result<ValidatorInfo, EnrichmentError> {
            self.validator_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_validator {
                return Err(EnrichmentError::Response {
                    details: "down".into(),
                });
            }
            Ok(ValidatorInfo {
                address: address.to_string(),
                moniker: "testvalidator".to_string(),
            })
        }

        async fn validator_commission_at_height(
            &self,
            _address: &str,
            _height: u64,
        ) -> Result<Vec<DecCoin>, EnrichmentError> {
            Ok(vec![])
        }

        async fn delegator_rewards_at_height(
            &self,
            _validator: &str,
            _delegator: &str,
            _height: u64,
        ) -> Result<Vec<DecCoin>, EnrichmentError> {
            Ok(vec![])
        }

        async fn exchange_rate(&self) -> Result<f64, EnrichmentError> {
            self.rate_calls.fetch_add(1, Ordering::SeqCst);
            Ok(12.5)
        }
    }

    #[tokio::test]
    async fn test_validator_cached_within_generation() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = EnrichmentCache::new(gateway.clone());

        for _ in 0..5 {
            cache.validator("cosmosvaloper1xyz").await.unwrap();
        }

        assert_eq!(gateway.validator_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_validator_requeried_after_clear() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = EnrichmentCache::new(gateway.clone());

        for _ in 0..3 {
            cache.validator("cosmosvaloper1xyz").await.unwrap();
            cache.clear_generation().await;
        }

        assert_eq!(gateway.validator_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failed_validator_lookup_not_cached() {
        let gateway = Arc::new(CountingGateway {
            fail_validator: true,
            ..Default::default()
        });
        let cache = EnrichmentCache::new(gateway.clone());

        assert!(cache.validator("cosmosvaloper1xyz").await.is_err());
        assert!(cache.validator("cosmosvaloper1xyz").await.is_err());

        assert_eq!(gateway.validator_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_rate_served_from_cache_within_window() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = EnrichmentCache::new(gateway.clone());

        assert_eq!(cache.rate().await.unwrap(), 12.5);
        assert_eq!(cache.rate().await.unwrap(), 12.5);

        assert_eq!(gateway.rate_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_refreshed_when_stale() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = EnrichmentCache::with_rate_window(gateway.clone(), Duration::ZERO);

        cache.rate().await.unwrap();
        cache.rate().await.unwrap();

        assert_eq!(gateway.rate_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_rate_survives_generation_clear() {
        let gateway = Arc::new(CountingGateway::default());
        let cache = EnrichmentCache::new(gateway.clone());

        cache.rate().await.unwrap();
        cache.clear_generation().await;
        cache.rate().await.unwrap();

        assert_eq!(gateway.rate_calls.load(Ordering::SeqCst), 1);
    }
}
