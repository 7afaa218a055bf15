// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for chainherald integration tests.
//!
//! Provides mock implementations of the enrichment gateway and reporter
//! traits to exercise the pipeline without a node or chat credentials.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chainherald::enrichment::{DecCoin, EnrichmentGateway, ValidatorInfo};
use chainherald::errors::{DeliveryError, EnrichmentError};
use chainherald::render::{HtmlMarkup, Markup};
use chainherald::reporters::Reporter;

/// Mock enrichment gateway with call counting and failure injection.
///
/// # Example
///
/// ```rust,ignore
/// let gateway = MockGateway::new()
///     .with_moniker("cosmosvaloper1xyz", "herald-one")
///     .with_rate(10.0)
///     .with_rewards(vec![DecCoin { denom: "uatom".into(), amount: "1500000".into() }]);
/// ```
#[derive(Default)]
pub struct MockGateway {
    pub validator_calls: AtomicUsize,
    pub rate_calls: AtomicUsize,
    monikers: HashMap<String, String>,
    rate: Option<f64>,
    commission: Vec<DecCoin>,
    rewards: Vec<DecCoin>,
    fail_validators: bool,
    commission_heights: Mutex<Vec<u64>>,
    reward_heights: Mutex<Vec<u64>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator moniker.
    pub fn with_moniker(mut self, address: &str, moniker: &str) -> Self {
        self.monikers
            .insert(address.to_string(), moniker.to_string());
        self
    }

    /// Serve a fixed exchange rate; without one, rate lookups fail as
    /// disabled.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Serve fixed commission coins for any historical query.
    pub fn with_commission(mut self, commission: Vec<DecCoin>) -> Self {
        self.commission = commission;
        self
    }

    /// Serve fixed reward coins for any historical query.
    pub fn with_rewards(mut self, rewards: Vec<DecCoin>) -> Self {
        self.rewards = rewards;
        self
    }

    /// Make every validator lookup fail.
    pub fn failing_validators(mut self) -> Self {
        self.fail_validators = true;
        self
    }

    /// Heights passed to commission queries, in call order.
    pub fn commission_heights(&self) -> Vec<u64> {
        self.commission_heights.lock().unwrap().clone()
    }

    /// Heights passed to reward queries, in call order.
    pub fn reward_heights(&self) -> Vec<u64> {
        self.reward_heights.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnrichmentGateway for MockGateway {
    async fn validator(&self, address: &str) -> Result<ValidatorInfo, EnrichmentError> {
        self.validator_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_validators {
            return Err(EnrichmentError::Response {
                details: "gateway down".to_string(),
            });
        }

        match self.monikers.get(address) {
            Some(moniker) => Ok(ValidatorInfo {
                address: address.to_string(),
                moniker: moniker.clone(),
            }),
            None => Err(EnrichmentError::Status {
                status: 404,
                body: "validator not found".to_string(),
            }),
        }
    }

    async fn validator_commission_at_height(
        &self,
        _address: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError> {
        self.commission_heights.lock().unwrap().push(height);
        Ok(self.commission.clone())
    }

    async fn delegator_rewards_at_height(
        &self,
        _validator: &str,
        _delegator: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError> {
        self.reward_heights.lock().unwrap().push(height);
        Ok(self.rewards.clone())
    }

    async fn exchange_rate(&self) -> Result<f64, EnrichmentError> {
        self.rate_calls.fetch_add(1, Ordering::SeqCst);
        self.rate.ok_or(EnrichmentError::RateSourceDisabled)
    }
}

/// Reporter that collects sent texts instead of delivering them.
#[derive(Default)]
pub struct CollectingReporter {
    sent: Mutex<Vec<String>>,
    markup: HtmlMarkup,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All texts sent so far, in delivery order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Reporter for CollectingReporter {
    fn name(&self) -> &'static str {
        "collecting"
    }

    fn markup(&self) -> &dyn Markup {
        &self.markup
    }

    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Reporter whose deliveries always fail.
#[derive(Default)]
pub struct FailingReporter {
    pub attempts: AtomicUsize,
    markup: HtmlMarkup,
}

#[async_trait]
impl Reporter for FailingReporter {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn markup(&self) -> &dyn Markup {
        &self.markup
    }

    async fn send(&self, _text: &str) -> Result<(), DeliveryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DeliveryError::Rejected {
            channel: "failing",
            details: "always fails".to_string(),
        })
    }
}
