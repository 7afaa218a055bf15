// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! REST implementation of the enrichment gateway.
//!
//! On-chain lookups go through the node's LCD API; historical queries pin the
//! block height with the `x-cosmos-block-height` header. The exchange rate
//! comes from CoinGecko's simple-price endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, trace};
use url::Url;

use crate::errors::EnrichmentError;

use super::{DecCoin, EnrichmentGateway, ValidatorInfo};

/// Header used by LCD nodes to serve state as of a specific block.
const BLOCK_HEIGHT_HEADER: &str = "x-cosmos-block-height";

const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Per-request timeout. A hung lookup must not stall the pipeline forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Enrichment gateway speaking the chain's LCD REST API and CoinGecko.
pub struct HttpGateway {
    client: reqwest::Client,
    lcd_url: Url,
    /// CoinGecko coin id (e.g. `cosmos`); `None` disables the rate source.
    coingecko_id: Option<String>,
}

impl HttpGateway {
    /// Create a gateway against `lcd_url`, with an optional CoinGecko coin id
    /// for the exchange-rate source.
    pub fn new(lcd_url: Url, coingecko_id: Option<String>) -> Result<Self, EnrichmentError> {
        if coingecko_id.is_none() {
            debug!("Rate currency is not set, exchange-rate lookups are disabled");
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            lcd_url,
            coingecko_id,
        })
    }

    fn lcd_endpoint(&self, path: &str) -> Result<Url, EnrichmentError> {
        self.lcd_url
            .join(path)
            .map_err(|e| EnrichmentError::Response {
                details: format!("invalid LCD path {path:?}: {e}"),
            })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        height: Option<u64>,
    ) -> Result<T, EnrichmentError> {
        let mut request = self.client.get(url);
        if let Some(height) = height {
            request = request.header(BLOCK_HEIGHT_HEADER, height.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
                body: body.chars().take(256).collect(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Denomination metadata registered on-chain, used once at startup to
    /// resolve the display denomination and coefficient.
    pub async fn denoms_metadata(&self) -> Result<Vec<DenomMetadata>, EnrichmentError> {
        let url = self.lcd_endpoint("/cosmos/bank/v1beta1/denoms_metadata")?;
        let response: DenomsMetadataResponse = self.get_json(url, None).await?;
        Ok(response.metadatas)
    }
}

#[async_trait]
impl EnrichmentGateway for HttpGateway {
    async fn validator(&self, address: &str) -> Result<ValidatorInfo, EnrichmentError> {
        let url = self.lcd_endpoint(&format!("/cosmos/staking/v1beta1/validators/{address}"))?;
        let response: ValidatorResponse = self.get_json(url, None).await?;

        Ok(ValidatorInfo {
            address: address.to_string(),
            moniker: response.validator.description.moniker,
        })
    }

    async fn validator_commission_at_height(
        &self,
        address: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError> {
        trace!(address = %address, height = height, "Querying validator commission");

        let url = self.lcd_endpoint(&format!(
            "/cosmos/distribution/v1beta1/validators/{address}/commission"
        ))?;
        let response: CommissionResponse = self.get_json(url, Some(height)).await?;

        Ok(response
            .commission
            .commission
            .into_iter()
            .map(RawDecCoin::into_dec_coin)
            .collect())
    }

    async fn delegator_rewards_at_height(
        &self,
        validator: &str,
        delegator: &str,
        height: u64,
    ) -> Result<Vec<DecCoin>, EnrichmentError> {
        trace!(
            validator = %validator,
            delegator = %delegator,
            height = height,
            "Querying delegator rewards"
        );

        let url = self.lcd_endpoint(&format!(
            "/cosmos/distribution/v1beta1/delegators/{delegator}/rewards/{validator}"
        ))?;
        let response: RewardsResponse = self.get_json(url, Some(height)).await?;

        Ok(response
            .rewards
            .into_iter()
            .map(RawDecCoin::into_dec_coin)
            .collect())
    }

    async fn exchange_rate(&self) -> Result<f64, EnrichmentError> {
        let Some(id) = &self.coingecko_id else {
            return Err(EnrichmentError::RateSourceDisabled);
        };

        let url = Url::parse(&format!(
            "{COINGECKO_BASE_URL}/simple/price?ids={id}&vs_currencies=usd"
        ))
        .map_err(|e| EnrichmentError::Response {
            details: format!("invalid rate URL: {e}"),
        })?;

        let response: serde_json::Value = self.get_json(url, None).await?;
        response
            .get(id)
            .and_then(|coin| coin.get("usd"))
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| EnrichmentError::Response {
                details: format!("no usd rate for {id:?} in response"),
            })
    }
}

#[derive(Debug, Deserialize)]
struct ValidatorResponse {
    validator: RawValidator,
}

#[derive(Debug, Deserialize)]
struct RawValidator {
    #[serde(default)]
    description: RawDescription,
}

#[derive(Debug, Default, Deserialize)]
struct RawDescription {
    #[serde(default)]
    moniker: String,
}

#[derive(Debug, Deserialize)]
struct CommissionResponse {
    commission: RawCommission,
}

#[derive(Debug, Deserialize)]
struct RawCommission {
    #[serde(default)]
    commission: Vec<RawDecCoin>,
}

#[derive(Debug, Deserialize)]
struct RewardsResponse {
    #[serde(default)]
    rewards: Vec<RawDecCoin>,
}

#[derive(Debug, Deserialize)]
struct RawDecCoin {
    denom: String,
    amount: String,
}

impl RawDecCoin {
    fn into_dec_coin(self) -> DecCoin {
        DecCoin {
            denom: self.denom,
            amount: self.amount,
        }
    }
}

/// One entry of the chain's denomination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct DenomMetadata {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub denom_units: Vec<DenomUnit>,
}

/// A single denomination unit with its exponent relative to the base unit.
#[derive(Debug, Clone, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    #[serde(default)]
    pub exponent: u32,
}

#[derive(Debug, Deserialize)]
struct DenomsMetadataResponse {
    #[serde(default)]
    metadatas: Vec<DenomMetadata>,
}
