// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process configuration.
//!
//! Configuration layers, lowest precedence first: built-in defaults, an
//! optional TOML config file, CLI flags. Everything resolves once at startup
//! into an immutable [`AppConfig`]; no component reads ambient globals.
//!
//! # Example config file
//!
//! ```toml
//! log_level = "info"
//! tendermint_ws = "ws://localhost:26657/websocket"
//! lcd_endpoint = "http://localhost:1317"
//! queries = ["tx.height > 1"]
//! explorer_project = "cosmos"
//! denom = "atom"
//! coingecko_id = "cosmos"
//! aliases_path = "/var/lib/chainherald/aliases.toml"
//!
//! [telegram]
//! token = "12345:secret"
//! chat_id = -100123456
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::errors::ConfigError;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tendermint_ws() -> String {
    "ws://localhost:26657/websocket".to_string()
}

fn default_lcd_endpoint() -> String {
    "http://localhost:1317".to_string()
}

fn default_queries() -> Vec<String> {
    vec!["tx.height > 1".to_string()]
}

fn default_explorer_project() -> String {
    "crypto-org".to_string()
}

fn default_set_alias_command() -> String {
    "/set-alias".to_string()
}

fn default_clear_alias_command() -> String {
    "/clear-alias".to_string()
}

fn default_list_aliases_command() -> String {
    "/list-aliases".to_string()
}

/// Telegram channel credentials and command names.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub chat_id: i64,
    #[serde(default = "default_set_alias_command")]
    pub set_alias_command: String,
    #[serde(default = "default_clear_alias_command")]
    pub clear_alias_command: String,
    #[serde(default = "default_list_aliases_command")]
    pub list_aliases_command: String,
}

impl TelegramConfig {
    /// Whether credentials are complete enough to create the reporter.
    pub fn enabled(&self) -> bool {
        !self.token.is_empty() && self.chat_id != 0
    }
}

/// Slack channel credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub channel: String,
}

impl SlackConfig {
    /// Whether credentials are complete enough to create the reporter.
    pub fn enabled(&self) -> bool {
        !self.token.is_empty() && !self.channel.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    log_level: Option<String>,
    tendermint_ws: Option<String>,
    lcd_endpoint: Option<String>,
    queries: Option<Vec<String>>,
    explorer_project: Option<String>,
    denom: Option<String>,
    base_denom: Option<String>,
    denom_coefficient: Option<f64>,
    coingecko_id: Option<String>,
    dedup_window: Option<usize>,
    aliases_path: Option<PathBuf>,
    telegram: Option<TelegramConfig>,
    slack: Option<SlackConfig>,
}

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default log level, overridable with `RUST_LOG`
    pub log_level: String,
    /// Websocket endpoint of the node's RPC
    pub tendermint_ws: String,
    /// LCD REST endpoint of the node
    pub lcd_endpoint: Url,
    /// Subscription queries
    pub queries: Vec<String>,
    /// Explorer project slug for links
    pub explorer_project: String,
    /// Display denomination; resolved from chain metadata when unset
    pub denom: Option<String>,
    /// Base denomination; resolved from chain metadata when unset
    pub base_denom: Option<String>,
    /// Base-to-display coefficient; resolved from chain metadata when unset
    pub denom_coefficient: Option<f64>,
    /// CoinGecko coin id for the fiat rate; unset disables fiat annotations
    pub coingecko_id: Option<String>,
    /// Bound the dedup set to this many recent hashes; unset keeps it
    /// unbounded for the process lifetime
    pub dedup_window: Option<usize>,
    /// Path of the alias store; unset disables aliases
    pub aliases_path: Option<PathBuf>,
    pub telegram: Option<TelegramConfig>,
    pub slack: Option<SlackConfig>,
}

impl AppConfig {
    /// Load configuration from an optional TOML file over built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let raw = match path {
            Some(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => RawConfig::default(),
        };

        let lcd_endpoint = raw
            .lcd_endpoint
            .unwrap_or_else(default_lcd_endpoint);
        let lcd_endpoint = parse_endpoint("lcd_endpoint", &lcd_endpoint)?;

        Ok(Self {
            log_level: raw.log_level.unwrap_or_else(default_log_level),
            tendermint_ws: raw.tendermint_ws.unwrap_or_else(default_tendermint_ws),
            lcd_endpoint,
            queries: raw.queries.unwrap_or_else(default_queries),
            explorer_project: raw
                .explorer_project
                .unwrap_or_else(default_explorer_project),
            denom: raw.denom,
            base_denom: raw.base_denom,
            denom_coefficient: raw.denom_coefficient,
            coingecko_id: raw.coingecko_id,
            dedup_window: raw.dedup_window,
            aliases_path: raw.aliases_path,
            telegram: raw.telegram,
            slack: raw.slack,
        })
    }

    /// Replace the LCD endpoint from a CLI override.
    pub fn set_lcd_endpoint(&mut self, value: &str) -> Result<(), ConfigError> {
        self.lcd_endpoint = parse_endpoint("lcd_endpoint", value)?;
        Ok(())
    }
}

fn parse_endpoint(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::Endpoint {
        field,
        value: value.to_string(),
        details: e.to_string(),
    })
}
