// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use chainherald::config::AppConfig;
use chainherald::errors::ConfigError;
use chainherald::{bootstrap, logging};

/// Notifies about new transactions on a Cosmos SDK chain.
#[derive(Debug, Parser)]
#[command(name = "chainherald", version, about)]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logging level
    #[arg(long)]
    log_level: Option<String>,

    /// Display denomination (e.g. atom)
    #[arg(long)]
    denom: Option<String>,

    /// Base denomination (e.g. uatom)
    #[arg(long)]
    base_denom: Option<String>,

    /// Base-to-display coefficient (e.g. 1000000)
    #[arg(long)]
    denom_coefficient: Option<f64>,

    /// Websocket endpoint of the node's RPC
    #[arg(long)]
    tendermint_ws: Option<String>,

    /// LCD REST endpoint of the node
    #[arg(long)]
    lcd: Option<String>,

    /// Explorer project slug used in links
    #[arg(long)]
    explorer_project: Option<String>,

    /// Tx filter to subscribe to; may repeat
    #[arg(long = "query")]
    queries: Vec<String>,

    /// CoinGecko coin id for fiat annotations
    #[arg(long)]
    coingecko_id: Option<String>,

    /// Path of the alias store
    #[arg(long)]
    aliases_path: Option<PathBuf>,

    /// Bound the dedup set to this many recent hashes
    #[arg(long)]
    dedup_window: Option<usize>,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        if self.denom.is_some() {
            config.denom = self.denom;
        }
        if self.base_denom.is_some() {
            config.base_denom = self.base_denom;
        }
        if self.denom_coefficient.is_some() {
            config.denom_coefficient = self.denom_coefficient;
        }
        if let Some(tendermint_ws) = self.tendermint_ws {
            config.tendermint_ws = tendermint_ws;
        }
        if let Some(lcd) = self.lcd {
            config.set_lcd_endpoint(&lcd)?;
        }
        if let Some(explorer_project) = self.explorer_project {
            config.explorer_project = explorer_project;
        }
        if !self.queries.is_empty() {
            config.queries = self.queries;
        }
        if self.coingecko_id.is_some() {
            config.coingecko_id = self.coingecko_id;
        }
        if self.aliases_path.is_some() {
            config.aliases_path = self.aliases_path;
        }
        if self.dedup_window.is_some() {
            config.dedup_window = self.dedup_window;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not resolve configuration: {e}");
            return ExitCode::from(1);
        }
    };

    logging::init(&config.log_level);

    if let Err(e) = bootstrap::run(config).await {
        tracing::error!(error = %e, "Could not start application");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
