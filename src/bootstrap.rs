// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process startup and wiring.
//!
//! Everything mutable-at-startup resolves here, before the pipeline runs:
//! the denomination scaler, the alias directory, the reporter list, the
//! dedup policy. A failure in this module is fatal by design; once
//! [`run`] hands control to the pipeline, nothing is.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::aliases::AliasDirectory;
use crate::config::AppConfig;
use crate::dedup::Deduplicator;
use crate::enrichment::{EnrichmentCache, HttpGateway};
use crate::errors::{ConfigError, EnrichmentError, HeraldError};
use crate::pipeline::Pipeline;
use crate::render::ExplorerLinks;
use crate::reporters::{Reporter, SlackReporter, TelegramCommands, TelegramReporter};
use crate::scale::AmountScaler;
use crate::source::WsSubscriber;

/// Main entry point: resolve configuration, wire the pipeline, and run it
/// until the event stream ends or the process is interrupted.
pub async fn run(config: AppConfig) -> Result<(), HeraldError> {
    let gateway = Arc::new(HttpGateway::new(
        config.lcd_endpoint.clone(),
        config.coingecko_id.clone(),
    )?);

    let scaler = resolve_scaler(&config, &gateway).await?;

    let aliases = Arc::new(match &config.aliases_path {
        Some(path) => AliasDirectory::load(path)?,
        None => AliasDirectory::disabled(),
    });

    let reporters = build_reporters(&config);
    if reporters.is_empty() {
        warn!("No reporters configured, reports will be dropped");
    }

    if let Some(telegram) = config.telegram.as_ref().filter(|t| t.enabled()) {
        let commands = TelegramCommands::new(telegram, aliases.clone());
        tokio::spawn(commands.run());
    }

    let dedup = match config.dedup_window.and_then(NonZeroUsize::new) {
        Some(window) => {
            info!(window = window.get(), "Bounding dedup set to a recency window");
            Deduplicator::bounded(window)
        }
        None => Deduplicator::unbounded(),
    };

    let events = WsSubscriber::new(config.tendermint_ws.clone(), config.queries.clone()).spawn();

    let pipeline = Pipeline::new(
        scaler,
        dedup,
        EnrichmentCache::new(gateway),
        aliases,
        ExplorerLinks::new(config.explorer_project.clone()),
        reporters,
    );

    tokio::select! {
        _ = pipeline.run(events) => {
            warn!("Event stream closed");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received interrupt, shutting down");
        }
    }

    Ok(())
}

fn build_reporters(config: &AppConfig) -> Vec<Arc<dyn Reporter>> {
    let mut reporters: Vec<Arc<dyn Reporter>> = Vec::new();

    match config.telegram.as_ref().filter(|t| t.enabled()) {
        Some(telegram) => {
            info!(name = "telegram", "Init reporter");
            reporters.push(Arc::new(TelegramReporter::new(telegram)));
        }
        None => debug!("Telegram credentials not set, not creating Telegram reporter"),
    }

    match config.slack.as_ref().filter(|s| s.enabled()) {
        Some(slack) => {
            info!(name = "slack", "Init reporter");
            reporters.push(Arc::new(SlackReporter::new(slack)));
        }
        None => debug!("Slack credentials not set, not creating Slack reporter"),
    }

    reporters
}

/// Resolve the display denomination and coefficient.
///
/// Explicit configuration wins; otherwise the chain's denomination metadata
/// is queried once. Unresolvable metadata is fatal.
async fn resolve_scaler(
    config: &AppConfig,
    gateway: &HttpGateway,
) -> Result<AmountScaler, ConfigError> {
    if let (Some(denom), Some(base_denom), Some(coefficient)) = (
        &config.denom,
        &config.base_denom,
        config.denom_coefficient,
    ) {
        info!(
            denom = %denom,
            base_denom = %base_denom,
            coefficient = coefficient,
            "Using provided denom and coefficient"
        );
        return Ok(AmountScaler::new(denom, base_denom, coefficient));
    }

    let metadatas = gateway.denoms_metadata().await.map_err(|e| match e {
        EnrichmentError::Request(e) => ConfigError::NodeUnreachable(e),
        other => ConfigError::DenomUnresolvable {
            details: other.to_string(),
        },
    })?;

    // Always using the first registered denomination.
    let metadata = metadatas
        .first()
        .ok_or_else(|| ConfigError::DenomUnresolvable {
            details: "chain registers no denomination metadata".to_string(),
        })?;

    let display = config
        .denom
        .clone()
        .unwrap_or_else(|| metadata.display.clone());

    for unit in &metadata.denom_units {
        debug!(denom = %unit.denom, exponent = unit.exponent, "Denom info");
        if unit.denom == display {
            let coefficient = 10f64.powi(unit.exponent as i32);
            // Alias avoids a name collision with tracing's internal `display` fn
            // inside the macro expansion (a bare `display` value resolves to it).
            let denom_display = &display;
            info!(
                denom = %denom_display,
                base_denom = %metadata.base,
                coefficient = coefficient,
                "Got denom info"
            );
            return Ok(AmountScaler::new(&display, &metadata.base, coefficient));
        }
    }

    Err(ConfigError::DenomUnresolvable {
        details: format!("no denom unit named {display:?} in chain metadata"),
    })
}
