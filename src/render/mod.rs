// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Format-agnostic report rendering.
//!
//! One domain message must produce text in several markup dialects, so the
//! dialect is abstracted behind the [`Markup`] trait: four formatting
//! primitives, one implementation per channel ([`HtmlMarkup`] for Telegram,
//! [`MrkdwnMarkup`] for Slack).
//!
//! [`RenderContext`] bundles a markup implementation with the enrichment
//! cache, alias directory, explorer link builder, and amount scaler. Message
//! rendering is pure with respect to the message's own fields and the
//! injected context; it never mutates shared state.
//!
//! # Degradation
//!
//! Every enrichment-backed decoration degrades independently: a failed
//! validator lookup renders the address without its moniker, a failed rate
//! fetch renders amounts without fiat annotation, a missing alias renders
//! the bare address link.

use tracing::warn;

use crate::aliases::AliasDirectory;
use crate::enrichment::EnrichmentCache;
use crate::messages::CoinValue;
use crate::scale::{self, AmountScaler, FIAT_PRECISION, REWARD_PRECISION};

mod html;
mod links;
mod markdown;

pub use html::HtmlMarkup;
pub use links::ExplorerLinks;
pub use markdown::MrkdwnMarkup;

/// Formatting primitives bound to one markup dialect.
pub trait Markup: Send + Sync {
    /// A hyperlink with display text.
    fn link(&self, target: &str, text: &str) -> String;
    /// Emphasized (bold) text.
    fn strong(&self, text: &str) -> String;
    /// Inline code.
    fn code(&self, text: &str) -> String;
    /// A multi-line code block.
    fn code_block(&self, text: &str) -> String;
}

/// Everything a message needs to render itself for one channel.
pub struct RenderContext<'a> {
    pub markup: &'a dyn Markup,
    pub cache: &'a EnrichmentCache,
    pub aliases: &'a AliasDirectory,
    pub links: &'a ExplorerLinks,
    pub scaler: &'a AmountScaler,
}

impl RenderContext<'_> {
    /// An account link, annotated with `(label)` when the address has an
    /// alias.
    pub fn wallet_with_alias(&self, address: &str) -> String {
        let mut out = self.markup.link(&self.links.account(address), address);

        if let Some(label) = self.aliases.lookup(address) {
            out.push_str(&format!(" ({})", self.markup.code(&label)));
        }

        out
    }

    /// A validator link, annotated with `(moniker)` when the lookup succeeds.
    pub async fn validator_with_moniker(&self, address: &str) -> String {
        let mut out = self.markup.link(&self.links.validator(address), address);

        match self.cache.validator(address).await {
            Ok(info) => {
                out.push_str(&format!(" ({})", self.markup.code(&info.moniker)));
            }
            Err(e) => {
                warn!(address = %address, error = %e, "Could not load validator info");
            }
        }

        out
    }

    /// Inline code for a single-line value, a code block when the value
    /// contains line breaks.
    pub fn single_or_multiline_code(&self, text: &str) -> String {
        if text.contains('\n') {
            format!("\n{}", self.markup.code_block(text))
        } else {
            self.markup.code(text)
        }
    }

    /// A formatted amount without fiat annotation.
    pub fn amount_formatted(&self, value: f64, denom: &str, precision: usize) -> String {
        self.markup
            .code(&format!("{} {}", scale::format_fixed(value, precision), denom))
    }

    /// A formatted amount with a fiat annotation when the exchange rate is
    /// available, without one otherwise.
    pub async fn amount_with_fiat(&self, value: f64, denom: &str, precision: usize) -> String {
        match self.cache.rate().await {
            Ok(rate) if rate != 0.0 => self.markup.code(&format!(
                "{} {} (${})",
                scale::format_fixed(value, precision),
                denom,
                scale::format_fixed(value * rate, FIAT_PRECISION)
            )),
            _ => self.amount_formatted(value, denom, precision),
        }
    }

    /// Render a parsed coin value: native amounts carry the display symbol
    /// and a fiat annotation, foreign denominations render unscaled.
    pub async fn coin(&self, coin: &CoinValue, native_precision: usize) -> String {
        match coin {
            CoinValue::Native(scaled) => {
                self.amount_with_fiat(scaled.value, &scaled.denom, native_precision)
                    .await
            }
            CoinValue::Foreign { value, denom } => {
                self.amount_formatted(*value, denom, REWARD_PRECISION)
            }
        }
    }

    /// One line per commission coin as of `height`, empty on lookup failure.
    pub async fn commission_at_height(&self, address: &str, height: u64) -> String {
        let coins = match self
            .cache
            .validator_commission_at_height(address, height)
            .await
        {
            Ok(coins) => coins,
            Err(e) => {
                warn!(address = %address, error = %e, "Could not load validator commission info");
                return String::new();
            }
        };

        let mut out = String::new();
        for coin in coins {
            let Some(value) = parse_dec_amount(&coin.amount) else {
                continue;
            };
            let line = if self.scaler.is_native(&coin.denom) {
                let scaled = self.scaler.scale_value(value);
                self.amount_formatted(scaled.value, &scaled.denom, REWARD_PRECISION)
            } else {
                self.amount_formatted(value, &coin.denom, REWARD_PRECISION)
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// One line per reward coin as of `height`, with fiat annotation where
    /// available; empty on lookup failure.
    pub async fn rewards_at_height(&self, validator: &str, delegator: &str, height: u64) -> String {
        let coins = match self
            .cache
            .delegator_rewards_at_height(validator, delegator, height)
            .await
        {
            Ok(coins) => coins,
            Err(e) => {
                warn!(
                    validator = %validator,
                    delegator = %delegator,
                    error = %e,
                    "Could not load delegator rewards info"
                );
                return String::new();
            }
        };

        let mut out = String::new();
        for coin in coins {
            let Some(value) = parse_dec_amount(&coin.amount) else {
                continue;
            };
            let line = if self.scaler.is_native(&coin.denom) {
                let scaled = self.scaler.scale_value(value);
                self.amount_with_fiat(scaled.value, &scaled.denom, REWARD_PRECISION)
                    .await
            } else {
                self.amount_formatted(value, &coin.denom, REWARD_PRECISION)
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn parse_dec_amount(amount: &str) -> Option<f64> {
    match amount.parse::<f64>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(amount = %amount, error = %e, "Could not parse balance");
            None
        }
    }
}
