// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Notification channel transports.
//!
//! A [`Reporter`] takes a rendered report string and carries it to one
//! channel. Each reporter owns the markup dialect its channel expects; the
//! pipeline renders once per reporter with that dialect.
//!
//! Only configured reporters are constructed at startup, so the pipeline's
//! reporter list contains exactly the enabled channels.

use async_trait::async_trait;

use crate::errors::DeliveryError;
use crate::render::Markup;

pub mod slack;
pub mod telegram;

pub use slack::SlackReporter;
pub use telegram::{TelegramCommands, TelegramReporter};

/// One notification channel.
#[async_trait]
pub trait Reporter: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &'static str;

    /// The markup dialect this channel expects.
    fn markup(&self) -> &dyn Markup;

    /// Deliver a rendered report.
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}
