// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The event-to-report pipeline.
//!
//! One logical consumer processes events strictly in arrival order:
//!
//! ```text
//! observed -> dedup admit -> parse -> assemble -> render per channel
//!          -> deliver per channel -> dedup commit -> clear cache generation
//! ```
//!
//! The hash commits after the delivery attempt whether or not it succeeded,
//! so parse failures and delivery failures are never retried. No error in
//! this loop is fatal; enrichment calls serialize the per-event critical
//! path but never crash it.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, Instrument};

use crate::aliases::AliasDirectory;
use crate::dedup::Deduplicator;
use crate::enrichment::EnrichmentCache;
use crate::render::{ExplorerLinks, Markup, RenderContext};
use crate::report;
use crate::reporters::Reporter;
use crate::scale::AmountScaler;
use crate::source::TxEvent;
use crate::{spans, tx};

/// The assembled pipeline context: every component constructed once at
/// startup and owned here for the process lifetime.
pub struct Pipeline {
    scaler: AmountScaler,
    dedup: Deduplicator,
    cache: EnrichmentCache,
    aliases: Arc<AliasDirectory>,
    links: ExplorerLinks,
    reporters: Vec<Arc<dyn Reporter>>,
}

impl Pipeline {
    pub fn new(
        scaler: AmountScaler,
        dedup: Deduplicator,
        cache: EnrichmentCache,
        aliases: Arc<AliasDirectory>,
        links: ExplorerLinks,
        reporters: Vec<Arc<dyn Reporter>>,
    ) -> Self {
        Self {
            scaler,
            dedup,
            cache,
            aliases,
            links,
            reporters,
        }
    }

    /// Consume events until the channel closes.
    pub async fn run(mut self, mut events: mpsc::Receiver<TxEvent>) {
        while let Some(event) = events.recv().await {
            let span = spans::process_event(event.height);
            self.process(&event).instrument(span).await;
        }
    }

    /// Process one observed transaction through the full state machine.
    pub async fn process(&mut self, event: &TxEvent) {
        let hash = tx::content_hash(&event.raw);

        if !self.dedup.admit(&hash) {
            debug!(hash = %hash, "Transaction already sent, skipping");
            return;
        }

        let report = report::assemble(&event.raw, event.height, &self.scaler);

        if report.is_empty() {
            info!("Report is empty, not sending");
        } else {
            for reporter in &self.reporters {
                info!(name = reporter.name(), "Sending a report to reporter");

                let context = self.context(reporter.markup());
                let text = report
                    .render(&context)
                    .instrument(spans::deliver_report(reporter.name(), &hash))
                    .await;

                if let Err(e) = reporter.send(&text).await {
                    error!(name = reporter.name(), error = %e, "Could not send message");
                }
            }
        }

        // The hash commits even when parsing produced nothing: failures are
        // not retried within a run.
        self.dedup.commit(hash);
        self.cache.clear_generation().await;
    }

    fn context<'a>(&'a self, markup: &'a dyn Markup) -> RenderContext<'a> {
        RenderContext {
            markup,
            cache: &self.cache,
            aliases: &self.aliases,
            links: &self.links,
            scaler: &self.scaler,
        }
    }
}
