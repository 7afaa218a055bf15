// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for pipeline operations.
//!
//! Telemetry concerns are kept out of business logic: each instrumented
//! operation has a span helper here, attached at the call site with
//! `Instrument::instrument`.

use tracing::Span;

/// Span covering the full processing of one observed transaction.
///
/// Parent: none (root span per event)
/// Children: deliver_report spans (one per enabled channel)
#[inline]
pub(crate) fn process_event(height: u64) -> Span {
    tracing::debug_span!("chainherald.process_event", height = height)
}

/// Span covering rendering for one channel.
///
/// Parent: process_event span
#[inline]
pub(crate) fn deliver_report(channel: &str, hash: &str) -> Span {
    tracing::debug_span!("chainherald.deliver_report", channel = %channel, hash = %hash)
}
