// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Report assembly and rendering.

use tracing::{debug, info};

use crate::dispatch;
use crate::messages::ChainMessage;
use crate::render::RenderContext;
use crate::scale::AmountScaler;
use crate::tx::{self, TxSummary};

/// The renderable summary of one transaction's supported operations.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub tx: TxSummary,
    pub messages: Vec<ChainMessage>,
}

impl Report {
    /// An empty report must not be delivered: the transaction summary is
    /// unset or no supported, non-empty operation survived parsing.
    pub fn is_empty(&self) -> bool {
        self.tx.is_empty() || self.messages.is_empty()
    }

    /// Render for one channel: header plus each message, separated by blank
    /// lines.
    pub async fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut parts = vec![self.tx.render(ctx)];
        for message in &self.messages {
            parts.push(message.render(ctx).await);
        }
        parts.join("\n\n")
    }
}

/// Build a report from a raw transaction observed at `height`.
///
/// Operations parse in order; empties (decode failures, structurally
/// incomplete payloads) are filtered out.
pub fn assemble(raw: &[u8], height: u64, scaler: &AmountScaler) -> Report {
    let decoded = tx::decode(raw, height);
    if decoded.summary.is_empty() {
        return Report::default();
    }

    info!(
        height = decoded.summary.height,
        hash = %decoded.summary.hash,
        memo = %decoded.summary.memo,
        len = decoded.operations.len(),
        "Got transaction"
    );

    let messages = decoded
        .operations
        .iter()
        .filter_map(|op| dispatch::dispatch(&op.type_url, &op.value, height, scaler))
        .filter(|message| {
            if message.is_empty() {
                debug!(kind = %message.kind(), "Dropping empty message");
                false
            } else {
                true
            }
        })
        .collect();

    Report {
        tx: decoded.summary,
        messages,
    }
}
