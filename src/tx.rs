// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction identity and envelope decoding.

use prost::Message;
use sha2::{Digest, Sha256};
use tracing::error;

use crate::errors::DecodeError;
use crate::proto;
use crate::render::RenderContext;

/// The content hash of a raw transaction: uppercase-hex SHA-256 of the raw
/// bytes, matching the hash shown by explorers.
pub fn content_hash(raw: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(raw))
}

/// Identity and metadata of one observed transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxSummary {
    /// Content hash; empty when the envelope could not be decoded
    pub hash: String,
    /// Height of the containing block
    pub height: u64,
    /// Free-text memo, empty when absent
    pub memo: String,
}

impl TxSummary {
    /// Whether the summary is the empty sentinel (envelope decode failure).
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// The report header: hash and height as explorer links, memo as inline
    /// code or a code block when it spans lines.
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let short_hash = &self.hash[..self.hash.len().min(8)];
        let mut out = format!(
            "Tx {} at block {}",
            ctx.markup.link(&ctx.links.tx(&self.hash), short_hash),
            ctx.markup
                .link(&ctx.links.block(self.height), &self.height.to_string()),
        );

        if !self.memo.is_empty() {
            out.push_str(&format!(
                "\n{} {}",
                ctx.markup.strong("Memo:"),
                ctx.single_or_multiline_code(&self.memo),
            ));
        }

        out
    }
}

/// A decoded transaction envelope: its summary plus the ordered raw
/// operations awaiting dispatch.
#[derive(Debug, Clone, Default)]
pub struct DecodedTx {
    pub summary: TxSummary,
    pub operations: Vec<proto::Any>,
}

/// Decode a raw transaction observed at `height`.
///
/// An undecodable envelope yields the empty sentinel (empty hash, no
/// operations); the resulting report is empty and never delivered.
pub fn decode(raw: &[u8], height: u64) -> DecodedTx {
    match try_decode(raw, height) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!(error = %e, "Could not parse tx");
            DecodedTx::default()
        }
    }
}

fn try_decode(raw: &[u8], height: u64) -> Result<DecodedTx, DecodeError> {
    let tx = proto::tx::Tx::decode(raw)?;
    let body = tx.body.unwrap_or_default();

    Ok(DecodedTx {
        summary: TxSummary {
            hash: content_hash(raw),
            height,
            memo: body.memo,
        },
        operations: body.messages,
    })
}
