// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The inbound transaction event stream.
//!
//! Events arrive over the node's RPC websocket as JSON frames wrapping a
//! base64 transaction payload and its block height. The subscriber task in
//! [`ws`] maintains the connection and fans decoded [`TxEvent`]s into a
//! channel consumed by the pipeline in arrival order.

use base64::Engine;
use serde::Deserialize;

use crate::errors::SourceError;

pub mod ws;

pub use ws::WsSubscriber;

/// One observed transaction: its raw bytes and containing block height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxEvent {
    pub height: u64,
    pub raw: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct RpcFrame {
    #[serde(default)]
    result: Option<RpcResult>,
}

#[derive(Debug, Deserialize)]
struct RpcResult {
    #[serde(default)]
    data: Option<EventData>,
}

#[derive(Debug, Deserialize)]
struct EventData {
    #[serde(default)]
    value: Option<EventValue>,
}

#[derive(Debug, Deserialize)]
struct EventValue {
    #[serde(rename = "TxResult", default)]
    tx_result: Option<TxResult>,
}

#[derive(Debug, Deserialize)]
struct TxResult {
    /// Block height, serialized as a decimal string
    height: String,
    /// Raw transaction bytes, base64-encoded
    tx: String,
}

/// Parse one websocket frame into a transaction event.
///
/// Returns `Ok(None)` for frames that are valid JSON but carry no
/// transaction (subscription confirmations, non-Tx events).
pub fn parse_event_frame(frame: &str) -> Result<Option<TxEvent>, SourceError> {
    let frame: RpcFrame = serde_json::from_str(frame)?;

    let Some(tx_result) = frame
        .result
        .and_then(|r| r.data)
        .and_then(|d| d.value)
        .and_then(|v| v.tx_result)
    else {
        return Ok(None);
    };

    let height = tx_result
        .height
        .parse::<u64>()
        .map_err(|e| SourceError::Subscription {
            query: String::new(),
            details: format!("unparseable height {:?}: {e}", tx_result.height),
        })?;

    let raw = base64::engine::general_purpose::STANDARD
        .decode(&tx_result.tx)
        .map_err(|e| SourceError::Subscription {
            query: String::new(),
            details: format!("undecodable tx payload: {e}"),
        })?;

    Ok(Some(TxEvent { height, raw }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tx_frame() {
        let frame = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "query": "tx.height > 1",
                "data": {
                    "type": "tendermint/event/Tx",
                    "value": {
                        "TxResult": {
                            "height": "12345",
                            "tx": "CgsKCWhlbGxvIHR4cw=="
                        }
                    }
                }
            }
        }"#;

        let event = parse_event_frame(frame).unwrap().expect("tx event");
        assert_eq!(event.height, 12345);
        assert!(!event.raw.is_empty());
    }

    #[test]
    fn test_subscription_confirmation_is_not_an_event() {
        let frame = r#"{"jsonrpc": "2.0", "id": 1, "result": {}}"#;
        assert!(parse_event_frame(frame).unwrap().is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_event_frame("not json").is_err());
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        let frame = r#"{
            "result": {"data": {"value": {"TxResult": {"height": "1", "tx": "!!!"}}}}
        }"#;
        assert!(parse_event_frame(frame).is_err());
    }
}
