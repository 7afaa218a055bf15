// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Websocket subscriber for the node's transaction events.
//!
//! A background task owns the connection and handles reconnect plus
//! re-subscribe transparently, with exponential backoff between attempts.
//! Decoded events flow into an mpsc channel; the pipeline consumes them in
//! arrival order.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

use crate::errors::SourceError;

use super::{parse_event_frame, TxEvent};

const RECONNECT_INITIAL: Duration = Duration::from_millis(500);
const RECONNECT_MAX: Duration = Duration::from_secs(60);

/// Event channel depth. The pipeline is the sole consumer; a full channel
/// applies backpressure to the reader task rather than dropping events.
const CHANNEL_CAPACITY: usize = 64;

/// Subscribes to the node's websocket endpoint for the configured queries.
pub struct WsSubscriber {
    url: String,
    queries: Vec<String>,
}

impl WsSubscriber {
    /// Create a subscriber for `url` (e.g. `ws://localhost:26657/websocket`).
    pub fn new(url: impl Into<String>, queries: Vec<String>) -> Self {
        Self {
            url: url.into(),
            queries,
        }
    }

    /// Spawn the background connection task and return the event channel.
    pub fn spawn(self) -> mpsc::Receiver<TxEvent> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(async move {
            self.run(tx).await;
        });
        rx
    }

    async fn run(self, events: mpsc::Sender<TxEvent>) {
        let mut backoff = RECONNECT_INITIAL;

        loop {
            match self.connect_and_read(&events, &mut backoff).await {
                Ok(()) => {
                    // Receiver dropped, the pipeline is gone.
                    return;
                }
                Err(e) => {
                    warn!(error = %e, backoff = ?backoff, "Websocket connection lost, reconnecting");
                }
            }

            sleep(backoff).await;
            backoff = (backoff * 2).min(RECONNECT_MAX);
        }
    }

    /// Connect, subscribe, and pump frames until the connection drops.
    ///
    /// Returns `Ok(())` only when the event receiver is gone.
    async fn connect_and_read(
        &self,
        events: &mpsc::Sender<TxEvent>,
        backoff: &mut Duration,
    ) -> Result<(), SourceError> {
        let (stream, _) = connect_async(self.url.as_str()).await?;
        let (mut sink, mut reader) = stream.split();

        info!(url = %self.url, "Connected to websocket");
        *backoff = RECONNECT_INITIAL;

        for (id, query) in self.queries.iter().enumerate() {
            let request = json!({
                "jsonrpc": "2.0",
                "method": "subscribe",
                "id": id,
                "params": { "query": query },
            });
            sink.send(Message::Text(request.to_string())).await?;
            info!(query = %query, "Listening for incoming transactions");
        }

        while let Some(frame) = reader.next().await {
            let frame = frame?;
            let text = match frame {
                Message::Text(text) => text,
                Message::Ping(payload) => {
                    sink.send(Message::Pong(payload)).await?;
                    continue;
                }
                Message::Close(_) => break,
                _ => continue,
            };

            match parse_event_frame(&text) {
                Ok(Some(event)) => {
                    debug!(height = event.height, "Received transaction event");
                    if events.send(event).await.is_err() {
                        return Ok(());
                    }
                }
                Ok(None) => debug!("Event does not have data, skipping"),
                Err(e) => error!(error = %e, "Failed to parse event"),
            }
        }

        Err(SourceError::Websocket(
            tokio_tungstenite::tungstenite::Error::ConnectionClosed,
        ))
    }
}
