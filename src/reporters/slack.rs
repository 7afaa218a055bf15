// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Slack delivery via `chat.postMessage`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::SlackConfig;
use crate::errors::DeliveryError;
use crate::render::{Markup, MrkdwnMarkup};

use super::Reporter;

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Slack notification channel.
pub struct SlackReporter {
    client: reqwest::Client,
    token: String,
    channel: String,
    markup: MrkdwnMarkup,
}

impl SlackReporter {
    pub fn new(config: &SlackConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: config.token.clone(),
            channel: config.channel.clone(),
            markup: MrkdwnMarkup,
        }
    }
}

#[async_trait]
impl Reporter for SlackReporter {
    fn name(&self) -> &'static str {
        "slack"
    }

    fn markup(&self) -> &dyn Markup {
        &self.markup
    }

    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        let response: PostMessageResponse = self
            .client
            .post(POST_MESSAGE_URL)
            .bearer_auth(&self.token)
            .json(&json!({
                "channel": self.channel,
                "text": text,
            }))
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            return Err(DeliveryError::Rejected {
                channel: "slack",
                details: response.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(())
    }
}
