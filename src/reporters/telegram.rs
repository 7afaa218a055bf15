// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Telegram delivery and the alias command surface.
//!
//! Reports go out through the Bot API's `sendMessage` with HTML parse mode.
//! The same bot long-polls `getUpdates` for alias management commands; that
//! loop runs concurrently with the pipeline and writes the alias directory
//! through its own handle.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::aliases::AliasDirectory;
use crate::config::TelegramConfig;
use crate::errors::DeliveryError;
use crate::render::{HtmlMarkup, Markup};

use super::Reporter;

const API_BASE_URL: &str = "https://api.telegram.org";

/// Long-poll timeout passed to `getUpdates`, in seconds.
const POLL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}

/// Telegram notification channel.
pub struct TelegramReporter {
    client: reqwest::Client,
    token: String,
    chat_id: i64,
    markup: HtmlMarkup,
}

impl TelegramReporter {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: config.token.clone(),
            chat_id: config.chat_id,
            markup: HtmlMarkup,
        }
    }

    async fn send_message(&self, text: &str, parse_mode: Option<&str>) -> Result<(), DeliveryError> {
        let mut body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });
        if let Some(mode) = parse_mode {
            body["parse_mode"] = json!(mode);
        }

        let url = format!("{API_BASE_URL}/bot{}/sendMessage", self.token);
        let response: ApiResponse<serde_json::Value> = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if !response.ok {
            return Err(DeliveryError::Rejected {
                channel: "telegram",
                details: response
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Reporter for TelegramReporter {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn markup(&self) -> &dyn Markup {
        &self.markup
    }

    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        self.send_message(text, Some("HTML")).await
    }
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    #[serde(default)]
    message: Option<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
struct IncomingMessage {
    chat: Chat,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

/// The alias management command surface.
///
/// Runs as its own task and mutates the alias directory concurrently with
/// the pipeline's read path.
pub struct TelegramCommands {
    reporter: TelegramReporter,
    aliases: Arc<AliasDirectory>,
    set_command: String,
    clear_command: String,
    list_command: String,
}

impl TelegramCommands {
    pub fn new(config: &TelegramConfig, aliases: Arc<AliasDirectory>) -> Self {
        Self {
            reporter: TelegramReporter::new(config),
            aliases,
            set_command: config.set_alias_command.clone(),
            clear_command: config.clear_alias_command.clone(),
            list_command: config.list_aliases_command.clone(),
        }
    }

    /// Long-poll for commands until the process shuts down.
    pub async fn run(self) {
        info!("Listening for alias commands");
        let mut offset: i64 = 0;

        loop {
            let updates = match self.poll(offset).await {
                Ok(updates) => updates,
                Err(e) => {
                    warn!(error = %e, "Could not poll for commands");
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);
                if let Some(message) = update.message {
                    self.handle(message).await;
                }
            }
        }
    }

    async fn poll(&self, offset: i64) -> Result<Vec<Update>, DeliveryError> {
        let url = format!(
            "{API_BASE_URL}/bot{}/getUpdates?offset={offset}&timeout={POLL_TIMEOUT_SECS}",
            self.reporter.token
        );
        let response: ApiResponse<Vec<Update>> =
            self.reporter.client.get(url).send().await?.json().await?;

        if !response.ok {
            return Err(DeliveryError::Rejected {
                channel: "telegram",
                details: response
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(response.result.unwrap_or_default())
    }

    async fn handle(&self, message: IncomingMessage) {
        if message.chat.id != self.reporter.chat_id {
            debug!(chat = message.chat.id, "Ignoring command from foreign chat");
            return;
        }
        let Some(text) = message.text else {
            return;
        };

        let reply = self.execute(text.trim());
        if let Some(reply) = reply {
            if let Err(e) = self.reporter.send_message(&reply, None).await {
                warn!(error = %e, "Could not send command response");
            }
        }
    }

    fn execute(&self, text: &str) -> Option<String> {
        let (command, rest) = match text.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (text, ""),
        };

        if command == self.set_command {
            let Some((address, label)) = rest.split_once(char::is_whitespace) else {
                return Some(format!("Usage: {} <address> <label>", self.set_command));
            };
            self.aliases.set(address, label.trim());
            info!(address = %address, label = %label.trim(), "Alias set");
            Some(format!("Alias for {address} set"))
        } else if command == self.clear_command {
            if rest.is_empty() {
                return Some(format!("Usage: {} <address>", self.clear_command));
            }
            if self.aliases.clear(rest) {
                info!(address = %rest, "Alias cleared");
                Some(format!("Alias for {rest} cleared"))
            } else {
                Some(format!("No alias for {rest}"))
            }
        } else if command == self.list_command {
            let entries = self.aliases.list();
            if entries.is_empty() {
                Some("No aliases set".to_string())
            } else {
                Some(
                    entries
                        .iter()
                        .map(|(address, label)| format!("{address}: {label}"))
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            }
        } else {
            debug!(command = %command, "Unsupported command, skipping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands_with(aliases: Arc<AliasDirectory>) -> TelegramCommands {
        let config = TelegramConfig {
            token: "test-token".to_string(),
            chat_id: 1,
            set_alias_command: "/set-alias".to_string(),
            clear_alias_command: "/clear-alias".to_string(),
            list_aliases_command: "/list-aliases".to_string(),
        };
        TelegramCommands::new(&config, aliases)
    }

    #[test]
    fn test_set_and_list_aliases() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let aliases = Arc::new(AliasDirectory::load(file.path()).unwrap());
        let commands = commands_with(aliases.clone());

        let reply = commands.execute("/set-alias cosmos1xyz alice");
        assert_eq!(reply, Some("Alias for cosmos1xyz set".to_string()));
        assert_eq!(aliases.lookup("cosmos1xyz"), Some("alice".to_string()));

        let listing = commands.execute("/list-aliases").unwrap();
        assert!(listing.contains("cosmos1xyz: alice"));
    }

    #[test]
    fn test_clear_alias() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let aliases = Arc::new(AliasDirectory::load(file.path()).unwrap());
        let commands = commands_with(aliases.clone());

        commands.execute("/set-alias cosmos1xyz alice");
        assert_eq!(
            commands.execute("/clear-alias cosmos1xyz"),
            Some("Alias for cosmos1xyz cleared".to_string())
        );
        assert_eq!(
            commands.execute("/clear-alias cosmos1xyz"),
            Some("No alias for cosmos1xyz".to_string())
        );
    }

    #[test]
    fn test_unknown_command_is_ignored() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let aliases = Arc::new(AliasDirectory::load(file.path()).unwrap());
        let commands = commands_with(aliases);

        assert_eq!(commands.execute("/unknown whatever"), None);
    }
}
