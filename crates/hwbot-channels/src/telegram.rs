//! Telegram Bot channel: outbound message delivery via the Bot API.
//!
//! Send-only. The bot never reads chat input, so there is no update polling
//! here, just `sendMessage` plus a `getMe` identity check at startup.

use async_trait::async_trait;
use serde::Deserialize;

use hwbot_core::config::TelegramConfig;
use hwbot_core::error::{HwBotError, Result};
use hwbot_core::traits::Channel;
use hwbot_core::types::OutgoingMessage;

/// Telegram Bot API channel.
pub struct TelegramChannel {
    bot_token: String,
    timeout: std::time::Duration,
    client: reqwest::Client,
}

impl TelegramChannel {
    pub fn new(bot_token: impl Into<String>, config: &TelegramConfig) -> Self {
        Self {
            bot_token: bot_token.into(),
            timeout: std::time::Duration::from_secs(config.send_timeout_secs),
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.bot_token, method)
    }

    /// Send a plain-text message.
    ///
    /// No parse mode: homework names routinely contain `_` and `*`, which
    /// Markdown mode would turn into Bot API 400s.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HwBotError::Channel(format!("sendMessage failed: {e}")))?;

        let result: TelegramApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| HwBotError::Channel(format!("invalid send response: {e}")))?;

        if !result.ok {
            return Err(HwBotError::Channel(format!(
                "send failed: {}",
                result.description.unwrap_or_default()
            )));
        }
        Ok(())
    }

    /// Get bot info.
    pub async fn get_me(&self) -> Result<TelegramUser> {
        let response = self
            .client
            .get(self.api_url("getMe"))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HwBotError::Channel(format!("getMe failed: {e}")))?;
        let body: TelegramApiResponse<TelegramUser> = response
            .json()
            .await
            .map_err(|e| HwBotError::Channel(format!("invalid getMe response: {e}")))?;
        if !body.ok {
            return Err(HwBotError::Channel(format!(
                "getMe rejected: {}",
                body.description.unwrap_or_default()
            )));
        }
        body.result
            .ok_or_else(|| HwBotError::Channel("no bot info in getMe response".into()))
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn connect(&mut self) -> Result<()> {
        let me = self.get_me().await?;
        tracing::info!(
            "Telegram bot: @{} ({})",
            me.username.as_deref().unwrap_or("unknown"),
            me.first_name
        );
        Ok(())
    }

    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        self.send_message(&message.chat_id, &message.text).await
    }
}

// --- Telegram API types ---

/// The Bot API response envelope.
#[derive(Debug, Deserialize)]
pub struct TelegramApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}
