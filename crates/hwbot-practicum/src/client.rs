//! Homework API client.
//!
//! One authenticated GET per poll cycle. This is a pure transport concern:
//! it classifies network and HTTP failures and hands back the parsed body
//! untyped; [`crate::response::validate`] owns the shape contract.

use async_trait::async_trait;
use serde_json::Value;

use hwbot_core::config::PracticumConfig;
use hwbot_core::error::{HwBotError, Result};
use hwbot_core::traits::HomeworkApi;

/// Client for the homework statuses endpoint.
pub struct PracticumClient {
    endpoint: String,
    token: String,
    timeout: std::time::Duration,
    client: reqwest::Client,
}

impl PracticumClient {
    pub fn new(config: &PracticumConfig, token: impl Into<String>) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            token: token.into(),
            timeout: std::time::Duration::from_secs(config.request_timeout_secs),
            client: reqwest::Client::new(),
        }
    }

    /// Attach the OAuth header the API expects.
    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("Authorization", format!("OAuth {}", self.token))
    }

    /// Fetch homework status updates since `from_date`.
    ///
    /// Every failure mode raises; the error object is never returned as if
    /// it were a response.
    pub async fn fetch_updates(&self, from_date: i64) -> Result<Value> {
        tracing::debug!("requesting homework statuses, from_date={from_date}");

        let req = self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", from_date.to_string())])
            .timeout(self.timeout);

        let response = self
            .apply_auth(req)
            .send()
            .await
            .map_err(|e| HwBotError::Transport(format!("Ошибка при запросе к API: {e}")))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(unexpected_status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HwBotError::Transport(format!("Не удалось разобрать ответ API: {e}")))
    }
}

/// Transport error for a non-200 response; the message carries the code.
fn unexpected_status(code: u16) -> HwBotError {
    HwBotError::Transport(format!(
        "Код ответа не соответствует ожиданиям. Код: {code}"
    ))
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch_updates(&self, from_date: i64) -> Result<Value> {
        PracticumClient::fetch_updates(self, from_date).await
    }
}
