//! Telegram notifier.
//!
//! API: `POST https://api.telegram.org/bot{token}/sendMessage`
//! Body: `{ "chat_id": ..., "text": ..., "parse_mode": "HTML" }`
//!
//! Buy signals go to the main chat; operational alerts go to a separate
//! alert chat when one is configured, falling back to the main chat
//! otherwise. All sends are best-effort.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::{debug, warn};

use super::Notifier;

/// Per-call timeout for message delivery.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Telegram bot messaging client.
pub struct TelegramNotifier {
    http: Client,
    token: SecretString,
    chat_id: String,
    alert_chat_id: Option<String>,
}

impl TelegramNotifier {
    pub fn new(
        token: SecretString,
        chat_id: String,
        alert_chat_id: Option<String>,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent("SENTINEL/0.1.0")
            .build()?;
        Ok(Self {
            http,
            token,
            chat_id,
            alert_chat_id,
        })
    }

    async fn send(&self, chat_id: &str, text: &str) {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.token.expose_secret()
        );

        let result = self
            .http
            .post(&url)
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(chat_id, "Telegram message delivered");
            }
            Ok(resp) => {
                warn!(chat_id, status = %resp.status(), "Telegram rejected message");
            }
            Err(e) => {
                warn!(chat_id, error = %e, "Telegram delivery failed");
            }
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) {
        self.send(&self.chat_id, message).await;
    }

    async fn alert(&self, message: &str) {
        let chat = self.alert_chat_id.as_deref().unwrap_or(&self.chat_id);
        self.send(chat, message).await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
