use crate::bot::OutgoingMessage;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebhookInfo {
    #[serde(default)]
    url: String,
}

/// Thin client for the Telegram Bot API methods the service needs.
#[derive(Clone)]
pub struct TelegramService {
    client: Client,
    api_base: String,
}

impl TelegramService {
    pub fn new(client: Client, api_url: &str, bot_token: &str) -> Self {
        Self {
            client,
            api_base: format!("{}/bot{}", api_url, bot_token),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_base, method)
    }

    async fn call<T: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<Option<T>> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let parsed: ApiResponse<T> = response.json().await?;
        if !parsed.ok {
            return Err(Error::Internal(format!(
                "Telegram {} failed with {}: {}",
                method,
                status,
                parsed.description.unwrap_or_default()
            )));
        }
        Ok(parsed.result)
    }

    pub async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        tracing::debug!(chat_id = message.chat_id, "sending Telegram message");
        self.call::<serde_json::Value>("sendMessage", serde_json::to_value(message)?)
            .await?;
        Ok(())
    }

    /// Sends replies in order, stopping at the first failure.
    pub async fn send_all(&self, messages: &[OutgoingMessage]) -> Result<()> {
        for message in messages {
            self.send_message(message).await?;
        }
        Ok(())
    }

    pub async fn webhook_url(&self) -> Result<String> {
        let info = self
            .call::<WebhookInfo>("getWebhookInfo", json!({}))
            .await?;
        Ok(info.map(|i| i.url).unwrap_or_default())
    }

    pub async fn set_webhook(&self, url: &str, secret: Option<&str>) -> Result<()> {
        let mut body = json!({
            "url": url,
            "allowed_updates": ["message"],
        });
        if let Some(secret) = secret {
            body["secret_token"] = json!(secret);
        }
        self.call::<bool>("setWebhook", body).await?;
        Ok(())
    }

    /// Points the bot's webhook at `target` unless it already is.
    ///
    /// The secret token cannot be read back from Telegram, so when one is
    /// configured the webhook is always re-registered.
    pub async fn ensure_webhook(&self, target: &str, secret: Option<&str>) -> Result<()> {
        let current = self.webhook_url().await?;
        if current == target && secret.is_none() {
            tracing::info!(url = %current, "Telegram webhook is already up to date");
            return Ok(());
        }
        tracing::info!(from = %current, to = %target, "updating Telegram webhook");
        self.set_webhook(target, secret).await?;
        tracing::info!("Telegram webhook registered successfully");
        Ok(())
    }
}
