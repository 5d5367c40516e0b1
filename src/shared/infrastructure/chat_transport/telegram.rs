// Telegram Bot API client.
//
// Purpose
// - Deliver replies and fetch updates over the HTTPS Bot API.
//
// Responsibilities
// - Implement the ChatTransport port with sendMessage.
// - Long poll getUpdates for polling mode and register the webhook for webhook mode.
// - Keep the bot token out of error messages; reqwest errors carry the request URL.

use crate::shared::infrastructure::chat_transport::update::Update;
use crate::shared::infrastructure::chat_transport::{
    ChatTransport, OutboundMessage, ReplyKeyboardMarkup,
};
use anyhow::{Context, anyhow};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const LONG_POLL_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a ReplyKeyboardMarkup>,
}

#[derive(Serialize)]
struct GetUpdates {
    offset: i64,
    timeout: u64,
    allowed_updates: [&'static str; 1],
}

#[derive(Serialize)]
struct SetWebhook<'a> {
    url: &'a str,
}

pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(api_url: &str, token: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(LONG_POLL_TIMEOUT_SECS + 10))
            .build()
            .context("failed to build the Telegram HTTP client")?;
        Ok(Self {
            http,
            base_url: format!("{}/bot{token}", api_url.trim_end_matches('/')),
        })
    }

    async fn call<P, T>(&self, method: &str, payload: &P) -> anyhow::Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response: ApiResponse<T> = self
            .http
            .post(format!("{}/{method}", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!(e.without_url()))?
            .json()
            .await
            .map_err(|e| anyhow!(e.without_url()))?;

        match response {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse { description, .. } => Err(anyhow!(
                "telegram {method} failed: {}",
                description.unwrap_or_else(|| "no description".into())
            )),
        }
    }

    pub async fn get_updates(&self, offset: i64) -> anyhow::Result<Vec<Update>> {
        self.call(
            "getUpdates",
            &GetUpdates {
                offset,
                timeout: LONG_POLL_TIMEOUT_SECS,
                allowed_updates: ["message"],
            },
        )
        .await
    }

    pub async fn set_webhook(&self, url: &str) -> anyhow::Result<()> {
        let _: bool = self.call("setWebhook", &SetWebhook { url }).await?;
        Ok(())
    }

    /// Polling and a registered webhook exclude each other on the Telegram side.
    pub async fn delete_webhook(&self) -> anyhow::Result<()> {
        let _: bool = self.call("deleteWebhook", &serde_json::json!({})).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ChatTransport for TelegramClient {
    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        let _: serde_json::Value = self
            .call(
                "sendMessage",
                &SendMessage {
                    chat_id: message.chat_id,
                    text: &message.text,
                    reply_markup: message.keyboard.as_ref(),
                },
            )
            .await?;
        Ok(())
    }
}
