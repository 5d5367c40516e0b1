use crate::modules::events::core::store_document::StoreLayout;
use anyhow::{Context, Result, anyhow, bail};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_EVENTS_FILE: &str = "events.json";
pub const DEFAULT_WEBAPP_URL: &str = "https://zaynekkensher.github.io/-teatraly-webapp/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotMode {
    Polling,
    /// `public_url` is the externally reachable base URL the webhook path is appended to.
    Webhook { public_url: String },
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub events_file: PathBuf,
    pub store_layout: StoreLayout,
    pub webapp_url: String,
    pub mode: BotMode,
    pub port: u16,
    pub telegram_api_url: String,
    pub log_filter: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("events_file", &self.events_file)
            .field("store_layout", &self.store_layout)
            .field("webapp_url", &self.webapp_url)
            .field("mode", &self.mode)
            .field("port", &self.port)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bot_token = var("BOT_TOKEN")
            .context("Required environment variable 'BOT_TOKEN' is not set")?;

        let store_layout = match var("EVENTS_LAYOUT") {
            Some(raw) => raw
                .parse::<StoreLayout>()
                .map_err(|e| anyhow!(e))
                .context("EVENTS_LAYOUT is invalid")?,
            None => StoreLayout::default(),
        };

        let mode = match var("BOT_MODE").as_deref().map(str::trim) {
            None | Some("polling") => BotMode::Polling,
            Some("webhook") => BotMode::Webhook {
                public_url: var("WEBHOOK_URL")
                    .context("WEBHOOK_URL must be set when BOT_MODE is 'webhook'")?,
            },
            Some(other) => bail!("BOT_MODE '{other}' is invalid, expected 'polling' or 'webhook'"),
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            bot_token,
            events_file: var("EVENTS_FILE")
                .unwrap_or_else(|| DEFAULT_EVENTS_FILE.to_string())
                .into(),
            store_layout,
            webapp_url: var("WEBAPP_URL").unwrap_or_else(|| DEFAULT_WEBAPP_URL.to_string()),
            mode,
            port,
            telegram_api_url: var("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            log_filter: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Public URL Telegram pushes updates to in webhook mode.
    pub fn webhook_endpoint(&self) -> Option<String> {
        match &self.mode {
            BotMode::Webhook { public_url } => Some(format!(
                "{}/webhook/{}",
                public_url.trim_end_matches('/'),
                self.bot_token
            )),
            BotMode::Polling => None,
        }
    }
}
