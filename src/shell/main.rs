use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use theatre_events::shared::infrastructure::chat_transport::telegram::TelegramClient;
use theatre_events::shared::infrastructure::event_store::EventStore;
use theatre_events::shared::infrastructure::event_store::json_file::JsonFileEventStore;
use theatre_events::shell::config::Config;
use theatre_events::shell::state::AppState;
use theatre_events::shell::{dispatcher, http, polling};

const INBOUND_QUEUE_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let event_store: Arc<dyn EventStore> = Arc::new(JsonFileEventStore::new(
        config.events_file.clone(),
        config.store_layout,
    ));
    let telegram = Arc::new(TelegramClient::new(
        &config.telegram_api_url,
        &config.bot_token,
    )?);

    let (inbound, receiver) = mpsc::channel(INBOUND_QUEUE_CAPACITY);
    let state = AppState::new(
        event_store,
        telegram.clone(),
        inbound.clone(),
        config.webapp_url.clone(),
        config.bot_token.clone(),
    );
    tokio::spawn(dispatcher::run(state.clone(), receiver));

    info!(
        store = %config.events_file.display(),
        layout = ?config.store_layout,
        "bot started"
    );

    match config.webhook_endpoint() {
        Some(endpoint) => {
            telegram.set_webhook(&endpoint).await?;
            let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
            info!(%addr, "webhook server listening");
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, http::router(state))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        None => {
            tokio::select! {
                result = polling::run(telegram, inbound) => result?,
                _ = shutdown_signal() => {}
            }
        }
    }

    info!("bot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
