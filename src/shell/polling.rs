use crate::shared::infrastructure::chat_transport::telegram::TelegramClient;
use crate::shared::infrastructure::chat_transport::update::Update;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Long polls Telegram and feeds every update into the inbound queue.
/// Returns once the queue is closed.
pub async fn run(client: Arc<TelegramClient>, inbound: mpsc::Sender<Update>) -> anyhow::Result<()> {
    client.delete_webhook().await?;
    info!("polling for updates");

    let mut offset = 0;
    loop {
        let updates = match client.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!(error = %e, "getUpdates failed, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
                continue;
            }
        };
        for update in updates {
            offset = offset.max(update.update_id + 1);
            if inbound.send(update).await.is_err() {
                info!("inbound queue closed, poller stopped");
                return Ok(());
            }
        }
    }
}
