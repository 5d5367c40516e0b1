// In memory ChatTransport that records every outbound message for assertions.

use crate::shared::infrastructure::chat_transport::{ChatTransport, OutboundMessage};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryChatTransport {
    sent: Mutex<Vec<OutboundMessage>>,
    is_offline: bool,
}

impl InMemoryChatTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ChatTransport for InMemoryChatTransport {
    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Chat transport offline"));
        }
        self.sent.lock().await.push(message);
        Ok(())
    }
}
