// In memory implementation of the EventStore port.
//
// Purpose
// - Support handler tests and local runs without touching the filesystem.
//
// Responsibilities
// - Hold one document behind a lock; append runs load, push and replace under the write guard.
// - Simulate an unreachable backend through the offline toggle.

use crate::modules::events::core::chat_scope::ChatScope;
use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::core::store_document::{StoreDocument, StoreLayout};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use tokio::sync::RwLock;

pub struct InMemoryEventStore {
    inner: RwLock<StoreDocument>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new(layout: StoreLayout) -> Self {
        Self {
            inner: RwLock::new(StoreDocument::empty(layout)),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new(StoreLayout::default())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn load_document(&self) -> Result<StoreDocument, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.clone())
    }

    async fn persist(&self, document: &StoreDocument) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        *self.inner.write().await = document.clone();
        Ok(())
    }

    async fn append(&self, scope: &ChatScope, record: EventRecord) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.inner.write().await.push(scope, record);
        Ok(())
    }
}
