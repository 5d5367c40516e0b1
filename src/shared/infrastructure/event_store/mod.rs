use crate::modules::events::core::chat_scope::ChatScope;
use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::core::store_document::StoreDocument;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("event store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read event store at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write event store at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Every call re-reads the whole document; nothing is cached between calls.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// The whole document. An absent store is an empty document, not an error.
    async fn load_document(&self) -> Result<StoreDocument, EventStoreError>;

    /// Overwrites the whole document.
    async fn persist(&self, document: &StoreDocument) -> Result<(), EventStoreError>;

    /// Load, push and persist as one guarded step.
    async fn append(&self, scope: &ChatScope, record: EventRecord) -> Result<(), EventStoreError>;

    async fn load(&self, scope: &ChatScope) -> Result<Vec<EventRecord>, EventStoreError> {
        Ok(self.load_document().await?.into_records_for(scope))
    }
}

pub mod in_memory;
pub mod json_file;
