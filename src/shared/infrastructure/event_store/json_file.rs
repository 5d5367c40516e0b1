// JSON file implementation of the EventStore port.
//
// Purpose
// - Durable storage of the whole store as one human readable UTF-8 document.
//
// Responsibilities
// - Read the full document on every operation. A missing file is an empty store.
// - Write the full document after every mutation, through a temporary file and a rename.
// - Serialize load, mutate and save under one store wide lock so concurrent appends
//   cannot overwrite each other.

use crate::modules::events::core::chat_scope::ChatScope;
use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::core::store_document::{StoreDocument, StoreLayout};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

pub struct JsonFileEventStore {
    path: PathBuf,
    layout: StoreLayout,
    write_guard: Mutex<()>,
}

impl JsonFileEventStore {
    /// `layout` only shapes a store that does not exist yet; an existing file keeps its shape.
    pub fn new(path: impl Into<PathBuf>, layout: StoreLayout) -> Self {
        Self {
            path: path.into(),
            layout,
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<StoreDocument, EventStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "event store absent, starting empty");
                return Ok(StoreDocument::empty(self.layout));
            }
            Err(source) => {
                return Err(EventStoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if bytes.is_empty() {
            return Ok(StoreDocument::empty(self.layout));
        }
        serde_json::from_slice(&bytes).map_err(|source| EventStoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_document(&self, document: &StoreDocument) -> Result<(), EventStoreError> {
        let write_error = |source| EventStoreError::Write {
            path: self.path.clone(),
            source,
        };
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| write_error(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        tokio::fs::write(&staging, &bytes).await.map_err(write_error)?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(write_error)?;
        debug!(path = %self.path.display(), records = document.len(), "event store persisted");
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for JsonFileEventStore {
    async fn load_document(&self) -> Result<StoreDocument, EventStoreError> {
        self.read_document().await
    }

    async fn persist(&self, document: &StoreDocument) -> Result<(), EventStoreError> {
        let _guard = self.write_guard.lock().await;
        self.write_document(document).await
    }

    async fn append(&self, scope: &ChatScope, record: EventRecord) -> Result<(), EventStoreError> {
        let _guard = self.write_guard.lock().await;
        let mut document = self.read_document().await?;
        document.push(scope, record);
        self.write_document(&document).await
    }
}
