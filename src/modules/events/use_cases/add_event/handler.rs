use crate::modules::events::core::chat_scope::ChatScope;
use crate::modules::events::core::event_record::{EventRecord, InvalidEventFormat};
use crate::modules::events::use_cases::add_event::submission::EventSubmission;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidEventFormat(#[from] InvalidEventFormat),

    #[error(transparent)]
    Storage(#[from] EventStoreError),
}

pub struct AddEventHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> AddEventHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Decode and validate before touching the store; a rejected payload writes nothing.
    pub async fn handle(&self, scope: &ChatScope, payload: &str) -> Result<EventRecord, ApplicationError> {
        let submission = EventSubmission::decode(payload)?;
        let record = EventRecord::try_from(submission)?;
        self.event_store.append(scope, record.clone()).await?;
        Ok(record)
    }
}
