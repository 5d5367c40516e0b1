use crate::modules::events::core::chat_scope::ChatScope;
use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::use_cases::query_events::chronology::{
    Chronology, find_next, list_chronological,
};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Read side: loads a fresh snapshot of the scope for every query.
pub struct EventQueries<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> EventQueries<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn list_chronological(
        &self,
        scope: &ChatScope,
        now: NaiveDateTime,
    ) -> Result<Chronology, EventStoreError> {
        let records = self.event_store.load(scope).await?;
        Ok(list_chronological(records, now))
    }

    pub async fn find_next(&self, scope: &ChatScope) -> Result<Option<EventRecord>, EventStoreError> {
        let records = self.event_store.load(scope).await?;
        Ok(find_next(records))
    }
}
