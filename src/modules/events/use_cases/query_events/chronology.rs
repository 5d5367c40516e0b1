// Pure query functions over a loaded snapshot of one scope.
//
// Responsibilities
// - Order records by their parsed start instant, keeping storage order for ties.
// - Tag each record as past or upcoming relative to the given `now`.
// - Never perform input or output.

use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::core::temporal_status::TemporalStatus;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedEvent {
    pub record: EventRecord,
    pub status: TemporalStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chronology {
    Empty,
    Events(Vec<AnnotatedEvent>),
}

impl Chronology {
    /// Records in order, split into those before `now` and the rest.
    pub fn partition(&self) -> (Vec<&AnnotatedEvent>, Vec<&AnnotatedEvent>) {
        match self {
            Chronology::Empty => (Vec::new(), Vec::new()),
            Chronology::Events(events) => events
                .iter()
                .partition(|e| e.status == TemporalStatus::Past),
        }
    }
}

fn sort_chronologically(records: &mut [EventRecord]) {
    // sort_by_key is stable, which is the tie-break.
    records.sort_by_key(EventRecord::starts_at);
}

pub fn list_chronological(mut records: Vec<EventRecord>, now: NaiveDateTime) -> Chronology {
    if records.is_empty() {
        return Chronology::Empty;
    }
    sort_chronologically(&mut records);
    Chronology::Events(
        records
            .into_iter()
            .map(|record| AnnotatedEvent {
                status: TemporalStatus::of(record.starts_at(), now),
                record,
            })
            .collect(),
    )
}

/// The earliest record overall. Past records are not skipped.
pub fn find_next(mut records: Vec<EventRecord>) -> Option<EventRecord> {
    sort_chronologically(&mut records);
    records.into_iter().next()
}
