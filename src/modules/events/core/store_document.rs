// Whole persisted document of the event store.
//
// Purpose
// - Model both persisted shapes: one global list, or one list per chat scope.
//
// Responsibilities
// - Resolve which records a scope sees and where an appended record goes.
// - Never reorder records; chronological order is derived by the query side.

use crate::modules::events::core::chat_scope::ChatScope;
use crate::modules::events::core::event_record::EventRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreLayout {
    /// A single JSON array shared by every chat.
    Unscoped,
    /// A JSON object keyed by chat scope.
    #[default]
    Scoped,
}

impl FromStr for StoreLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scoped" => Ok(StoreLayout::Scoped),
            "unscoped" => Ok(StoreLayout::Unscoped),
            other => Err(format!("unknown store layout '{other}', expected 'scoped' or 'unscoped'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreDocument {
    Unscoped(Vec<EventRecord>),
    Scoped(BTreeMap<String, Vec<EventRecord>>),
}

impl StoreDocument {
    pub fn empty(layout: StoreLayout) -> Self {
        match layout {
            StoreLayout::Unscoped => StoreDocument::Unscoped(Vec::new()),
            StoreLayout::Scoped => StoreDocument::Scoped(BTreeMap::new()),
        }
    }

    pub fn layout(&self) -> StoreLayout {
        match self {
            StoreDocument::Unscoped(_) => StoreLayout::Unscoped,
            StoreDocument::Scoped(_) => StoreLayout::Scoped,
        }
    }

    /// Records visible to `scope`. The unscoped shape ignores the scope.
    pub fn records_for(&self, scope: &ChatScope) -> &[EventRecord] {
        match self {
            StoreDocument::Unscoped(records) => records,
            StoreDocument::Scoped(by_scope) => by_scope
                .get(scope.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    pub fn into_records_for(self, scope: &ChatScope) -> Vec<EventRecord> {
        match self {
            StoreDocument::Unscoped(records) => records,
            StoreDocument::Scoped(mut by_scope) => by_scope.remove(scope.as_str()).unwrap_or_default(),
        }
    }

    pub fn push(&mut self, scope: &ChatScope, record: EventRecord) {
        match self {
            StoreDocument::Unscoped(records) => records.push(record),
            StoreDocument::Scoped(by_scope) => by_scope
                .entry(scope.as_str().to_string())
                .or_default()
                .push(record),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StoreDocument::Unscoped(records) => records.len(),
            StoreDocument::Scoped(by_scope) => by_scope.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
