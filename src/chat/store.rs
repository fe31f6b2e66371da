use std::collections::HashSet;

use super::types::MessageRecord;

/// Append-only message log in first-seen order, with an id set for O(1)
/// membership checks.
#[derive(Debug, Clone, Default)]
pub struct ChatFeedStore {
    records: Vec<MessageRecord>,
    known: HashSet<String>,
}

impl ChatFeedStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.known.contains(id)
    }

    /// Append `record` unless its id is already known. Returns whether it was added.
    pub fn insert(&mut self, record: MessageRecord) -> bool {
        if !self.known.insert(record.id.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    #[must_use]
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
