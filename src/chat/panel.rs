//! Store + view pair shared by the poll loop and the composer.
//!
//! All mutations go through `insert_and_render`, which checks the store's
//! id set and then the view's element ids, so each message renders once no
//! matter which path sees it first.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::store::ChatFeedStore;
use super::types::{MessageRecord, RenderedMessage};
use super::view::ChatView;

pub type SharedPanel<V> = Arc<Mutex<ChatPanel<V>>>;

pub struct ChatPanel<V> {
    store: ChatFeedStore,
    view: V,
}

impl<V: ChatView> ChatPanel<V> {
    #[must_use]
    pub fn new(view: V) -> Self {
        Self { store: ChatFeedStore::new(), view }
    }

    #[must_use]
    pub fn shared(view: V) -> SharedPanel<V> {
        Arc::new(Mutex::new(Self::new(view)))
    }

    #[must_use]
    pub fn store(&self) -> &ChatFeedStore {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Merge a fetched batch in remote order. Returns how many were new.
    ///
    /// Pinned state is sampled before the first insertion; the list follows
    /// new content only if the reader was already at the bottom.
    pub fn merge(&mut self, records: Vec<MessageRecord>) -> usize {
        let pinned = self.view.viewport().is_pinned();

        let mut added = 0;
        for record in records {
            if self.insert_and_render(record) {
                added += 1;
            }
        }

        if pinned {
            self.view.scroll_to_bottom();
        }
        added
    }

    /// Insert a locally composed message. Always scrolls to the bottom.
    pub fn echo(&mut self, record: MessageRecord) -> bool {
        let added = self.insert_and_render(record);
        self.view.clear_input();
        self.view.scroll_to_bottom();
        added
    }

    fn insert_and_render(&mut self, record: MessageRecord) -> bool {
        if self.store.contains(&record.id) {
            return false;
        }
        let rendered = RenderedMessage::from_record(&record);
        self.store.insert(record);

        // Overlapping cycles may already have rendered this id.
        if self.view.contains_element(&rendered.id) {
            debug!(id = %rendered.id, "chat element already rendered");
        } else {
            self.view.append(rendered);
        }
        true
    }
}

/// Lock a shared panel, recovering the guard if a previous holder panicked.
pub fn lock_panel<V>(panel: &Mutex<ChatPanel<V>>) -> MutexGuard<'_, ChatPanel<V>> {
    panel.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;
