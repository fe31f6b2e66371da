//! Message composer — optimistic local echo of outgoing messages.
//!
//! The POST runs detached; the sender sees the message immediately under
//! the local author name. When the server later returns the same id in the
//! feed, the panel's id guard drops it.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use super::feed::ChatFeed;
use super::panel::{SharedPanel, lock_panel};
use super::types::{OutgoingDraft, now_millis};
use super::view::ChatView;

pub struct MessageComposer<V> {
    feed: Arc<dyn ChatFeed>,
    panel: SharedPanel<V>,
}

impl<V: ChatView> MessageComposer<V> {
    #[must_use]
    pub fn new(feed: Arc<dyn ChatFeed>, panel: SharedPanel<V>) -> Self {
        Self { feed, panel }
    }

    /// Send `body` and echo it locally. Returns the generated id, or `None`
    /// for an empty body.
    ///
    /// Must be called inside a tokio runtime. The outcome of the POST is
    /// only logged.
    pub fn send(&self, body: &str) -> Option<String> {
        if body.is_empty() {
            return None;
        }

        let draft = OutgoingDraft { id: Uuid::new_v4().to_string(), body: body.to_string() };

        let feed = Arc::clone(&self.feed);
        let outgoing = draft.clone();
        tokio::spawn(async move {
            match feed.send(&outgoing).await {
                Ok(()) => debug!(id = %outgoing.id, "chat message stored"),
                Err(e) => warn!(id = %outgoing.id, error = %e, "chat send failed"),
            }
        });

        lock_panel(&self.panel).echo(draft.to_local_record(now_millis()));
        Some(draft.id)
    }
}

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;
