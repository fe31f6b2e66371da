//! Chat sync engine — fetch, merge, render on a fixed cadence.
//!
//! DESIGN
//! ======
//! One spawned task polls the feed, merges the result into the shared
//! panel, then sleeps the poll interval. The next fetch starts only after
//! the previous cycle finished, so at most one request is in flight. A
//! failed cycle is logged and the loop carries on after the same delay.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::feed::ChatFeed;
use super::panel::{SharedPanel, lock_panel};
use super::types::ChatError;
use super::view::ChatView;

pub struct ChatSyncEngine<V> {
    feed: Arc<dyn ChatFeed>,
    panel: SharedPanel<V>,
    interval: Duration,
}

impl<V: ChatView + 'static> ChatSyncEngine<V> {
    #[must_use]
    pub fn new(feed: Arc<dyn ChatFeed>, panel: SharedPanel<V>, interval: Duration) -> Self {
        Self { feed, panel, interval }
    }

    /// Spawn the poll loop. It runs until the runtime shuts down.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(self) {
        loop {
            match self.poll().await {
                Ok(0) => {}
                Ok(added) => debug!(added, "chat messages merged"),
                Err(e) => warn!(error = %e, "chat poll failed"),
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One fetch-merge-render cycle. Returns the number of new messages.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the panel is left untouched in that case.
    pub async fn poll(&self) -> Result<usize, ChatError> {
        let records = self.feed.fetch().await?;
        let mut panel = lock_panel(&self.panel);
        Ok(panel.merge(records))
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;
