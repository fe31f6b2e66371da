//! In-memory `ChatFeed` for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::feed::ChatFeed;
use super::types::{ChatError, MessageRecord, OutgoingDraft};

pub(crate) fn record(id: &str, name: &str, time: f64, text: &str) -> MessageRecord {
    MessageRecord { id: id.to_owned(), author_display_name: name.to_owned(), sent_at: time, body: text.to_owned() }
}

/// Serves scripted fetch results in order, then repeats the last one.
#[derive(Default)]
pub(crate) struct ScriptedFeed {
    fetches: Mutex<VecDeque<Result<Vec<MessageRecord>, ChatError>>>,
    last: Mutex<Vec<MessageRecord>>,
    pub(crate) fetch_count: Mutex<usize>,
    pub(crate) sent: Mutex<Vec<OutgoingDraft>>,
    pub(crate) fail_sends: bool,
}

impl ScriptedFeed {
    pub(crate) fn new(script: Vec<Result<Vec<MessageRecord>, ChatError>>) -> Self {
        Self { fetches: Mutex::new(script.into()), ..Self::default() }
    }

    pub(crate) fn failing_sends() -> Self {
        Self { fail_sends: true, ..Self::default() }
    }

    pub(crate) fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }

    pub(crate) fn sent(&self) -> Vec<OutgoingDraft> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatFeed for ScriptedFeed {
    async fn fetch(&self) -> Result<Vec<MessageRecord>, ChatError> {
        *self.fetch_count.lock().unwrap() += 1;
        let next = self.fetches.lock().unwrap().pop_front();
        match next {
            Some(Ok(records)) => {
                self.last.lock().unwrap().clone_from(&records);
                Ok(records)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last.lock().unwrap().clone()),
        }
    }

    async fn send(&self, draft: &OutgoingDraft) -> Result<(), ChatError> {
        self.sent.lock().unwrap().push(draft.clone());
        if self.fail_sends {
            return Err(ChatError::Status { status: 403, body: "CSRF verification failed".into() });
        }
        Ok(())
    }
}
