//! Chat — polling sync of the consultation message log.
//!
//! DESIGN
//! ======
//! The remote feed is the source of truth for messages this client has not
//! seen; the local `ChatFeedStore` is append-only and keyed by message id.
//! Both the poll loop and the composer funnel through `ChatPanel`, which
//! applies the id guard before anything is rendered, so a message echoed
//! locally and later returned by the server renders once.
//!
//! TRADE-OFFS
//! ==========
//! Polling instead of a push channel keeps the server stateless at the cost
//! of up to one poll interval of latency for the remote party's messages.

pub mod composer;
pub mod csrf;
pub mod feed;
pub mod panel;
pub mod store;
pub mod sync;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use composer::MessageComposer;
pub use feed::{ChatFeed, HttpChatFeed};
pub use panel::{ChatPanel, SharedPanel};
pub use store::ChatFeedStore;
pub use sync::ChatSyncEngine;
pub use types::{ChatError, MessageRecord, OutgoingDraft, RenderedMessage};
pub use view::{ChatView, MessageList, Viewport};
