//! Client-side core of the clinic consultation page.
//!
//! DESIGN
//! ======
//! Two independent halves share nothing but configuration:
//! - `chat`: a polling sync engine that merges the remote message log into
//!   an append-only store, plus a composer that echoes outgoing messages
//!   before the server acknowledges them.
//! - `video`: a session controller that consumes room events from a single
//!   channel and derives the displayed connection status.
//!
//! Page surfaces (message list, media containers, status text) and the
//! remote collaborators (chat endpoint, video SDK) are traits, so the core
//! runs headless and is tested with in-memory fakes.

pub mod chat;
pub mod config;
pub mod video;
