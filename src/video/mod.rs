//! Video — session controller layered on an external room SDK.
//!
//! DESIGN
//! ======
//! The SDK's callbacks are modelled as `SessionEvent` messages on a single
//! channel. The controller owns all session state and handles events one at
//! a time in arrival order: join result, participant connect/disconnect,
//! track subscriptions, and the connect-timeout watchdog all post into the
//! same queue. Connection status is derived from the participant registry
//! after every event rather than set directly.
//!
//! The page's media containers are `TrackSlot`s; each holds at most one
//! element per track kind, so a later track of the same kind replaces the
//! earlier one.

pub mod connector;
pub mod registry;
pub mod session;
pub mod slots;
pub mod types;

pub use connector::RoomConnector;
pub use registry::{ParticipantRegistry, ParticipantState};
pub use session::{ConnectRequest, SessionEvent, VideoSession, VideoSessionController};
pub use slots::{SlotId, TrackSlot, TrackSlotManager};
pub use types::{
    ConnectOptions, MediaElement, MediaTrack, Participant, Role, Room, SessionStatus, TrackKind, TrackPublication,
    VideoCodec, VideoError,
};
