//! Video value types mirrored from the room SDK.

use std::fmt;

use serde::Serialize;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum VideoError {
    /// The room could not be joined.
    #[error("room connect failed: {0}")]
    Connect(String),

    /// A local track could not be created.
    #[error("local track failed: {0}")]
    Track(String),

    #[error("a video session is already active")]
    SessionActive,
}

// =============================================================================
// TRACKS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Video,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => f.write_str("audio"),
            Self::Video => f.write_str("video"),
        }
    }
}

/// A live media track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTrack {
    pub sid: String,
    pub kind: TrackKind,
}

impl MediaTrack {
    #[must_use]
    pub fn new(sid: impl Into<String>, kind: TrackKind) -> Self {
        Self { sid: sid.into(), kind }
    }

    /// Produce a renderable element for this track.
    #[must_use]
    pub fn attach(&self) -> MediaElement {
        MediaElement { kind: self.kind, track_sid: self.sid.clone() }
    }
}

/// A rendered `<audio>` or `<video>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaElement {
    pub kind: TrackKind,
    pub track_sid: String,
}

/// A participant's offered track; `track` is present once subscribed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPublication {
    pub kind: TrackKind,
    pub track: Option<MediaTrack>,
}

impl TrackPublication {
    #[must_use]
    pub fn subscribed(track: MediaTrack) -> Self {
        Self { kind: track.kind, track: Some(track) }
    }

    #[must_use]
    pub fn unsubscribed(kind: TrackKind) -> Self {
        Self { kind, track: None }
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.track.is_some()
    }
}

// =============================================================================
// ROOM
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub identity: String,
    pub tracks: Vec<TrackPublication>,
}

impl Participant {
    #[must_use]
    pub fn new(identity: impl Into<String>, tracks: Vec<TrackPublication>) -> Self {
        Self { identity: identity.into(), tracks }
    }
}

/// Snapshot of a room at the moment it was joined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Room {
    pub name: String,
    pub local_tracks: Vec<TrackPublication>,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VideoCodec {
    #[serde(rename = "VP8")]
    Vp8,
    #[serde(rename = "H264")]
    H264,
}

/// Options handed to the SDK's connect call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    pub name: String,
    pub audio: bool,
    pub video: bool,
    pub preferred_video_codecs: Vec<VideoCodec>,
}

impl ConnectOptions {
    /// Audio always on; camera per caller; VP8 preferred over H264.
    #[must_use]
    pub fn for_room(room: impl Into<String>, enable_local_video: bool) -> Self {
        Self {
            name: room.into(),
            audio: true,
            video: enable_local_video,
            preferred_video_codecs: vec![VideoCodec::Vp8, VideoCodec::H264],
        }
    }
}

// =============================================================================
// SESSION STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
    Failed,
}

impl SessionStatus {
    /// Status after a join or participant change.
    #[must_use]
    pub fn derive(participant_count: usize) -> Self {
        if participant_count > 0 { Self::Connected } else { Self::Disconnected }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::Failed => "Error",
        }
    }
}

/// Who is on this side of the call. Failure wording differs per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Doctor,
    Patient,
}

impl Role {
    #[must_use]
    pub fn connect_failed_message(self) -> &'static str {
        match self {
            Self::Doctor => "Could not connect to the consultation room. Please reload the page.",
            Self::Patient => "Could not connect to the doctor. Please check your connection and reload the page.",
        }
    }
}

pub const NOT_ESTABLISHED_MESSAGE: &str = "Connection not established. Please reload the page.";

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
