//! Room SDK boundary.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::session::SessionEvent;
use super::types::{ConnectOptions, MediaTrack, Room, VideoError};

/// The external video SDK.
///
/// `connect` resolves with a snapshot of the joined room. Afterwards the
/// implementation posts `ParticipantConnected`, `ParticipantDisconnected`
/// and `TrackSubscribed` events to `events` as the SDK reports them.
#[async_trait]
pub trait RoomConnector: Send + Sync {
    async fn connect(
        &self,
        token: &str,
        options: &ConnectOptions,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Result<Room, VideoError>;

    /// Open the local camera without joining a room.
    async fn create_local_video_track(&self) -> Result<MediaTrack, VideoError>;
}
