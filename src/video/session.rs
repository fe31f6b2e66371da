//! Video session controller.
//!
//! ARCHITECTURE
//! ============
//! `connect` creates the session in `Connecting` and spawns two tasks that
//! race: the SDK join and the connect-timeout watchdog. Both report back as
//! `SessionEvent`s on the controller's channel, as do all later SDK events.
//! `step`/`run` drain the channel and feed `handle`, which is synchronous so
//! tests can drive the state machine without a runtime-bound SDK.
//!
//! TRADE-OFFS
//! ==========
//! The watchdog checks a latch (`ever_connected`), not the live status: a
//! call that connected once and then lost its remote party is not reported
//! as "never established". Join failure is terminal; there is no retry.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::connector::RoomConnector;
use super::registry::ParticipantRegistry;
use super::slots::{SlotId, TrackSlotManager};
use super::types::{
    ConnectOptions, MediaTrack, NOT_ESTABLISHED_MESSAGE, Participant, Role, Room, SessionStatus, TrackKind, VideoError,
};

// =============================================================================
// EVENTS
// =============================================================================

/// Everything that can happen to a session, in the order it is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Joined(Room),
    ConnectFailed { message: String },
    ParticipantConnected(Participant),
    ParticipantDisconnected { identity: String },
    TrackSubscribed { identity: String, track: MediaTrack },
    WatchdogElapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    pub token: String,
    pub room: String,
    pub enable_local_video: bool,
    pub role: Role,
}

// =============================================================================
// SESSION STATE
// =============================================================================

#[derive(Debug, Clone)]
pub struct VideoSession {
    status: SessionStatus,
    participants: ParticipantRegistry,
    local_track_attached: bool,
    /// Set the first time status reaches `Connected`; never cleared.
    ever_connected: bool,
    role: Role,
    enable_local_video: bool,
}

impl VideoSession {
    fn new(role: Role, enable_local_video: bool) -> Self {
        Self {
            status: SessionStatus::Connecting,
            participants: ParticipantRegistry::new(),
            local_track_attached: false,
            ever_connected: false,
            role,
            enable_local_video,
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn participants(&self) -> &ParticipantRegistry {
        &self.participants
    }

    #[must_use]
    pub fn local_track_attached(&self) -> bool {
        self.local_track_attached
    }

    #[must_use]
    pub fn ever_connected(&self) -> bool {
        self.ever_connected
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Re-derive status from the registry. A failed session stays failed.
    fn refresh_status(&mut self) -> SessionStatus {
        if self.status != SessionStatus::Failed {
            self.status = SessionStatus::derive(self.participants.len());
            if self.status == SessionStatus::Connected {
                self.ever_connected = true;
            }
        }
        self.status
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct VideoSessionController {
    session: Option<VideoSession>,
    slots: TrackSlotManager,
    /// Text of the `connection-status` element.
    display: watch::Sender<String>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    connect_timeout: Duration,
}

impl VideoSessionController {
    #[must_use]
    pub fn new(connect_timeout: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (display, _) = watch::channel(String::new());
        Self { session: None, slots: TrackSlotManager::new(), display, events_tx, events_rx, connect_timeout }
    }

    /// Sender for SDK events. Also the injection point for fake event sources.
    #[must_use]
    pub fn events(&self) -> mpsc::UnboundedSender<SessionEvent> {
        self.events_tx.clone()
    }

    #[must_use]
    pub fn subscribe_display(&self) -> watch::Receiver<String> {
        self.display.subscribe()
    }

    #[must_use]
    pub fn display_text(&self) -> String {
        self.display.borrow().clone()
    }

    #[must_use]
    pub fn session(&self) -> Option<&VideoSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn slots(&self) -> &TrackSlotManager {
        &self.slots
    }

    /// Start joining a room. Returns the handle of the join task.
    ///
    /// # Errors
    ///
    /// Returns `VideoError::SessionActive` if this controller already has a
    /// session.
    pub fn connect(
        &mut self,
        connector: Arc<dyn RoomConnector>,
        request: ConnectRequest,
    ) -> Result<JoinHandle<()>, VideoError> {
        self.begin(&request)?;

        let tx = self.events_tx.clone();
        let options = ConnectOptions::for_room(request.room, request.enable_local_video);
        let token = request.token;
        Ok(tokio::spawn(async move {
            let event = match connector.connect(&token, &options, tx.clone()).await {
                Ok(room) => SessionEvent::Joined(room),
                Err(e) => SessionEvent::ConnectFailed { message: e.to_string() },
            };
            let _ = tx.send(event);
        }))
    }

    /// Create the session and arm the watchdog.
    fn begin(&mut self, request: &ConnectRequest) -> Result<(), VideoError> {
        if self.session.is_some() {
            return Err(VideoError::SessionActive);
        }
        info!(room = %request.room, role = ?request.role, "connecting to video room");
        self.session = Some(VideoSession::new(request.role, request.enable_local_video));
        publish(&self.display, SessionStatus::Connecting.label());

        let tx = self.events_tx.clone();
        let timeout = self.connect_timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let _ = tx.send(SessionEvent::WatchdogElapsed);
        });
        Ok(())
    }

    /// Show the local camera before joining.
    ///
    /// # Errors
    ///
    /// Returns the SDK error if the camera track cannot be opened.
    pub async fn show_preview(&mut self, connector: &dyn RoomConnector) -> Result<(), VideoError> {
        let track = connector.create_local_video_track().await?;
        self.slots.attach(SlotId::Local, track.attach());
        Ok(())
    }

    /// Wait for the next queued event and handle it.
    pub async fn step(&mut self) {
        // The controller holds a sender, so the channel never closes.
        if let Some(event) = self.events_rx.recv().await {
            self.handle(event);
        }
    }

    /// Dispatch events for the lifetime of the page. Never returns.
    pub async fn run(mut self) {
        loop {
            self.step().await;
        }
    }

    pub fn handle(&mut self, event: SessionEvent) {
        let Some(session) = self.session.as_mut() else {
            warn!(?event, "video event before connect ignored");
            return;
        };

        match event {
            SessionEvent::Joined(room) => {
                info!(room = %room.name, participants = room.participants.len(), "joined video room");
                if session.enable_local_video {
                    let local_video = room
                        .local_tracks
                        .iter()
                        .filter(|p| p.kind == TrackKind::Video)
                        .filter_map(|p| p.track.as_ref());
                    for track in local_video {
                        self.slots.attach(SlotId::Local, track.attach());
                        session.local_track_attached = true;
                    }
                }
                for participant in &room.participants {
                    info!(identity = %participant.identity, "participant already in room");
                    session.participants.register(participant, &mut self.slots);
                }
                let status = session.refresh_status();
                publish(&self.display, status.label());
            }

            SessionEvent::ConnectFailed { message } => {
                warn!(error = %message, "unable to connect to video room");
                session.status = SessionStatus::Failed;
                publish(&self.display, session.role.connect_failed_message());
            }

            SessionEvent::ParticipantConnected(participant) => {
                info!(identity = %participant.identity, "participant connected");
                session.participants.register(&participant, &mut self.slots);
                let status = session.refresh_status();
                publish(&self.display, status.label());
            }

            SessionEvent::ParticipantDisconnected { identity } => {
                info!(%identity, "participant disconnected");
                session.participants.unregister(&identity);
                let status = session.refresh_status();
                publish(&self.display, status.label());
            }

            SessionEvent::TrackSubscribed { identity, track } => {
                debug!(%identity, kind = %track.kind, "track subscribed");
                session.participants.track_subscribed(&identity, &track, &mut self.slots);
            }

            SessionEvent::WatchdogElapsed => {
                if session.ever_connected {
                    debug!("connect watchdog elapsed after connection");
                    return;
                }
                warn!(timeout_secs = self.connect_timeout.as_secs(), "video connection not established");
                publish(&self.display, NOT_ESTABLISHED_MESSAGE);
            }
        }
    }
}

fn publish(display: &watch::Sender<String>, text: &str) {
    display.send_if_modified(|current| {
        if current.as_str() == text {
            return false;
        }
        text.clone_into(current);
        true
    });
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
