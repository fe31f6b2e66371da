//! Connected remote participants.
//!
//! All remote tracks go to the single `remote-media` slot, so a later
//! participant's track replaces an earlier one of the same kind. Leaving
//! does not detach anything; the stale element stays until the next track
//! of that kind arrives.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::slots::{SlotId, TrackSlotManager};
use super::types::{MediaTrack, Participant, TrackKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantState {
    pub identity: String,
    pub subscribed_track_kinds: BTreeSet<TrackKind>,
}

#[derive(Debug, Clone, Default)]
pub struct ParticipantRegistry {
    participants: HashMap<String, ParticipantState>,
}

impl ParticipantRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `participant` and attach its already-subscribed tracks.
    ///
    /// Registering an identity again refreshes its tracks.
    pub fn register(&mut self, participant: &Participant, slots: &mut TrackSlotManager) {
        let state = self
            .participants
            .entry(participant.identity.clone())
            .or_insert_with(|| ParticipantState {
                identity: participant.identity.clone(),
                subscribed_track_kinds: BTreeSet::new(),
            });

        for track in participant.tracks.iter().filter_map(|p| p.track.as_ref()) {
            slots.attach(SlotId::Remote, track.attach());
            state.subscribed_track_kinds.insert(track.kind);
        }
    }

    /// Attach a track subscribed after registration. Tracks of participants
    /// that are not registered are ignored. Returns whether it was attached.
    pub fn track_subscribed(&mut self, identity: &str, track: &MediaTrack, slots: &mut TrackSlotManager) -> bool {
        let Some(state) = self.participants.get_mut(identity) else {
            debug!(%identity, kind = %track.kind, "track for unregistered participant ignored");
            return false;
        };
        slots.attach(SlotId::Remote, track.attach());
        state.subscribed_track_kinds.insert(track.kind);
        true
    }

    pub fn unregister(&mut self, identity: &str) -> Option<ParticipantState> {
        self.participants.remove(identity)
    }

    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&ParticipantState> {
        self.participants.get(identity)
    }

    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.participants.contains_key(identity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
