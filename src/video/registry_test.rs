use super::*;
use crate::video::types::{SessionStatus, TrackPublication};

fn patient() -> Participant {
    Participant::new(
        "patient-1",
        vec![
            TrackPublication::subscribed(MediaTrack::new("PA", TrackKind::Audio)),
            TrackPublication::unsubscribed(TrackKind::Video),
        ],
    )
}

#[test]
fn register_attaches_only_subscribed_publications() {
    let mut registry = ParticipantRegistry::new();
    let mut slots = TrackSlotManager::new();
    registry.register(&patient(), &mut slots);

    let remote = slots.slot(SlotId::Remote);
    assert_eq!(remote.elements().len(), 1);
    assert_eq!(remote.get(TrackKind::Audio).unwrap().track_sid, "PA");

    let state = registry.get("patient-1").unwrap();
    assert_eq!(state.subscribed_track_kinds, BTreeSet::from([TrackKind::Audio]));
}

#[test]
fn late_track_subscription_attaches() {
    let mut registry = ParticipantRegistry::new();
    let mut slots = TrackSlotManager::new();
    registry.register(&patient(), &mut slots);

    assert!(registry.track_subscribed("patient-1", &MediaTrack::new("PV", TrackKind::Video), &mut slots));
    assert_eq!(slots.slot(SlotId::Remote).get(TrackKind::Video).unwrap().track_sid, "PV");
    assert!(registry.get("patient-1").unwrap().subscribed_track_kinds.contains(&TrackKind::Video));
}

#[test]
fn track_for_unknown_identity_is_ignored() {
    let mut registry = ParticipantRegistry::new();
    let mut slots = TrackSlotManager::new();
    assert!(!registry.track_subscribed("ghost", &MediaTrack::new("GV", TrackKind::Video), &mut slots));
    assert!(slots.slot(SlotId::Remote).elements().is_empty());
}

#[test]
fn later_participant_replaces_same_kind_in_shared_slot() {
    let mut registry = ParticipantRegistry::new();
    let mut slots = TrackSlotManager::new();
    registry.register(
        &Participant::new("a", vec![TrackPublication::subscribed(MediaTrack::new("AV", TrackKind::Video))]),
        &mut slots,
    );
    registry.register(
        &Participant::new("b", vec![TrackPublication::subscribed(MediaTrack::new("BV", TrackKind::Video))]),
        &mut slots,
    );
    let remote = slots.slot(SlotId::Remote);
    assert_eq!(remote.elements().len(), 1);
    assert_eq!(remote.get(TrackKind::Video).unwrap().track_sid, "BV");
}

#[test]
fn unregister_keeps_stale_element() {
    let mut registry = ParticipantRegistry::new();
    let mut slots = TrackSlotManager::new();
    registry.register(&patient(), &mut slots);

    assert!(registry.unregister("patient-1").is_some());
    assert!(registry.is_empty());
    assert_eq!(slots.slot(SlotId::Remote).elements().len(), 1);
}

#[test]
fn registry_size_drives_status() {
    let mut registry = ParticipantRegistry::new();
    let mut slots = TrackSlotManager::new();
    assert_eq!(SessionStatus::derive(registry.len()), SessionStatus::Disconnected);

    registry.register(&patient(), &mut slots);
    assert_eq!(SessionStatus::derive(registry.len()), SessionStatus::Connected);

    registry.unregister("patient-1");
    assert_eq!(SessionStatus::derive(registry.len()), SessionStatus::Disconnected);
}

#[test]
fn register_same_identity_twice_counts_once() {
    let mut registry = ParticipantRegistry::new();
    let mut slots = TrackSlotManager::new();
    registry.register(&patient(), &mut slots);
    registry.register(&patient(), &mut slots);
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("patient-1"));
}
