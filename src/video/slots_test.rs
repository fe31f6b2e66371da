use super::*;
use crate::video::types::MediaTrack;

fn element(sid: &str, kind: TrackKind) -> MediaElement {
    MediaTrack::new(sid, kind).attach()
}

#[test]
fn second_video_replaces_first() {
    let mut slot = TrackSlot::default();
    slot.attach(element("v1", TrackKind::Video));
    slot.attach(element("v2", TrackKind::Video));
    assert_eq!(slot.elements(), &[element("v2", TrackKind::Video)]);
}

#[test]
fn video_and_audio_coexist() {
    let mut slot = TrackSlot::default();
    slot.attach(element("v1", TrackKind::Video));
    slot.attach(element("a1", TrackKind::Audio));
    assert_eq!(slot.elements().len(), 2);
    assert_eq!(slot.get(TrackKind::Video).unwrap().track_sid, "v1");
    assert_eq!(slot.get(TrackKind::Audio).unwrap().track_sid, "a1");
}

#[test]
fn repeated_attach_does_not_accumulate() {
    let mut slot = TrackSlot::default();
    for _ in 0..10 {
        slot.attach(element("v1", TrackKind::Video));
        slot.attach(element("a1", TrackKind::Audio));
    }
    assert_eq!(slot.elements().len(), 2);
}

#[test]
fn replacing_one_kind_keeps_the_other() {
    let mut slot = TrackSlot::default();
    slot.attach(element("a1", TrackKind::Audio));
    slot.attach(element("v1", TrackKind::Video));
    slot.attach(element("a2", TrackKind::Audio));
    assert_eq!(slot.get(TrackKind::Video).unwrap().track_sid, "v1");
    assert_eq!(slot.get(TrackKind::Audio).unwrap().track_sid, "a2");
}

#[test]
fn manager_keeps_local_and_remote_apart() {
    let mut slots = TrackSlotManager::new();
    slots.attach(SlotId::Local, element("local", TrackKind::Video));
    slots.attach(SlotId::Remote, element("remote", TrackKind::Video));
    assert_eq!(slots.slot(SlotId::Local).get(TrackKind::Video).unwrap().track_sid, "local");
    assert_eq!(slots.slot(SlotId::Remote).get(TrackKind::Video).unwrap().track_sid, "remote");
}
