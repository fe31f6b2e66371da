use super::types::{MediaElement, TrackKind};

/// The page's media containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotId {
    /// `local-media`: this side's camera.
    Local,
    /// `remote-media`: shared by every remote participant.
    Remote,
}

/// A container holding at most one element per track kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSlot {
    elements: Vec<MediaElement>,
}

impl TrackSlot {
    /// Replace any element of the same kind, then append.
    pub fn attach(&mut self, element: MediaElement) {
        self.elements.retain(|e| e.kind != element.kind);
        self.elements.push(element);
    }

    #[must_use]
    pub fn elements(&self) -> &[MediaElement] {
        &self.elements
    }

    #[must_use]
    pub fn get(&self, kind: TrackKind) -> Option<&MediaElement> {
        self.elements.iter().find(|e| e.kind == kind)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackSlotManager {
    local: TrackSlot,
    remote: TrackSlot,
}

impl TrackSlotManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, slot: SlotId, element: MediaElement) {
        self.slot_mut(slot).attach(element);
    }

    #[must_use]
    pub fn slot(&self, slot: SlotId) -> &TrackSlot {
        match slot {
            SlotId::Local => &self.local,
            SlotId::Remote => &self.remote,
        }
    }

    fn slot_mut(&mut self, slot: SlotId) -> &mut TrackSlot {
        match slot {
            SlotId::Local => &mut self.local,
            SlotId::Remote => &mut self.remote,
        }
    }
}

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;
