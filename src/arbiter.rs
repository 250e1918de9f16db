//! Turns raw direction input into the heading used by the next tick.

use log::debug;

use crate::grid::Heading;

/// Rejects an exact reversal of `current`, otherwise takes `requested`.
pub fn propose(current: Heading, requested: Heading) -> Heading {
    if requested.is_opposite(current) {
        current
    } else {
        requested
    }
}

/// Single slot holding the latest accepted request until the next tick.
///
/// Every request is judged against the heading committed by the last tick,
/// never against whatever is already sitting in the slot, so a burst of
/// presses between two ticks cannot chain into a reversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeadingMailbox {
    slot: Option<Heading>,
}

impl HeadingMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the request was accepted. Rejected requests leave any
    /// earlier accepted value in place.
    pub fn request(&mut self, committed: Heading, requested: Heading) -> bool {
        if propose(committed, requested) != requested {
            debug!("Rejected reversal from {committed} to {requested}");
            return false;
        }
        self.slot = Some(requested);
        true
    }

    pub fn pending(&self) -> Option<Heading> {
        self.slot
    }

    /// Empties the slot and yields the heading for this tick.
    pub fn drain(&mut self, committed: Heading) -> Heading {
        match self.slot.take() {
            Some(requested) => propose(committed, requested),
            None => committed,
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
