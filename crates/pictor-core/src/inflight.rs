//! Single-slot guard for the one outstanding generation per session.

use std::sync::atomic::{AtomicBool, Ordering};

/// At most one holder at a time; a second claim fails instead of waiting.
#[derive(Debug, Default)]
pub(crate) struct InFlightSlot {
    taken: AtomicBool,
}

impl InFlightSlot {
    /// Claim the slot, or `None` if someone else holds it.
    pub(crate) fn try_acquire(&self) -> Option<InFlightPermit<'_>> {
        self.taken
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightPermit { slot: self })
    }

    pub(crate) fn is_taken(&self) -> bool {
        self.taken.load(Ordering::Acquire)
    }
}

/// Releases the slot on drop, on every exit path.
#[derive(Debug)]
pub(crate) struct InFlightPermit<'a> {
    slot: &'a InFlightSlot,
}

impl Drop for InFlightPermit<'_> {
    fn drop(&mut self) {
        self.slot.taken.store(false, Ordering::Release);
    }
}
