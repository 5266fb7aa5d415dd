//! Local-variable slot allocation (`spec.md` §4.D).
//!
//! Slot 0 is reserved for the implicit nothing-argument `main`'s JVM
//! signature still carries (`args: [Ljava/lang/String;` counts as slot 0
//! only when present; latc's generated `main` never references it, so the
//! allocator simply never hands slot 0 out). Slots are assigned the first
//! time a name is declared and reused — not freed and recycled — on every
//! later reassignment to that same name within its scope.

use rustc_hash::FxHashMap;

pub struct LocalSlots {
    slots: FxHashMap<String, u16>,
    next: u16,
}

impl LocalSlots {
    #[must_use]
    pub fn new() -> Self {
        LocalSlots {
            slots: FxHashMap::default(),
            next: 1,
        }
    }

    /// Allocates a fresh slot for `name` if it has none yet in the current
    /// mapping, otherwise returns its existing slot.
    pub fn slot_for(&mut self, name: &str) -> u16 {
        if let Some(&slot) = self.slots.get(name) {
            return slot;
        }
        let slot = self.next;
        self.next += 1;
        self.slots.insert(name.to_string(), slot);
        slot
    }

    /// The total number of local-variable slots used so far, for the
    /// Jasmin `.limit locals` directive (always at least 1, never 0, since
    /// slot 0 is reserved even when unused).
    #[must_use]
    pub fn count(&self) -> u16 {
        self.next
    }
}

impl Default for LocalSlots {
    fn default() -> Self {
        Self::new()
    }
}
