/// A single token slot in the queue's token table.
///
/// The slot's index in the table is the token id, so the record only
/// carries the two link fields. `next` points toward the back of the
/// line while the slot is queued, and to the next reusable slot while
/// it sits on the free stack. `prev` is only ever set while the slot is
/// queued: the front slot's `prev` names the current back of the line,
/// every other queued slot's `prev` names its neighbor toward the
/// front. A cleared `prev` therefore marks a slot that is not in line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub next: Option<u32>,
    pub prev: Option<u32>,
}

impl Slot {
    /// A slot linked to nothing
    pub fn detached() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }

    /// Whether the slot currently stands in line
    pub fn is_queued(&self) -> bool {
        self.prev.is_some()
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
