//! Ring of reusable string slots.
//!
//! Every token string handed to the grammar is copied into the next slot of
//! the ring, overwriting the oldest one. A slot's storage only ever grows,
//! so steady-state interning does not allocate.
//!
//! Handles are tagged with the generation of the write that produced them;
//! reading a handle whose slot has since been reused fails with
//! [`ArenaError::Stale`] instead of returning another token's text.

/// Smallest ring the grammar can work with: it may look a few tokens back.
pub const MIN_SLOTS: usize = 10;

/// Arena failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("string arena needs at least {min} slots (got {requested})")]
    TooFewSlots { requested: usize, min: usize },
    #[error("string in slot {slot} was overwritten by a newer token")]
    Stale { slot: u32 },
}

/// Handle to an interned string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArenaRef {
    slot: u32,
    generation: u64,
}

impl ArenaRef {
    pub fn slot(self) -> u32 {
        self.slot
    }
}

#[derive(Clone, Debug, Default)]
struct Slot {
    text: String,
    /// Generation of the last write; 0 means never written.
    generation: u64,
}

/// Fixed-size FIFO ring of strings.
#[derive(Clone, Debug)]
pub struct StringArena {
    slots: Box<[Slot]>,
    next: usize,
    generation: u64,
}

impl Default for StringArena {
    fn default() -> Self {
        StringArena {
            slots: vec![Slot::default(); MIN_SLOTS].into_boxed_slice(),
            next: 0,
            generation: 0,
        }
    }
}

impl StringArena {
    pub fn new(slots: usize) -> Result<Self, ArenaError> {
        if slots < MIN_SLOTS {
            return Err(ArenaError::TooFewSlots {
                requested: slots,
                min: MIN_SLOTS,
            });
        }
        Ok(StringArena {
            slots: vec![Slot::default(); slots].into_boxed_slice(),
            next: 0,
            generation: 0,
        })
    }

    /// Copy `text` into the next slot.
    pub fn intern(&mut self, text: &str) -> ArenaRef {
        self.generation += 1;
        let index = self.next;
        self.next = (self.next + 1) % self.slots.len();

        let slot = &mut self.slots[index];
        slot.text.clear();
        slot.text.push_str(text);
        slot.generation = self.generation;

        ArenaRef {
            slot: u32::try_from(index).unwrap_or(u32::MAX),
            generation: self.generation,
        }
    }

    /// Text behind `handle`, if its slot has not been reused.
    pub fn get(&self, handle: ArenaRef) -> Result<&str, ArenaError> {
        match self.slots.get(handle.slot as usize) {
            Some(slot) if slot.generation == handle.generation => Ok(&slot.text),
            _ => Err(ArenaError::Stale { slot: handle.slot }),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
