#![forbid(unsafe_code)]

//! Fixed-capacity ring buffer of sketch snapshots.
//!
//! [`UndoStack`] stores up to `capacity` [`UndoState`]s in a fixed slot array.
//! `write` is the next slot to fill and `count` the number of live slots; the
//! live slots are the `count` entries ending at `write - 1`, walking backward
//! cyclically.
//!
//! ```text
//! capacity = 4, count = 3, write = 1
//!
//!   slot:   0       1       2       3
//!         ┌───────┬───────┬───────┬───────┐
//!         │ s3    │ empty │ s1    │ s2    │
//!         └───────┴───────┴───────┴───────┘
//!           newest  write   oldest
//! ```
//!
//! # Invariants
//!
//! 1. `count <= capacity` after every operation.
//! 2. `write < capacity` after every operation.
//! 3. Slots outside the live range are never read.
//! 4. Pushing onto a full buffer tears down the oldest snapshot before its
//!    slot is reused.

use std::fmt;

use sketch_model::Sketch;

use crate::error::{HistoryError, StackKind};
use crate::state::UndoState;

/// Ring buffer of snapshots for one history direction.
pub struct UndoStack {
    slots: Box<[UndoState]>,
    write: usize,
    count: usize,
    kind: StackKind,
    evictions: u64,
}

impl fmt::Debug for UndoStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoStack")
            .field("kind", &self.kind)
            .field("count", &self.count)
            .field("write", &self.write)
            .field("capacity", &self.slots.len())
            .field("evictions", &self.evictions)
            .finish()
    }
}

impl UndoStack {
    /// Create an empty buffer with room for `capacity` snapshots.
    ///
    /// A capacity of zero is raised to one; use
    /// [`HistoryConfig::validate`](crate::HistoryConfig::validate) to reject it
    /// earlier.
    #[must_use]
    pub fn new(kind: StackKind, capacity: usize) -> Self {
        let slots = std::iter::repeat_with(UndoState::default)
            .take(capacity.max(1))
            .collect();
        Self {
            slots,
            write: 0,
            count: 0,
            kind,
            evictions: 0,
        }
    }

    fn wrap_back(&self, i: usize) -> usize {
        (i + self.slots.len() - 1) % self.slots.len()
    }

    // ====================================================================
    // Core Operations
    // ====================================================================

    /// Capture `sketch` and push it as the newest snapshot.
    ///
    /// Returns `true` if the oldest snapshot had to be evicted.
    pub fn push_from(&mut self, sketch: &Sketch) -> bool {
        self.push(UndoState::capture(sketch))
    }

    /// Push an already captured snapshot.
    ///
    /// Returns `true` if the oldest snapshot had to be evicted.
    pub fn push(&mut self, state: UndoState) -> bool {
        let evicted = if self.count == self.slots.len() {
            // Full: `write` points at the oldest live slot.
            self.slots[self.write].clear();
            self.evictions += 1;
            tracing::trace!(
                target: "sketch.undo",
                stack = %self.kind,
                slot = self.write,
                "evicted oldest snapshot"
            );
            true
        } else {
            self.count += 1;
            false
        };

        self.slots[self.write] = state;
        self.write = (self.write + 1) % self.slots.len();
        evicted
    }

    /// Remove and return the newest snapshot.
    ///
    /// The vacated slot is left empty.
    ///
    /// # Errors
    ///
    /// [`HistoryError::Underflow`] if the buffer is empty. The buffer is not
    /// modified in that case.
    pub fn pop(&mut self) -> Result<UndoState, HistoryError> {
        if self.count == 0 {
            return Err(HistoryError::Underflow { stack: self.kind });
        }
        self.count -= 1;
        self.write = self.wrap_back(self.write);
        Ok(std::mem::take(&mut self.slots[self.write]))
    }

    /// Release every live snapshot and reset `count` and `write` to zero.
    ///
    /// Clearing an empty buffer does nothing.
    pub fn clear(&mut self) {
        while self.count > 0 {
            self.write = self.wrap_back(self.write);
            self.count -= 1;
            self.slots[self.write].clear();
        }
        self.write = 0;
    }

    // ====================================================================
    // Query
    // ====================================================================

    /// The newest snapshot, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&UndoState> {
        self.iter().next()
    }

    /// Live snapshots, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &UndoState> + '_ {
        let cap = self.slots.len();
        (1..=self.count).map(move |age| &self.slots[(self.write + cap - age) % cap])
    }

    /// Number of live snapshots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the next slot to be written.
    #[must_use]
    pub fn write(&self) -> usize {
        self.write
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    #[must_use]
    pub fn kind(&self) -> StackKind {
        self.kind
    }

    /// Snapshots evicted since creation.
    #[must_use]
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Approximate footprint of the live snapshots, in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.iter().map(UndoState::size_bytes).sum()
    }

    /// Whether every slot outside the live range is vacated.
    #[cfg(test)]
    fn dead_slots_empty(&self) -> bool {
        let cap = self.slots.len();
        (self.count + 1..=cap).all(|age| self.slots[(self.write + cap - age) % cap].is_empty())
    }
}
