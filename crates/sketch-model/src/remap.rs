#![forbid(unsafe_code)]

//! Per-group entity remapping.
//!
//! When a group copies entities from another group (extrude, step, link), each
//! source entity and copy number pair is given a stable entity handle in the
//! new group. The [`Remap`] table records those assignments so that the same
//! source always maps to the same generated entity across regenerations.
//!
//! A `Remap` is owned by exactly one group. Snapshots must hold their own copy,
//! made with [`Remap::deep_copy`].

use std::collections::BTreeMap;

use crate::handle::EntityId;

/// Source side of a remap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RemapKey {
    /// Entity in the source group.
    pub input: EntityId,
    /// Which copy (for step-and-repeat groups); `0` otherwise.
    pub copy_number: u32,
}

/// Mapping from source entities to the handles generated for them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Remap {
    entries: BTreeMap<RemapKey, EntityId>,
}

impl Remap {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entity generated for `(input, copy_number)`, assigning the
    /// next free handle if there is none yet.
    pub fn entity_for(&mut self, input: EntityId, copy_number: u32) -> EntityId {
        let next = self.next_free();
        *self
            .entries
            .entry(RemapKey { input, copy_number })
            .or_insert(next)
    }

    /// Existing assignment, without allocating.
    #[must_use]
    pub fn get(&self, input: EntityId, copy_number: u32) -> Option<EntityId> {
        self.entries
            .get(&RemapKey { input, copy_number })
            .copied()
    }

    /// Record an explicit assignment, returning the previous one.
    pub fn insert(&mut self, key: RemapKey, entity: EntityId) -> Option<EntityId> {
        self.entries.insert(key, entity)
    }

    fn next_free(&self) -> EntityId {
        let max = self.entries.values().map(|e| e.raw()).max().unwrap_or(0);
        EntityId::new(max + 1)
    }

    /// Number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate assignments in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&RemapKey, &EntityId)> {
        self.entries.iter()
    }

    /// Release every assignment.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Independent copy of the table.
    ///
    /// The result shares no storage with `self`; later edits to either side
    /// are invisible to the other.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }

    /// Approximate heap footprint in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.entries.len() * (std::mem::size_of::<RemapKey>() + std::mem::size_of::<EntityId>())
    }
}
