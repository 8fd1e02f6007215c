//! Entity references and allocation.
//!
//! An [`EntityRef`] is a plain `u64` handle. It owns nothing; component data
//! attached to it lives in the [`ComponentStore`](crate::ComponentStore) for
//! each component type.

use serde::{Deserialize, Serialize};

/// A reference to a game entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityRef(pub u64);

impl EntityRef {
    /// The null reference. Never handed out by [`EntityAllocator`].
    pub const INVALID: EntityRef = EntityRef(0);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` unless this is [`EntityRef::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntityRef({})", self.0)
    }
}

/// Hands out entity references.
///
/// Fresh ids grow monotonically from 1. Ids given back through
/// [`EntityAllocator::release`] are reused before any new id is minted.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
    free: Vec<u64>,
}

impl EntityAllocator {
    /// Creates an empty allocator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            free: Vec::new(),
        }
    }

    /// Allocates an entity reference, preferring recycled ids.
    pub fn allocate(&mut self) -> EntityRef {
        if let Some(id) = self.free.pop() {
            return EntityRef(id);
        }
        let id = self.next_id;
        self.next_id += 1;
        EntityRef(id)
    }

    /// Returns `entity` to the allocator.
    ///
    /// Returns `false` (and changes nothing) for the invalid reference, for
    /// ids this allocator never produced, and for ids already released.
    pub fn release(&mut self, entity: EntityRef) -> bool {
        let id = entity.id();
        if !entity.is_valid() || id >= self.next_id || self.free.contains(&id) {
            return false;
        }
        self.free.push(id);
        true
    }

    /// Number of references currently handed out.
    #[must_use]
    pub fn live_count(&self) -> u64 {
        (self.next_id - 1) - self.free.len() as u64
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
