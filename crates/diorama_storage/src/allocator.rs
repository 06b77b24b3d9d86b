//! Monotonic entity id allocation.
//!
//! The allocator is a bare counter: ids start at 0, strictly increase, and
//! are never reused for the lifetime of the owning scene. Destroyed entities
//! leave a gap rather than recycling their id, so a held [`Entity`] can
//! never silently come to refer to a different entity.

use diorama_foundation::Entity;

/// Issues unique entity identifiers for one scene.
#[derive(Debug, Clone, Default)]
pub struct EntityAllocator {
    /// The next id to hand out.
    next: u64,
}

impl EntityAllocator {
    /// Creates a new allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next entity id.
    ///
    /// Infallible; ids are strictly increasing across calls.
    pub fn allocate(&mut self) -> Entity {
        let entity = Entity::new(self.next);
        self.next += 1;
        entity
    }

    /// Returns true if `entity` was issued by this allocator.
    #[must_use]
    pub fn issued(&self, entity: Entity) -> bool {
        entity.id() < self.next
    }

    /// Returns the number of ids issued so far.
    #[must_use]
    pub fn issued_count(&self) -> u64 {
        self.next
    }
}
