//! Opaque entity identifiers.

use std::fmt;

/// Opaque identifier for an entity.
///
/// Entities carry no data of their own; they exist only to tie components
/// together. Identifiers are issued monotonically from 0 by the owning
/// scene's allocator and are never reused within that scene, so an `Entity`
/// that outlives its entity simply stops resolving.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Entity(u64);

impl Entity {
    /// Creates an entity identifier from a raw id.
    ///
    /// Only allocators should mint new ids; this is public so tests and
    /// storage layers can reconstruct identifiers.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
