//! Priority-ordered processor dispatch.
//!
//! The registry keeps processors sorted by priority descending; processors
//! registered with equal priority run in registration order. Dispatch is
//! fail-fast: the first processor error aborts the remainder of the tick
//! and propagates to the caller.

use std::any::TypeId;
use std::fmt;
use std::time::{Duration, Instant};

use diorama_foundation::Result;

use crate::processor::Processor;
use crate::scene::Scene;

/// A registered processor with its scheduling metadata.
struct Registration {
    processor: Box<dyn Processor>,
    type_id: TypeId,
    name: &'static str,
    priority: i32,
}

/// Holds registered processors ordered by priority and dispatches them on
/// each tick.
///
/// Re-registering the same processor type appends a second entry; the
/// registry does not deduplicate.
#[derive(Default)]
pub struct ProcessorRegistry {
    /// Entries sorted by priority descending; ties keep registration order.
    entries: Vec<Registration>,
}

impl ProcessorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a processor with the given priority.
    ///
    /// Higher priorities run earlier; equal priorities run in registration
    /// order, including registrations made across separate calls.
    pub fn register<P: Processor>(&mut self, processor: P, priority: i32) {
        let registration = Registration {
            processor: Box::new(processor),
            type_id: TypeId::of::<P>(),
            name: std::any::type_name::<P>(),
            priority,
        };
        self.insert(registration);
    }

    /// Removes every entry of processor type `P`.
    ///
    /// Returns true if anything was removed.
    pub fn unregister<P: Processor>(&mut self) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.type_id != TypeId::of::<P>());
        before != self.entries.len()
    }

    /// Returns true if at least one entry of processor type `P` is
    /// registered.
    #[must_use]
    pub fn contains<P: Processor>(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.type_id == TypeId::of::<P>())
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no processors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Invokes every processor in priority order against `scene`.
    ///
    /// # Errors
    ///
    /// Propagates the first processor error, skipping the processors that
    /// would have run after it this tick.
    pub fn dispatch(&mut self, scene: &mut Scene) -> Result<()> {
        for entry in &mut self.entries {
            entry.processor.process(scene)?;
        }
        Ok(())
    }

    /// As [`ProcessorRegistry::dispatch`], additionally recording the wall
    /// time each processor took, keyed by its type name.
    ///
    /// # Errors
    ///
    /// Propagates the first processor error; timings gathered before the
    /// failure are discarded with it.
    pub fn dispatch_timed(&mut self, scene: &mut Scene) -> Result<Vec<(&'static str, Duration)>> {
        let mut timings = Vec::with_capacity(self.entries.len());
        for entry in &mut self.entries {
            let start = Instant::now();
            entry.processor.process(scene)?;
            timings.push((entry.name, start.elapsed()));
        }
        Ok(timings)
    }

    /// Appends every entry of `other`, preserving their relative order.
    ///
    /// Used by the scene to retain registrations made while a tick was in
    /// flight; entries with a priority equal to existing ones land after
    /// them.
    pub fn absorb(&mut self, other: ProcessorRegistry) {
        for registration in other.entries {
            self.insert(registration);
        }
    }

    fn insert(&mut self, registration: Registration) {
        // Entries stay partitioned by priority descending, so the partition
        // point lands after every entry of equal priority.
        let at = self
            .entries
            .partition_point(|entry| entry.priority >= registration.priority);
        self.entries.insert(at, registration);
    }
}

// Processor boxes are opaque; show the schedule instead.
impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule: Vec<_> = self
            .entries
            .iter()
            .map(|entry| (entry.name, entry.priority))
            .collect();
        f.debug_struct("ProcessorRegistry")
            .field("schedule", &schedule)
            .finish()
    }
}
