//! An isolated ECS world.
//!
//! A `Scene` exclusively owns one entity allocator, one component store,
//! and one processor registry; nothing is shared between scenes. Callers
//! populate entities and components, register processors, then drive the
//! scene by calling [`Scene::process`] once per tick.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use diorama_foundation::{Entity, Error, Result};
use diorama_storage::{Component, ComponentStore, EntityAllocator};

use crate::processor::Processor;
use crate::registry::ProcessorRegistry;

/// An isolated ECS world: entities, components, and processors.
///
/// Single-threaded by design. `process()` runs every registered processor
/// synchronously in the calling thread; a scene accessed from multiple
/// threads needs external locking.
#[derive(Debug, Default)]
pub struct Scene {
    allocator: EntityAllocator,
    components: ComponentStore,
    processors: ProcessorRegistry,
    /// Entities marked dead, destroyed at the start of the next tick.
    dead: HashSet<Entity>,
    /// Wall time of each processor from the last timed tick.
    process_times: HashMap<&'static str, Duration>,
}

impl Scene {
    /// Creates a new empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Entity Operations ---

    /// Creates a new entity with an empty component map.
    ///
    /// Ids start at 0 and strictly increase for the lifetime of the scene.
    pub fn make_entity(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.components.register(entity);
        entity
    }

    /// Marks an entity for destruction.
    ///
    /// Destruction is deferred to the start of the next [`Scene::process`]
    /// call, so iteration over query results stays safe within a tick. Use
    /// [`Scene::kill_entity_now`] for immediate destruction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if the entity is not live in this
    /// scene.
    pub fn kill_entity(&mut self, entity: Entity) -> Result<()> {
        if !self.components.contains_entity(entity) {
            return Err(Error::unknown_entity(entity));
        }
        self.dead.insert(entity);
        Ok(())
    }

    /// Destroys an entity and all of its components immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if the entity is not live in this
    /// scene.
    pub fn kill_entity_now(&mut self, entity: Entity) -> Result<()> {
        if !self.components.remove_entity(entity) {
            return Err(Error::unknown_entity(entity));
        }
        self.dead.remove(&entity);
        Ok(())
    }

    /// Returns true if the entity exists and is not marked dead.
    #[must_use]
    pub fn is_entity(&self, entity: Entity) -> bool {
        self.components.contains_entity(entity) && !self.dead.contains(&entity)
    }

    /// Returns the number of entities in the scene, including any marked
    /// dead but not yet reaped.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.components.entity_count()
    }

    // --- Component Operations ---

    /// Attaches a component to an entity, replacing any prior instance of
    /// the same type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if the entity was never created by
    /// this scene (or has already been destroyed).
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> Result<()> {
        self.components.attach(entity, component)
    }

    /// Returns a reference to the entity's component of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] or [`Error::MissingComponent`].
    pub fn component<T: Component>(&self, entity: Entity) -> Result<&T> {
        self.components.get(entity)
    }

    /// Returns a mutable reference to the entity's component of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] or [`Error::MissingComponent`].
    pub fn component_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T> {
        self.components.get_mut(entity)
    }

    /// Returns the entity's component of type `T`, or `None` if absent.
    #[must_use]
    pub fn try_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.components.try_get(entity)
    }

    /// Returns true if the entity holds a component of type `T`.
    #[must_use]
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.components.has::<T>(entity)
    }

    /// Detaches and returns the entity's component of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] or [`Error::MissingComponent`].
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Result<T> {
        self.components.remove(entity)
    }

    /// Returns the set of entities currently holding a component of type
    /// `T`.
    ///
    /// The set is unordered; callers must not rely on iteration order. A
    /// type no entity has ever held yields the empty set.
    #[must_use]
    pub fn fetch_entities<T: Component>(&self) -> HashSet<Entity> {
        self.components.with_component::<T>().collect()
    }

    // --- Processor Operations ---

    /// Registers a processor with the given priority.
    ///
    /// Higher priorities run earlier on each tick; equal priorities run in
    /// registration order.
    pub fn register_processor<P: Processor>(&mut self, processor: P, priority: i32) {
        self.processors.register(processor, priority);
    }

    /// Removes every registered processor of type `P`.
    ///
    /// Returns true if anything was removed.
    pub fn unregister_processor<P: Processor>(&mut self) -> bool {
        self.processors.unregister::<P>()
    }

    /// Returns true if at least one processor of type `P` is registered.
    #[must_use]
    pub fn has_processor<P: Processor>(&self) -> bool {
        self.processors.contains::<P>()
    }

    /// Returns the number of registered processors.
    #[must_use]
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    // --- Tick Operations ---

    /// Runs one tick: reaps entities marked dead, then invokes every
    /// registered processor, highest priority first.
    ///
    /// Runs synchronously to completion before returning. Processors may
    /// register further processors mid-tick; those are retained for
    /// subsequent ticks.
    ///
    /// # Errors
    ///
    /// Propagates the first processor error, skipping the processors that
    /// would have run after it this tick.
    pub fn process(&mut self) -> Result<()> {
        self.reap();
        let mut processors = std::mem::take(&mut self.processors);
        let result = processors.dispatch(self);
        self.restore_processors(processors);
        result
    }

    /// As [`Scene::process`], additionally recording each processor's wall
    /// time, readable via [`Scene::process_times`].
    ///
    /// # Errors
    ///
    /// Propagates the first processor error; timings from the failed tick
    /// are discarded.
    pub fn timed_process(&mut self) -> Result<()> {
        self.reap();
        let mut processors = std::mem::take(&mut self.processors);
        let result = processors.dispatch_timed(self);
        self.restore_processors(processors);
        self.process_times = result?.into_iter().collect();
        Ok(())
    }

    /// Per-processor wall times from the last successful
    /// [`Scene::timed_process`] call, keyed by processor type name.
    #[must_use]
    pub fn process_times(&self) -> &HashMap<&'static str, Duration> {
        &self.process_times
    }

    // --- Scene Lifecycle ---

    /// Removes every entity and component, along with any pending kills.
    ///
    /// Processors are kept. The id sequence restarts at 0.
    pub fn clear(&mut self) {
        self.allocator = EntityAllocator::new();
        self.components.clear();
        self.dead.clear();
        self.process_times.clear();
    }

    fn reap(&mut self) {
        for entity in std::mem::take(&mut self.dead) {
            self.components.remove_entity(entity);
        }
    }

    /// Swaps the registry out for the duration of a dispatch so processors
    /// can borrow the scene mutably, then merges back any registrations
    /// they made.
    fn restore_processors(&mut self, processors: ProcessorRegistry) {
        let added = std::mem::replace(&mut self.processors, processors);
        self.processors.absorb(added);
    }
}
