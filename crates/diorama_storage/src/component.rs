//! Type-indexed component storage.
//!
//! Components are arbitrary Rust values keyed by their `TypeId`. The store
//! keeps a per-entity map of attached components and a reverse index from
//! component type to the set of entities holding it.
//!
//! Invariant: for every component type `T`, `index[T]` equals exactly the
//! set of registered entities whose per-entity map contains key `T`. Every
//! mutation path below maintains this; empty index sets are pruned.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::fmt;

use diorama_foundation::{Entity, Error, Result};

/// The contract component values satisfy.
///
/// Any `'static` thread-safe value qualifies; components need no further
/// interface. At most one instance of a given type may be attached to a
/// given entity at a time.
pub trait Component: Any + Send + Sync {}

impl<T: Any + Send + Sync> Component for T {}

type BoxedComponent = Box<dyn Any + Send + Sync>;

/// Owns, per entity, the set of attached component instances, plus a
/// reverse index from component type to the entities holding it.
///
/// The store only accepts entities it has been told about via
/// [`ComponentStore::register`]; component operations on anything else fail
/// with [`Error::UnknownEntity`].
#[derive(Default)]
pub struct ComponentStore {
    /// Per-entity component maps, keyed by component `TypeId`.
    entities: HashMap<Entity, HashMap<TypeId, BoxedComponent>>,
    /// Reverse index: component type -> entities holding it.
    index: HashMap<TypeId, HashSet<Entity>>,
}

impl ComponentStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity, creating its empty component map.
    ///
    /// Idempotent: re-registering a known entity leaves its components
    /// untouched.
    pub fn register(&mut self, entity: Entity) {
        self.entities.entry(entity).or_default();
    }

    /// Returns true if the entity is registered.
    #[must_use]
    pub fn contains_entity(&self, entity: Entity) -> bool {
        self.entities.contains_key(&entity)
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Attaches a component to an entity, replacing any prior instance of
    /// the same type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if the entity is not registered.
    pub fn attach<T: Component>(&mut self, entity: Entity, component: T) -> Result<()> {
        let components = self
            .entities
            .get_mut(&entity)
            .ok_or_else(|| Error::unknown_entity(entity))?;

        components.insert(TypeId::of::<T>(), Box::new(component));
        self.index.entry(TypeId::of::<T>()).or_default().insert(entity);

        Ok(())
    }

    /// Returns a reference to the attached instance of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if the entity is not registered, or
    /// [`Error::MissingComponent`] if it holds no `T`.
    pub fn get<T: Component>(&self, entity: Entity) -> Result<&T> {
        let components = self
            .entities
            .get(&entity)
            .ok_or_else(|| Error::unknown_entity(entity))?;

        components
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(|| Error::missing_component::<T>(entity))
    }

    /// Returns a mutable reference to the attached instance of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if the entity is not registered, or
    /// [`Error::MissingComponent`] if it holds no `T`.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T> {
        let components = self
            .entities
            .get_mut(&entity)
            .ok_or_else(|| Error::unknown_entity(entity))?;

        components
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
            .ok_or_else(|| Error::missing_component::<T>(entity))
    }

    /// Returns the attached instance of `T`, or `None` if the entity is
    /// unregistered or holds no `T`.
    #[must_use]
    pub fn try_get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.entities
            .get(&entity)?
            .get(&TypeId::of::<T>())?
            .downcast_ref::<T>()
    }

    /// Returns true if the entity is registered and holds a `T`.
    #[must_use]
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.entities
            .get(&entity)
            .is_some_and(|components| components.contains_key(&TypeId::of::<T>()))
    }

    /// Detaches and returns the attached instance of `T`.
    ///
    /// Prunes the reverse index; the index entry for `T` is dropped
    /// entirely once no entity holds it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if the entity is not registered, or
    /// [`Error::MissingComponent`] if it holds no `T`.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Result<T> {
        let components = self
            .entities
            .get_mut(&entity)
            .ok_or_else(|| Error::unknown_entity(entity))?;

        let boxed = components
            .remove(&TypeId::of::<T>())
            .ok_or_else(|| Error::missing_component::<T>(entity))?;

        self.unindex(TypeId::of::<T>(), entity);

        boxed
            .downcast::<T>()
            .map(|component| *component)
            .map_err(|_| Error::missing_component::<T>(entity))
    }

    /// Removes an entity and all of its components.
    ///
    /// Returns true if the entity was registered. Every index set the
    /// entity appeared in is scrubbed.
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        let Some(components) = self.entities.remove(&entity) else {
            return false;
        };

        for type_id in components.keys() {
            self.unindex(*type_id, entity);
        }
        true
    }

    /// Iterates the entities currently holding a `T`.
    ///
    /// No ordering guarantee; yields nothing for types no entity has ever
    /// held.
    pub fn with_component<T: Component>(&self) -> impl Iterator<Item = Entity> + '_ {
        self.index
            .get(&TypeId::of::<T>())
            .into_iter()
            .flat_map(|entities| entities.iter().copied())
    }

    /// Removes all entities and components.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
    }

    fn unindex(&mut self, type_id: TypeId, entity: Entity) {
        if let Some(entities) = self.index.get_mut(&type_id) {
            entities.remove(&entity);
            if entities.is_empty() {
                self.index.remove(&type_id);
            }
        }
    }
}

// Component boxes are type-erased, so summarize rather than derive.
impl fmt::Debug for ComponentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentStore")
            .field("entities", &self.entities.len())
            .field("component_types", &self.index.len())
            .finish()
    }
}
