//! Error types for the Diorama system.
//!
//! Uses `thiserror` for ergonomic error definition. All errors surface
//! synchronously at the call site; nothing is caught internally.

use thiserror::Error;

use crate::entity::Entity;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The error taxonomy for Diorama operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A scene name was not present in the registry.
    #[error("scene not found: {0:?}")]
    SceneNotFound(String),

    /// A component operation referenced an entity the owning scene never
    /// registered (or has already destroyed).
    #[error("unknown entity: {0}")]
    UnknownEntity(Entity),

    /// A typed component read or removal found no instance of that type
    /// attached to the entity.
    #[error("missing component: {component} on {entity}")]
    MissingComponent {
        /// The entity that was queried.
        entity: Entity,
        /// The Rust type name of the requested component.
        component: &'static str,
    },
}

impl Error {
    /// Creates a scene-not-found error.
    #[must_use]
    pub fn scene_not_found(name: impl Into<String>) -> Self {
        Self::SceneNotFound(name.into())
    }

    /// Creates an unknown-entity error.
    #[must_use]
    pub fn unknown_entity(entity: Entity) -> Self {
        Self::UnknownEntity(entity)
    }

    /// Creates a missing-component error for component type `T`.
    #[must_use]
    pub fn missing_component<T>(entity: Entity) -> Self {
        Self::MissingComponent {
            entity,
            component: std::any::type_name::<T>(),
        }
    }
}
