//! The per-tick logic contract.

use diorama_foundation::Result;

use crate::scene::Scene;

/// A stateless unit of logic invoked once per tick.
///
/// Processors share state only through the scene they are handed; there is
/// no other channel between them. A processor typically queries the scene
/// for the entities it cares about and reads or rewrites their components:
///
/// ```
/// use diorama_engine::{Processor, Scene};
/// use diorama_foundation::Result;
///
/// struct Movement;
///
/// #[derive(Debug)]
/// struct Position { x: f64 }
///
/// impl Processor for Movement {
///     fn process(&mut self, scene: &mut Scene) -> Result<()> {
///         for entity in scene.fetch_entities::<Position>() {
///             scene.component_mut::<Position>(entity)?.x += 1.0;
///         }
///         Ok(())
///     }
/// }
/// ```
///
/// Returning `Err` aborts the remainder of the current tick; the error
/// propagates out of [`Scene::process`] untouched.
pub trait Processor: Send + Sync + 'static {
    /// Runs this processor for one tick.
    ///
    /// # Errors
    ///
    /// Any error is surfaced to the caller of [`Scene::process`] and halts
    /// the remaining processors for that tick.
    fn process(&mut self, scene: &mut Scene) -> Result<()>;
}
