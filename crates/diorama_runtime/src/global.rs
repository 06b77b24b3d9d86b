//! The process-wide scene registry.
//!
//! A single [`SceneRegistry`] behind a mutex serves the whole process.
//! References cannot escape the lock, so access is closure-shaped: hand
//! [`with_scene`] or [`with_current_scene`] the work to run against the
//! scene, and take its return value out.
//!
//! The lock is held for the duration of the closure, including a full
//! [`Scene::process`] tick, so keep closures free of calls back into this
//! module or they will deadlock.
//!
//! [`Scene::process`]: diorama_engine::Scene::process

use std::sync::LazyLock;

use diorama_engine::Scene;
use diorama_foundation::Result;
use parking_lot::Mutex;

use crate::registry::SceneRegistry;

static SCENES: LazyLock<Mutex<SceneRegistry>> =
    LazyLock::new(|| Mutex::new(SceneRegistry::new()));

/// Runs `f` with exclusive access to the process-wide registry.
pub fn with_registry<R>(f: impl FnOnce(&mut SceneRegistry) -> R) -> R {
    f(&mut SCENES.lock())
}

/// Runs `f` against the scene named `name` in the process-wide registry.
///
/// # Errors
///
/// Returns [`SceneNotFound`] if no such scene exists; `f` is not called.
///
/// [`SceneNotFound`]: diorama_foundation::Error::SceneNotFound
pub fn with_scene<R>(name: &str, f: impl FnOnce(&mut Scene) -> R) -> Result<R> {
    let mut registry = SCENES.lock();
    Ok(f(registry.get_scene_mut(name)?))
}

/// Runs `f` against the current scene of the process-wide registry.
pub fn with_current_scene<R>(f: impl FnOnce(&mut Scene) -> R) -> R {
    f(SCENES.lock().current_scene_mut())
}

/// Creates an empty scene under `name` in the process-wide registry.
///
/// An existing scene of the same name is discarded and replaced.
pub fn new_scene(name: impl Into<String>) {
    SCENES.lock().new_scene(name);
}

/// Removes the scene named `name` from the process-wide registry and
/// returns it.
///
/// # Errors
///
/// Returns [`SceneNotFound`] if no such scene exists.
///
/// [`SceneNotFound`]: diorama_foundation::Error::SceneNotFound
pub fn rem_scene(name: &str) -> Result<Scene> {
    SCENES.lock().rem_scene(name)
}

/// Replaces the scene named `name` with a fresh empty one.
///
/// # Errors
///
/// Returns [`SceneNotFound`] if no such scene exists.
///
/// [`SceneNotFound`]: diorama_foundation::Error::SceneNotFound
pub fn reset_scene(name: &str) -> Result<()> {
    SCENES.lock().reset_scene(name)
}

/// Makes the scene named `name` current in the process-wide registry.
///
/// # Errors
///
/// Returns [`SceneNotFound`] if no such scene exists.
///
/// [`SceneNotFound`]: diorama_foundation::Error::SceneNotFound
pub fn set_scene(name: &str) -> Result<()> {
    SCENES.lock().set_scene(name)
}
