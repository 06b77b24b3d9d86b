//! Named scene management.
//!
//! A [`SceneRegistry`] maps names to scenes and tracks which one is
//! current. A registry always contains the default scene; removing the
//! current scene falls back to it.

use std::collections::HashMap;

use diorama_engine::Scene;
use diorama_foundation::{Error, Result};
use tracing::{debug, warn};

/// The name of the scene every registry is seeded with.
pub const DEFAULT_SCENE: &str = "default";

/// A collection of named scenes with a current-scene pointer.
///
/// The default scene always exists and is current until [`set_scene`]
/// selects another. Operations addressing a missing name fail with
/// [`Error::SceneNotFound`].
///
/// [`set_scene`]: SceneRegistry::set_scene
#[derive(Debug)]
pub struct SceneRegistry {
    scenes: HashMap<String, Scene>,
    current: String,
}

impl SceneRegistry {
    /// Creates a registry seeded with an empty default scene.
    #[must_use]
    pub fn new() -> Self {
        let mut scenes = HashMap::new();
        scenes.insert(DEFAULT_SCENE.to_string(), Scene::new());
        Self {
            scenes,
            current: DEFAULT_SCENE.to_string(),
        }
    }

    /// Creates an empty scene under `name` and returns a mutable reference
    /// to it.
    ///
    /// An existing scene of the same name is discarded and replaced.
    pub fn new_scene(&mut self, name: impl Into<String>) -> &mut Scene {
        let name = name.into();
        if self.scenes.contains_key(&name) {
            warn!(scene = %name, "replacing existing scene");
        } else {
            debug!(scene = %name, "creating scene");
        }
        self.scenes.entry(name).insert_entry(Scene::new()).into_mut()
    }

    /// Returns a reference to the scene named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneNotFound`] if no such scene exists.
    pub fn get_scene(&self, name: &str) -> Result<&Scene> {
        self.scenes
            .get(name)
            .ok_or_else(|| Error::scene_not_found(name))
    }

    /// Returns a mutable reference to the scene named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneNotFound`] if no such scene exists.
    pub fn get_scene_mut(&mut self, name: &str) -> Result<&mut Scene> {
        self.scenes
            .get_mut(name)
            .ok_or_else(|| Error::scene_not_found(name))
    }

    /// Removes the scene named `name` and returns it.
    ///
    /// If the removed scene was current, the pointer falls back to the
    /// default scene. Removing the default scene immediately recreates it
    /// empty, so the registry never loses it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneNotFound`] if no such scene exists.
    pub fn rem_scene(&mut self, name: &str) -> Result<Scene> {
        let scene = self
            .scenes
            .remove(name)
            .ok_or_else(|| Error::scene_not_found(name))?;
        debug!(scene = %name, "removed scene");
        if name == DEFAULT_SCENE {
            self.scenes.insert(DEFAULT_SCENE.to_string(), Scene::new());
        }
        if self.current == name {
            self.current = DEFAULT_SCENE.to_string();
        }
        Ok(scene)
    }

    /// Replaces the scene named `name` with a fresh empty one.
    ///
    /// The name keeps its registry slot and the current pointer is
    /// unaffected, so a reset of the current scene leaves it current.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneNotFound`] if no such scene exists.
    pub fn reset_scene(&mut self, name: &str) -> Result<()> {
        let slot = self
            .scenes
            .get_mut(name)
            .ok_or_else(|| Error::scene_not_found(name))?;
        *slot = Scene::new();
        debug!(scene = %name, "reset scene");
        Ok(())
    }

    /// Makes the scene named `name` the current scene.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SceneNotFound`] if no such scene exists.
    pub fn set_scene(&mut self, name: &str) -> Result<()> {
        if !self.scenes.contains_key(name) {
            return Err(Error::scene_not_found(name));
        }
        self.current = name.to_string();
        Ok(())
    }

    /// Returns a reference to the current scene.
    #[must_use]
    pub fn current_scene(&self) -> &Scene {
        self.scenes
            .get(&self.current)
            .unwrap_or_else(|| unreachable!())
    }

    /// Returns a mutable reference to the current scene.
    pub fn current_scene_mut(&mut self) -> &mut Scene {
        self.scenes
            .get_mut(&self.current)
            .unwrap_or_else(|| unreachable!())
    }

    /// Returns the name of the current scene.
    #[must_use]
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// Returns true if a scene named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Returns the names of every registered scene, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.scenes.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns false; the default scene always exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}
