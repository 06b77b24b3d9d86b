//! Named scene management and the process-wide scene registry for Diorama.
//!
//! This crate provides:
//! - [`SceneRegistry`] - Named scenes with a current-scene pointer
//! - [`global`] - A process-wide registry behind a mutex, with
//!   closure-based accessors
//!
//! Most applications want the global form:
//!
//! ```
//! use diorama_runtime::global;
//!
//! global::new_scene("doctest-overworld");
//! global::with_scene("doctest-overworld", |scene| {
//!     let entity = scene.make_entity();
//!     scene.add_component(entity, 3.5f64)
//! })??;
//! # global::rem_scene("doctest-overworld")?;
//! # Ok::<(), diorama_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod global;
mod registry;

pub use registry::{DEFAULT_SCENE, SceneRegistry};
