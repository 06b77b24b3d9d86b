//! Diorama - Minimal entity-component-system runtime
//!
//! This crate re-exports all layers of the Diorama system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: diorama_runtime    — Named scenes, process-wide registry
//! Layer 2: diorama_engine     — Processors, scheduling, the Scene
//! Layer 1: diorama_storage    — Entity allocation, component storage
//! Layer 0: diorama_foundation — Core types (Entity, Error)
//! ```

pub use diorama_engine as engine;
pub use diorama_foundation as foundation;
pub use diorama_runtime as runtime;
pub use diorama_storage as storage;
