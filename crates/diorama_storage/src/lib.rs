//! Entity allocation and type-indexed component storage for Diorama.
//!
//! This crate provides:
//! - [`EntityAllocator`] - Monotonic entity id allocation
//! - [`Component`] - The contract component values satisfy
//! - [`ComponentStore`] - Per-entity component maps with a reverse index

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod allocator;
mod component;

pub use allocator::EntityAllocator;
pub use component::{Component, ComponentStore};
