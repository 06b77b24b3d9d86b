//! Processor scheduling and the Scene abstraction for Diorama.
//!
//! This crate provides:
//! - [`Processor`] - The per-tick logic contract
//! - [`ProcessorRegistry`] - Priority-ordered processor dispatch
//! - [`Scene`] - An isolated ECS world composing allocator, storage, and
//!   processors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod processor;
mod registry;
mod scene;

pub use processor::Processor;
pub use registry::ProcessorRegistry;
pub use scene::Scene;
