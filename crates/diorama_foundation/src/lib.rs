//! Entity identifiers and error types for Diorama.
//!
//! This crate provides:
//! - [`Entity`] - Opaque monotonic entity identifiers
//! - [`Error`] - The error taxonomy shared by all layers
//! - [`Result`] - Crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod error;

pub use entity::Entity;
pub use error::{Error, Result};
