//! Name resolution and per-session annotation registry.
//!
//! This crate turns the engine's opaque per-scene segmentation ids into
//! semantic annotations:
//!
//! - [`resolve`] - Best-effort parsing of engine name strings into canonical
//!   class names (two naming conventions, fixed edge-case remaps)
//! - [`AnnotationRegistry`] - Per-session id → (class, affordances) store
//!   with explicit load-time registration and a lazy catch-all for objects
//!   discovered only through the engine's live object map
//!
//! # Session model
//!
//! The registry carries no cross-session state: each simulation session
//! constructs its own instance around a shared [`afford_taxonomy::Taxonomy`]
//! handle and discards it when the scene is torn down. Glue code registers
//! articulated objects explicitly as they are loaded, then calls
//! [`AnnotationRegistry::register_missing_objects`] once before the first
//! observation so every renderable id has an entry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod registry;
pub mod resolve;

pub use error::{RegistryError, Result};
pub use registry::AnnotationRegistry;
