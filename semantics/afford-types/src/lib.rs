//! Core types for semantic affordance annotation.
//!
//! This crate provides the shared vocabulary between the simulation engine
//! glue and the annotation pipeline:
//!
//! # Identifier Types
//!
//! - [`InstanceId`] - Opaque per-scene segmentation id assigned by the engine
//! - [`ClassId`] - Dense semantic class index (0 = background)
//! - [`AffordanceId`] - Dense index into the affordance vocabulary
//!
//! # Scene Types
//!
//! - [`SceneObject`] - A whole body or an articulated link, with uniform id/name access
//! - [`SceneObjectMap`] - The engine's live id → object table for one scene
//!
//! # Frame Types
//!
//! - [`SegmentationFrame`] - Raw per-pixel instance ids from the renderer
//! - [`InstanceFrame`] - Instance ids with links collapsed to their root
//! - [`ClassFrame`] - Per-pixel class ids (may contain the unclassified sentinel)
//! - [`AffordanceFrame`] - Per-pixel multi-hot affordance channels
//! - [`RgbFrame`] / [`DepthFrame`] - Color and depth buffers
//! - [`CameraObservation`] - Per-camera bundle of raw and derived frames
//!
//! # Layer 0 Crate
//!
//! Zero engine dependencies. These are **pure data** types: the common
//! language between the renderer glue, the annotation registry, and any
//! downstream dataset tooling.
//!
//! # Example
//!
//! ```
//! use afford_types::{InstanceId, SegmentationFrame};
//!
//! let frame = SegmentationFrame::new(128, 128);
//! assert!(frame.data().iter().all(|&id| id == InstanceId::BACKGROUND.as_u32()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod affordance;
mod error;
mod frame;
mod id;
mod observation;
mod scene;

pub use affordance::AffordanceVector;
pub use error::{Result, TypesError};
pub use frame::{AffordanceFrame, ClassFrame, DepthFrame, InstanceFrame, RgbFrame, SegmentationFrame};
pub use id::{AffordanceId, ClassId, InstanceId};
pub use observation::CameraObservation;
pub use scene::{SceneObject, SceneObjectMap};
