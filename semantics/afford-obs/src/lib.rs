//! Observation augmentation: raw renderer output to semantic maps.
//!
//! The last stage of the annotation pipeline. Given the raw per-camera
//! buffers of one rendered frame and a populated
//! [`afford_registry::AnnotationRegistry`], this crate:
//!
//! - substitutes ray-traced RGB for rasterized RGB where a `<camera>_rt`
//!   twin exists,
//! - expands each raw segmentation frame into instance, class, and
//!   affordance maps ([`augment_segmentation`]).
//!
//! Augmentation is per-frame and stateless; all session state lives in the
//! registry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod augment;
mod observation;

pub use augment::{augment_segmentation, DerivedSegmentation};
pub use observation::{augment_observation, Observation};

pub use afford_types::{Result, TypesError};
