//! Class and affordance taxonomy for semantic scene annotation.
//!
//! This crate owns the canonical vocabulary the annotation pipeline speaks:
//!
//! - [`ClassRecord`] / [`PartRecord`] - Rows of the bundled reference tables
//! - [`Taxonomy`] - Class table, affordance vocabulary, per-class profiles,
//!   part-level overrides
//! - [`ClassProfile`] - Affordance names + multi-hot vector for one class
//! - [`TaxonomyHandle`] - Shared `Arc` handle passed to consumers
//!
//! # Lifecycle
//!
//! The taxonomy is built once per process — either explicitly via
//! [`Taxonomy::load`] (bundled tables), [`Taxonomy::from_files`], or
//! [`Taxonomy::from_json`], or lazily via [`Taxonomy::shared`] — and then
//! shared by handle. The affordance vocabulary is closed after construction;
//! the class table grows append-only through the get-or-create
//! [`Taxonomy::class_id`] accessor, guarded so concurrent sessions agree on
//! ids.
//!
//! # Example
//!
//! ```
//! use afford_taxonomy::Taxonomy;
//!
//! let taxonomy = Taxonomy::load().unwrap();
//!
//! // Annotated classes have profiles; unknown classes are minted on demand.
//! let profile = taxonomy.affordance_profile("Kettle");
//! assert!(!profile.vector.is_zero());
//!
//! let minted = taxonomy.class_id("SomethingNew");
//! assert_eq!(taxonomy.class_name(minted).as_deref(), Some("SomethingNew"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod record;
mod taxonomy;

pub use error::{Result, TaxonomyError};
pub use record::{ClassRecord, PartRecord};
pub use taxonomy::{ClassProfile, Taxonomy, TaxonomyHandle};
