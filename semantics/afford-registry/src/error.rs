//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur while registering scene objects.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A taxonomy lookup failed (e.g. an override referenced an affordance
    /// outside the closed vocabulary).
    #[error(transparent)]
    Taxonomy(#[from] afford_taxonomy::TaxonomyError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
