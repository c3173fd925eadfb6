//! Error types for taxonomy operations.

use thiserror::Error;

/// Errors that can occur while loading or querying the taxonomy.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// The reference data could not be parsed.
    ///
    /// This is a fatal startup error: the bundled (or supplied) tables are
    /// the ground truth for the whole session, so there is nothing to fall
    /// back to.
    #[error("malformed reference table {table}: {reason}")]
    MalformedReference {
        /// Which table failed (`"class"` or `"part"`).
        table: &'static str,
        /// Parser error description.
        reason: String,
    },

    /// A reference data file could not be read.
    #[error("failed to read reference table {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An affordance name outside the closed vocabulary was queried.
    ///
    /// The vocabulary is fixed at construction; an unknown name indicates a
    /// taxonomy/vocabulary mismatch bug, not a legitimate runtime condition.
    #[error("unknown affordance: {0}")]
    UnknownAffordance(String),
}

impl TaxonomyError {
    /// Creates a malformed-reference error for the class table.
    #[must_use]
    pub fn malformed_class_table(reason: impl Into<String>) -> Self {
        Self::MalformedReference {
            table: "class",
            reason: reason.into(),
        }
    }

    /// Creates a malformed-reference error for the part table.
    #[must_use]
    pub fn malformed_part_table(reason: impl Into<String>) -> Self {
        Self::MalformedReference {
            table: "part",
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a fatal reference-data error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedReference { .. } | Self::Io { .. })
    }
}

/// Result type for taxonomy operations.
pub type Result<T> = std::result::Result<T, TaxonomyError>;
