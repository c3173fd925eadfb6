//! Error types for the afford-types crate.

use thiserror::Error;

/// Errors that can occur when constructing annotation data types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Pixel data length does not match the frame dimensions.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    DataSizeMismatch {
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },

    /// Two vectors from different vocabularies were combined.
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected vector length.
        expected: usize,
        /// Actual vector length.
        actual: usize,
    },

    /// A multi-hot entry was neither 0 nor 1.
    #[error("invalid multi-hot bit value: {0}")]
    InvalidBit(u8),
}

impl TypesError {
    /// Creates a data size mismatch error.
    #[must_use]
    pub const fn data_size_mismatch(expected: usize, actual: usize) -> Self {
        Self::DataSizeMismatch { expected, actual }
    }
}

/// Result type for afford-types operations.
pub type Result<T> = std::result::Result<T, TypesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TypesError::data_size_mismatch(100, 99);
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("99"));

        let err = TypesError::InvalidBit(3);
        assert!(err.to_string().contains('3'));
    }
}
