//! Multi-hot affordance vectors.

use serde::{Deserialize, Serialize};

use crate::{AffordanceId, Result, TypesError};

/// A fixed-length multi-hot affordance vector.
///
/// One independent bit per vocabulary entry; any number may be set at once
/// (an object can be both graspable and openable). The length always equals
/// the affordance vocabulary size of the taxonomy that produced it.
///
/// # Example
///
/// ```
/// use afford_types::{AffordanceId, AffordanceVector};
///
/// let mut v = AffordanceVector::zeros(4);
/// v.set(AffordanceId::new(1));
/// v.set(AffordanceId::new(3));
///
/// assert!(v.is_set(AffordanceId::new(1)));
/// assert!(!v.is_set(AffordanceId::new(0)));
/// assert_eq!(v.count_set(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordanceVector {
    /// One entry per vocabulary affordance, 0 or 1.
    bits: Vec<u8>,
}

impl AffordanceVector {
    /// Creates an all-zero vector for a vocabulary of the given size.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![0; len],
        }
    }

    /// Creates a vector from raw bits.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidBit`] if any entry is neither 0 nor 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if let Some(&bad) = bits.iter().find(|&&b| b > 1) {
            return Err(TypesError::InvalidBit(bad));
        }
        Ok(Self { bits })
    }

    /// Returns the vocabulary length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Sets the bit for an affordance.
    ///
    /// Out-of-range ids are ignored; the vector length is fixed at
    /// construction.
    pub fn set(&mut self, id: AffordanceId) {
        if let Some(bit) = self.bits.get_mut(id.index()) {
            *bit = 1;
        }
    }

    /// Returns `true` if the bit for an affordance is set.
    #[must_use]
    pub fn is_set(&self, id: AffordanceId) -> bool {
        self.bits.get(id.index()).copied() == Some(1)
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Returns `true` if no bits are set.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Merges another vector into this one (set union).
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::LengthMismatch`] if the vectors come from
    /// different vocabularies.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.bits.len() != other.bits.len() {
            return Err(TypesError::LengthMismatch {
                expected: self.bits.len(),
                actual: other.bits.len(),
            });
        }
        for (a, b) in self.bits.iter_mut().zip(other.bits.iter()) {
            *a |= b;
        }
        Ok(())
    }

    /// Returns the raw bits, one `u8` per vocabulary entry.
    #[must_use]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the ids of all set affordances, in vocabulary order.
    #[must_use]
    pub fn set_ids(&self) -> Vec<AffordanceId> {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b == 1)
            .map(|(i, _)| AffordanceId::new(i))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn zeros_is_zero() {
        let v = AffordanceVector::zeros(8);
        assert_eq!(v.len(), 8);
        assert!(v.is_zero());
        assert_eq!(v.count_set(), 0);
    }

    #[test]
    fn set_and_query() {
        let mut v = AffordanceVector::zeros(4);
        v.set(AffordanceId::new(2));
        assert!(v.is_set(AffordanceId::new(2)));
        assert!(!v.is_set(AffordanceId::new(0)));
        assert_eq!(v.set_ids(), vec![AffordanceId::new(2)]);
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut v = AffordanceVector::zeros(2);
        v.set(AffordanceId::new(10));
        assert!(v.is_zero());
    }

    #[test]
    fn from_bits_validates() {
        assert!(AffordanceVector::from_bits(vec![0, 1, 1, 0]).is_ok());
        assert!(matches!(
            AffordanceVector::from_bits(vec![0, 2]),
            Err(TypesError::InvalidBit(2))
        ));
    }

    #[test]
    fn merge_is_union() {
        let mut a = AffordanceVector::from_bits(vec![1, 0, 0, 1]).expect("valid");
        let b = AffordanceVector::from_bits(vec![0, 1, 0, 1]).expect("valid");
        a.merge(&b).expect("same length");
        assert_eq!(a.bits(), &[1, 1, 0, 1]);
    }

    #[test]
    fn merge_length_mismatch() {
        let mut a = AffordanceVector::zeros(3);
        let b = AffordanceVector::zeros(4);
        assert!(matches!(
            a.merge(&b),
            Err(TypesError::LengthMismatch {
                expected: 3,
                actual: 4
            })
        ));
    }
}
