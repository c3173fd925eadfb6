//! Identifier newtypes for instances, classes, and affordances.

use serde::{Deserialize, Serialize};

/// An opaque per-scene segmentation id assigned by the simulation engine.
///
/// Every rendered body and articulated link receives one. Ids are unique
/// within a scene but carry no semantic meaning on their own; the annotation
/// registry maps them to classes and affordances.
///
/// Id `0` is reserved for background pixels by engine convention.
///
/// # Example
///
/// ```
/// use afford_types::InstanceId;
///
/// let id = InstanceId::new(42);
/// assert_eq!(id.as_u32(), 42);
/// assert!(!id.is_background());
/// assert!(InstanceId::BACKGROUND.is_background());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(u32);

impl InstanceId {
    /// The background id (pixel value 0).
    pub const BACKGROUND: Self = Self(0);

    /// Creates a new instance id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying id value.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns `true` if this is the background id.
    #[must_use]
    pub const fn is_background(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<InstanceId> for u32 {
    fn from(id: InstanceId) -> Self {
        id.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A dense semantic class index.
///
/// Class ids are zero-based and stable for the lifetime of a process once
/// assigned: the taxonomy only ever appends new classes, never renumbers.
/// Index 0 is always `Background`.
///
/// [`ClassId::UNCLASSIFIED`] (-1) marks pixels whose instance was never
/// registered; callers must treat it as "unclassified", not background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(i32);

impl ClassId {
    /// The background class (index 0).
    pub const BACKGROUND: Self = Self(0);

    /// Sentinel for instances with no registered class.
    pub const UNCLASSIFIED: Self = Self(-1);

    /// Creates a class id from a dense table index.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn from_index(index: usize) -> Self {
        Self(index as i32)
    }

    /// Returns the underlying value (`-1` for unclassified).
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns the dense table index, or `None` for the unclassified sentinel.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn index(&self) -> Option<usize> {
        if self.0 < 0 {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    /// Returns `true` if this is the background class.
    #[must_use]
    pub const fn is_background(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class({})", self.0)
    }
}

/// A dense index into the affordance vocabulary.
///
/// The vocabulary is closed-world: ids are assigned once at taxonomy load
/// time from the sorted union of all reference affordance names and never
/// grow afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AffordanceId(usize);

impl AffordanceId {
    /// Creates a new affordance id.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the vocabulary index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for AffordanceId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl std::fmt::Display for AffordanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Affordance({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn instance_id_background() {
        assert!(InstanceId::BACKGROUND.is_background());
        assert!(InstanceId::new(0).is_background());
        assert!(!InstanceId::new(7).is_background());
    }

    #[test]
    fn instance_id_conversions() {
        let id = InstanceId::from(42u32);
        assert_eq!(u32::from(id), 42);
        assert_eq!(format!("{id}"), "Instance(42)");
    }

    #[test]
    fn class_id_sentinel() {
        assert_eq!(ClassId::UNCLASSIFIED.as_i32(), -1);
        assert_eq!(ClassId::UNCLASSIFIED.index(), None);
        assert!(!ClassId::UNCLASSIFIED.is_background());
    }

    #[test]
    fn class_id_index_round_trip() {
        let id = ClassId::from_index(5);
        assert_eq!(id.index(), Some(5));
        assert_eq!(id.as_i32(), 5);
        assert!(ClassId::from_index(0).is_background());
    }

    #[test]
    fn affordance_id_ordering() {
        let a = AffordanceId::new(1);
        let b = AffordanceId::new(2);
        assert!(a < b);
        assert_eq!(a.index(), 1);
    }

    #[test]
    fn id_serialization() {
        let id = InstanceId::new(9);
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: InstanceId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }
}
