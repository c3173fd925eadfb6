//! Reference table records.
//!
//! The taxonomy is built from two tabular JSON records bundled with the
//! crate (or supplied by the caller): a class → affordance table and a
//! part-level override table for articulated object categories.

use serde::{Deserialize, Serialize};

/// One row of the class → affordance reference table.
///
/// # Example
///
/// ```
/// use afford_taxonomy::ClassRecord;
///
/// let row: ClassRecord = serde_json::from_str(
///     r#"{ "class_name": "Kettle", "affordances": ["graspable", "pourable"] }"#,
/// ).unwrap();
/// assert_eq!(row.class_name, "Kettle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Canonical class name.
    pub class_name: String,
    /// Affordance names annotated for the whole class.
    pub affordances: Vec<String>,
}

/// One row of the part-level override table for articulated categories.
///
/// A link of an articulated object may carry affordances that differ from
/// the whole-class profile: a drawer's handle is graspable while its body is
/// openable. `scaling_factor_range` and `is_large_object` are carried for
/// the asset loader; the taxonomy itself only indexes the affordances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Object category the link belongs to.
    pub category: String,
    /// Link name within the articulated model.
    pub link_name: String,
    /// Affordance names for this link.
    pub affordances: Vec<String>,
    /// Uniform scale range `[min, max]` used when spawning the asset.
    pub scaling_factor_range: [f64; 2],
    /// Whether the object is a large fixture (excluded from random spawns).
    pub is_large_object: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn class_record_round_trip() {
        let row = ClassRecord {
            class_name: "Mug".to_string(),
            affordances: vec!["graspable".to_string(), "containable".to_string()],
        };
        let json = serde_json::to_string(&row).expect("serialize");
        let parsed: ClassRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, row);
    }

    #[test]
    fn part_record_missing_field_fails() {
        let json = r#"{ "category": "Cabinet", "link_name": "handle_0" }"#;
        let parsed: Result<PartRecord, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
