//! Per-frame segmentation augmentation.

use tracing::debug;

use afford_registry::AnnotationRegistry;
use afford_types::{
    AffordanceFrame, ClassFrame, ClassId, InstanceFrame, InstanceId, Result, SceneObjectMap,
    SegmentationFrame,
};

/// The three derived maps produced from one raw segmentation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSegmentation {
    /// Instance ids with articulated links collapsed to their root.
    pub instance: InstanceFrame,
    /// Per-pixel class ids ([`ClassId::UNCLASSIFIED`] for unregistered ids).
    pub class: ClassFrame,
    /// Per-pixel multi-hot affordance channels.
    pub affordance: AffordanceFrame,
}

/// Expands a raw segmentation frame into instance, class, and affordance
/// maps.
///
/// Works per distinct id rather than per pixel: the frame's distinct values
/// are enumerated once, and each one is scattered into all three outputs.
/// A frame typically contains only tens of visible objects, so the cost is
/// `#distinct ids × pixel count`.
///
/// Background (id 0) is skipped and left as-is in all outputs. Ids with no
/// registry entry get [`ClassId::UNCLASSIFIED`] and zero affordances —
/// unknown objects are common and must not abort rendering.
///
/// # Errors
///
/// Returns [`afford_types::TypesError::LengthMismatch`] if a registered
/// affordance vector disagrees with the registry's vocabulary size, which
/// indicates the registry was populated against a different taxonomy.
pub fn augment_segmentation(
    raw: &SegmentationFrame,
    scene: &SceneObjectMap,
    registry: &AnnotationRegistry,
) -> Result<DerivedSegmentation> {
    let mut instance = InstanceFrame::from_segmentation(raw);
    let mut class = ClassFrame::new(raw.width(), raw.height());
    let mut affordance =
        AffordanceFrame::new(raw.width(), raw.height(), registry.affordance_count());

    let ids = raw.unique_ids();
    debug!("augmenting frame with {} distinct id(s)", ids.len());

    for value in ids {
        let id = InstanceId::new(value);
        if id.is_background() {
            continue;
        }

        // Fold link pixels into the articulation root.
        if let Some(object) = scene.get(id) {
            if object.is_link() {
                instance.remap(id, object.root());
            }
        }

        let class_id = registry.class_id(id).unwrap_or(ClassId::UNCLASSIFIED);
        class.scatter(raw, id, class_id)?;

        affordance.scatter(raw, id, &registry.affordances(id))?;
    }

    Ok(DerivedSegmentation {
        instance,
        class,
        affordance,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use afford_registry::AnnotationRegistry;
    use afford_taxonomy::{ClassRecord, Taxonomy, TaxonomyHandle};
    use afford_types::SceneObject;
    use std::sync::Arc;

    fn taxonomy() -> TaxonomyHandle {
        Arc::new(Taxonomy::from_records(
            vec![ClassRecord {
                class_name: "Cabinet".to_string(),
                affordances: vec!["graspable".to_string(), "openable".to_string()],
            }],
            vec![],
        ))
    }

    #[test]
    fn links_collapse_to_root_instance() {
        let taxonomy = taxonomy();
        let mut registry = AnnotationRegistry::new(Arc::clone(&taxonomy));

        let mut scene = SceneObjectMap::new();
        scene.insert(SceneObject::link(5, "cab-Door_0", 9));
        scene.insert(SceneObject::body(9, "obj_Cab_main_7"));
        registry.register_missing_objects(&scene);

        let raw = SegmentationFrame::from_data(3, 1, vec![0, 5, 9]).expect("valid");
        let derived = augment_segmentation(&raw, &scene, &registry).expect("augments");

        // 5 folded into 9; background untouched.
        assert_eq!(derived.instance.data(), &[0, 9, 9]);
    }

    #[test]
    fn class_map_carries_registered_ids() {
        let taxonomy = taxonomy();
        let mut registry = AnnotationRegistry::new(Arc::clone(&taxonomy));

        let mut scene = SceneObjectMap::new();
        scene.insert(SceneObject::body(9, "obj_Cab_main_7"));
        registry.register_missing_objects(&scene);

        let raw = SegmentationFrame::from_data(2, 1, vec![0, 9]).expect("valid");
        let derived = augment_segmentation(&raw, &scene, &registry).expect("augments");

        let cabinet = taxonomy.class_id("Cabinet").as_i32();
        assert_eq!(derived.class.data(), &[0, cabinet]);
    }

    #[test]
    fn unregistered_ids_are_unclassified_not_background() {
        let taxonomy = taxonomy();
        let registry = AnnotationRegistry::new(Arc::clone(&taxonomy));
        let scene = SceneObjectMap::new();

        let raw = SegmentationFrame::from_data(2, 1, vec![0, 42]).expect("valid");
        let derived = augment_segmentation(&raw, &scene, &registry).expect("augments");

        assert_eq!(derived.class.data(), &[0, -1]);
        assert!(derived.affordance.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn affordance_channels_match_vocabulary() {
        let taxonomy = taxonomy();
        let mut registry = AnnotationRegistry::new(Arc::clone(&taxonomy));

        let mut scene = SceneObjectMap::new();
        scene.insert(SceneObject::body(9, "obj_Cab_main_7"));
        registry.register_missing_objects(&scene);

        let raw = SegmentationFrame::from_data(2, 1, vec![0, 9]).expect("valid");
        let derived = augment_segmentation(&raw, &scene, &registry).expect("augments");

        assert_eq!(derived.affordance.channels(), taxonomy.affordance_count());
        // Pixel 0 is background; pixel 1 carries the Cabinet profile.
        assert_eq!(derived.affordance.get(0, 0), Some(&[0, 0][..]));
        assert_eq!(derived.affordance.get(1, 0), Some(&[1, 1][..]));
    }
}
