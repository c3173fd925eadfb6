//! End-to-end pipeline tests: taxonomy, registry, observation augmentation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use hashbrown::HashMap;

use afford_obs::{augment_observation, Observation};
use afford_registry::AnnotationRegistry;
use afford_taxonomy::{Taxonomy, TaxonomyHandle};
use afford_types::{
    CameraObservation, InstanceId, RgbFrame, SceneObject, SceneObjectMap, SegmentationFrame,
};

fn taxonomy() -> TaxonomyHandle {
    Arc::new(Taxonomy::load().expect("bundled tables parse"))
}

fn bit(taxonomy: &Taxonomy, name: &str) -> usize {
    taxonomy.affordance_id(name).expect("known affordance").index()
}

/// Cabinet with a handle link, registered explicitly at load time, rendered
/// through one rasterized camera with a ray-traced twin.
#[test]
fn full_pipeline_explicit_registration() {
    let taxonomy = taxonomy();
    let mut registry = AnnotationRegistry::new(Arc::clone(&taxonomy));

    // Scene: cabinet body (id 2) with a handle link (id 3).
    let links = vec![
        SceneObject::link(2, "link_0", 2),
        SceneObject::link(3, "handle_0", 2),
    ];
    let mut overrides: HashMap<String, Vec<String>> = HashMap::new();
    for link in &links {
        if let Some(extra) = taxonomy.part_affordances("Cabinet", link.name()) {
            overrides.insert(link.name().to_string(), extra.to_vec());
        }
    }
    registry
        .register_object(&links, "Cabinet", &overrides)
        .expect("overrides stay inside the vocabulary");

    let mut scene = SceneObjectMap::new();
    scene.insert(SceneObject::link(2, "link_0", 2));
    scene.insert(SceneObject::link(3, "handle_0", 2));

    // 4x1 frame: background, body, handle, body.
    let raw = SegmentationFrame::from_data(4, 1, vec![0, 2, 3, 2]).expect("valid");
    let mut camera = CameraObservation::rgb_only(RgbFrame::new(4, 1));
    camera.segmentation = Some(raw);

    let rt_rgb = RgbFrame::from_data(4, 1, vec![7; 12]).expect("valid");
    let mut obs = Observation::new();
    obs.insert("wrist", camera);
    obs.insert("wrist_rt", CameraObservation::rgb_only(rt_rgb.clone()));

    augment_observation(&mut obs, &scene, &registry).expect("augments");

    let wrist = obs.get("wrist").expect("present");
    assert!(wrist.is_augmented());

    // Ray-traced RGB replaced the rasterized buffer byte for byte.
    assert_eq!(wrist.rgb.as_ref(), Some(&rt_rgb));

    // Both links collapse to the articulation root.
    let instance = wrist.instance_segmentation.as_ref().expect("attached");
    assert_eq!(instance.data(), &[0, 2, 2, 2]);

    // Every link pixel carries the whole-object class.
    let cabinet = taxonomy.class_id("Cabinet").as_i32();
    let class = wrist.class_segmentation.as_ref().expect("attached");
    assert_eq!(class.data(), &[0, cabinet, cabinet, cabinet]);

    // Handle pixels carry profile ∪ override; body pixels the profile only.
    let affordance = wrist.affordance_segmentation.as_ref().expect("attached");
    assert_eq!(affordance.channels(), taxonomy.affordance_count());

    let openable = bit(&taxonomy, "openable");
    let graspable = bit(&taxonomy, "graspable");
    let pullable = bit(&taxonomy, "pullable");

    let body = affordance.get(1, 0).expect("in bounds");
    assert_eq!(body[openable], 1);
    assert_eq!(body[graspable], 0);

    let handle = affordance.get(2, 0).expect("in bounds");
    assert_eq!(handle[openable], 1);
    assert_eq!(handle[graspable], 1);
    assert_eq!(handle[pullable], 1);

    let background = affordance.get(0, 0).expect("in bounds");
    assert!(background.iter().all(|&b| b == 0));
}

/// Objects discovered only through the live scene map get class-level
/// profiles and parsed names, including the fixed edge-case remaps.
#[test]
fn full_pipeline_lazy_registration() {
    let taxonomy = taxonomy();
    let mut registry = AnnotationRegistry::new(Arc::clone(&taxonomy));

    let mut scene = SceneObjectMap::new();
    scene.insert(SceneObject::body(5, "obj_kettle_0"));
    scene.insert(SceneObject::body(6, "fixture_light_switch_room_2"));
    registry.register_missing_objects(&scene);

    // "light_switch" parses to LightSwitch, then remaps to Switch.
    assert_eq!(
        registry.class_id(InstanceId::new(6)),
        Some(taxonomy.class_id("Switch"))
    );

    let raw = SegmentationFrame::from_data(3, 1, vec![0, 5, 6]).expect("valid");
    let mut camera = CameraObservation::new();
    camera.segmentation = Some(raw);
    let mut obs = Observation::new();
    obs.insert("overhead", camera);

    augment_observation(&mut obs, &scene, &registry).expect("augments");

    let overhead = obs.get("overhead").expect("present");
    let affordance = overhead.affordance_segmentation.as_ref().expect("attached");

    // Lazy path uses the class-level profile only.
    let kettle = affordance.get(1, 0).expect("in bounds");
    assert_eq!(kettle[bit(&taxonomy, "graspable")], 1);
    assert_eq!(kettle[bit(&taxonomy, "pourable")], 1);
    assert_eq!(kettle[bit(&taxonomy, "openable")], 0);

    let switch = affordance.get(2, 0).expect("in bounds");
    assert_eq!(switch[bit(&taxonomy, "pressable")], 1);
    assert_eq!(switch[bit(&taxonomy, "togglable")], 1);
}

/// A camera without a ray-traced twin keeps its rasterized RGB, and ids the
/// registry has never seen become unclassified rather than background.
#[test]
fn unpaired_camera_and_unknown_ids() {
    let taxonomy = taxonomy();
    let registry = AnnotationRegistry::new(taxonomy);
    let scene = SceneObjectMap::new();

    let rgb = RgbFrame::from_data(2, 1, vec![42; 6]).expect("valid");
    let mut camera = CameraObservation::rgb_only(rgb.clone());
    camera.segmentation = Some(SegmentationFrame::from_data(2, 1, vec![0, 77]).expect("valid"));

    let mut obs = Observation::new();
    obs.insert("side", camera);

    augment_observation(&mut obs, &scene, &registry).expect("augments");

    let side = obs.get("side").expect("present");
    assert_eq!(side.rgb.as_ref(), Some(&rgb));

    let class = side.class_segmentation.as_ref().expect("attached");
    assert_eq!(class.data(), &[0, -1]);

    let instance = side.instance_segmentation.as_ref().expect("attached");
    assert_eq!(instance.data(), &[0, 77]);
}

/// Registering the same object map twice never duplicates entries, and a
/// second frame reuses the same class ids.
#[test]
fn registration_is_stable_across_frames() {
    let taxonomy = taxonomy();
    let mut registry = AnnotationRegistry::new(Arc::clone(&taxonomy));

    let mut scene = SceneObjectMap::new();
    scene.insert(SceneObject::body(4, "obj_mug_1"));
    registry.register_missing_objects(&scene);
    registry.register_missing_objects(&scene);
    assert_eq!(registry.registered_count(), 1);

    let first = registry.class_id(InstanceId::new(4));
    assert_eq!(first, Some(taxonomy.class_id("Mug")));

    // A later session-local mint does not disturb the stored id.
    taxonomy.class_id("Gizmo");
    assert_eq!(registry.class_id(InstanceId::new(4)), first);
}
