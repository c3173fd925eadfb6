//! Multi-camera observation augmentation.

use hashbrown::HashMap;
use tracing::debug;

use afford_registry::AnnotationRegistry;
use afford_types::{CameraObservation, Result, SceneObjectMap};

use crate::augment::augment_segmentation;

/// Camera-name suffix marking the ray-traced twin of a rasterized camera.
const RAY_TRACED_SUFFIX: &str = "_rt";

/// One rendered frame's worth of per-camera sensor data.
///
/// Keys are camera names; a camera named `<name>_rt` is treated as the
/// ray-traced twin of `<name>` and consulted only for RGB substitution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    cameras: HashMap<String, CameraObservation>,
}

impl Observation {
    /// Creates an empty observation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a camera's sensor data.
    pub fn insert(&mut self, name: impl Into<String>, camera: CameraObservation) {
        self.cameras.insert(name.into(), camera);
    }

    /// Returns a camera's sensor data.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CameraObservation> {
        self.cameras.get(name)
    }

    /// Iterates over all cameras.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CameraObservation)> {
        self.cameras.iter().map(|(name, cam)| (name.as_str(), cam))
    }

    /// Returns the number of cameras (ray-traced twins included).
    #[must_use]
    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }
}

/// Augments every camera of an observation in place.
///
/// For each camera whose name does not end in `_rt`:
///
/// 1. If a `<name>_rt` twin exists and both cameras carry an RGB buffer,
///    the camera's RGB is replaced by the ray-traced one. Depth and
///    segmentation are never touched, and cameras without a twin keep
///    their rasterized RGB.
/// 2. If the camera carries a raw segmentation frame, the three derived
///    maps are attached via [`augment_segmentation`].
///
/// Ray-traced twins themselves are skipped as outputs.
///
/// # Errors
///
/// Propagates [`afford_types::TypesError`] from segmentation augmentation;
/// see [`augment_segmentation`].
pub fn augment_observation(
    obs: &mut Observation,
    scene: &SceneObjectMap,
    registry: &AnnotationRegistry,
) -> Result<()> {
    let names: Vec<String> = obs
        .cameras
        .keys()
        .filter(|name| !name.ends_with(RAY_TRACED_SUFFIX))
        .cloned()
        .collect();

    for name in names {
        let twin = format!("{name}{RAY_TRACED_SUFFIX}");
        let ray_traced_rgb = obs.cameras.get(&twin).and_then(|cam| cam.rgb.clone());

        let Some(camera) = obs.cameras.get_mut(&name) else {
            continue;
        };

        if camera.rgb.is_some() {
            if let Some(rgb) = ray_traced_rgb {
                debug!("substituting ray-traced RGB for camera {name:?}");
                camera.rgb = Some(rgb);
            }
        }

        if let Some(raw) = camera.segmentation.as_ref() {
            let derived = augment_segmentation(raw, scene, registry)?;
            camera.instance_segmentation = Some(derived.instance);
            camera.class_segmentation = Some(derived.class);
            camera.affordance_segmentation = Some(derived.affordance);
        }
    }

    Ok(())
}
