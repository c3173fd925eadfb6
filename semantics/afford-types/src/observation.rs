//! Per-camera observation bundles.

use serde::{Deserialize, Serialize};

use crate::{AffordanceFrame, ClassFrame, DepthFrame, InstanceFrame, RgbFrame, SegmentationFrame};

/// The sensor output of one camera for one rendered frame.
///
/// Raw channels (`rgb`, `depth`, `segmentation`) come from the renderer;
/// the derived channels are attached by the observation augmentor. Any
/// channel may be absent, depending on the camera's shader configuration —
/// a ray-traced camera, for example, typically renders only RGB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraObservation {
    /// Rasterized (or substituted ray-traced) color buffer.
    pub rgb: Option<RgbFrame>,
    /// Depth buffer.
    pub depth: Option<DepthFrame>,
    /// Raw per-pixel instance ids.
    pub segmentation: Option<SegmentationFrame>,
    /// Derived: instance ids with links collapsed to their root.
    pub instance_segmentation: Option<InstanceFrame>,
    /// Derived: per-pixel class ids.
    pub class_segmentation: Option<ClassFrame>,
    /// Derived: per-pixel multi-hot affordance channels.
    pub affordance_segmentation: Option<AffordanceFrame>,
}

impl CameraObservation {
    /// Creates an empty observation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an observation carrying only an RGB buffer.
    #[must_use]
    pub fn rgb_only(rgb: RgbFrame) -> Self {
        Self {
            rgb: Some(rgb),
            ..Self::default()
        }
    }

    /// Returns `true` if the derived segmentation channels are attached.
    #[must_use]
    pub const fn is_augmented(&self) -> bool {
        self.instance_segmentation.is_some()
            && self.class_segmentation.is_some()
            && self.affordance_segmentation.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_observation_is_not_augmented() {
        let obs = CameraObservation::new();
        assert!(!obs.is_augmented());
        assert!(obs.rgb.is_none());
    }

    #[test]
    fn rgb_only_observation() {
        let obs = CameraObservation::rgb_only(RgbFrame::new(4, 4));
        assert!(obs.rgb.is_some());
        assert!(obs.segmentation.is_none());
    }
}
