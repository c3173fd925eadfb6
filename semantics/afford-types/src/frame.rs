//! Per-pixel frame types for raw and derived segmentation data.
//!
//! All frames are stored as flat vectors in row-major order (C-contiguous).
//! For a pixel at `(x, y)`, the index is `y * width + x`. The
//! [`AffordanceFrame`] adds an innermost channel dimension, so its index is
//! `(y * width + x) * channels + c`.

use serde::{Deserialize, Serialize};

use crate::{AffordanceVector, ClassId, InstanceId, Result, TypesError};

fn pixel_count(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize)
}

/// A raw segmentation frame produced by the renderer.
///
/// Each pixel holds the opaque per-scene id of the body or link it belongs
/// to, or 0 for background.
///
/// # Example
///
/// ```
/// use afford_types::SegmentationFrame;
///
/// let frame = SegmentationFrame::from_data(2, 2, vec![0, 5, 5, 9]).unwrap();
/// assert_eq!(frame.unique_ids(), vec![0, 5, 9]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationFrame {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl SegmentationFrame {
    /// Creates a frame filled with background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; pixel_count(width, height)],
        }
    }

    /// Creates a frame from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::DataSizeMismatch`] if the data length does not
    /// match the dimensions.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height);
        if data.len() != expected {
            return Err(TypesError::data_size_mismatch(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw pixel data.
    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Gets the instance id at a pixel, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<InstanceId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data.get(idx).copied().map(InstanceId::new)
    }

    /// Sets the instance id at a pixel. Returns `false` out of bounds.
    pub fn set(&mut self, x: u32, y: u32, id: InstanceId) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data.get_mut(idx).is_some_and(|pixel| {
            *pixel = id.as_u32();
            true
        })
    }

    /// Returns the sorted distinct id values present in the frame.
    ///
    /// A frame typically contains only tens of distinct ids, so derived maps
    /// are produced by scattering per distinct value rather than branching
    /// per pixel.
    #[must_use]
    pub fn unique_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.data.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// An instance segmentation frame with links collapsed to their root.
///
/// Starts as a copy of the raw frame; pixels of articulated sub-parts are
/// then remapped to the per-scene id of the articulation root, so every
/// pixel of one object carries one id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceFrame {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl InstanceFrame {
    /// Creates an instance frame as a copy of a raw segmentation frame.
    #[must_use]
    pub fn from_segmentation(seg: &SegmentationFrame) -> Self {
        Self {
            width: seg.width,
            height: seg.height,
            data: seg.data.clone(),
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw pixel data.
    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Remaps every pixel equal to `from` to `to`.
    ///
    /// Used to fold an articulated link into its root instance.
    pub fn remap(&mut self, from: InstanceId, to: InstanceId) {
        let from = from.as_u32();
        let to = to.as_u32();
        for pixel in &mut self.data {
            if *pixel == from {
                *pixel = to;
            }
        }
    }
}

/// A per-pixel class id frame.
///
/// Background pixels stay 0; pixels of unregistered instances carry
/// [`ClassId::UNCLASSIFIED`] (-1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFrame {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl ClassFrame {
    /// Creates a frame filled with the background class.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; pixel_count(width, height)],
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw pixel data.
    #[must_use]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Writes `class_id` to every pixel where the raw frame equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::DataSizeMismatch`] if the raw frame's
    /// dimensions differ from this frame's.
    pub fn scatter(
        &mut self,
        seg: &SegmentationFrame,
        id: InstanceId,
        class_id: ClassId,
    ) -> Result<()> {
        if seg.width != self.width || seg.height != self.height {
            return Err(TypesError::data_size_mismatch(
                pixel_count(self.width, self.height),
                seg.data.len(),
            ));
        }
        let target = id.as_u32();
        let value = class_id.as_i32();
        for (pixel, &raw) in self.data.iter_mut().zip(seg.data.iter()) {
            if raw == target {
                *pixel = value;
            }
        }
        Ok(())
    }
}

/// A per-pixel multi-hot affordance frame (H × W × vocabulary size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordanceFrame {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl AffordanceFrame {
    /// Creates an all-zero affordance frame with one channel per vocabulary
    /// affordance.
    #[must_use]
    pub fn new(width: u32, height: u32, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0; pixel_count(width, height) * channels],
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of affordance channels.
    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the raw channel data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the channel slice for a pixel, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * self.channels;
        self.data.get(idx..idx + self.channels)
    }

    /// Broadcasts an affordance vector to every pixel where the raw frame
    /// equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::DataSizeMismatch`] if the raw frame's
    /// dimensions differ from this frame's, or
    /// [`TypesError::LengthMismatch`] if the vector length does not match
    /// the channel count.
    pub fn scatter(
        &mut self,
        seg: &SegmentationFrame,
        id: InstanceId,
        affordances: &AffordanceVector,
    ) -> Result<()> {
        if seg.width != self.width || seg.height != self.height {
            return Err(TypesError::data_size_mismatch(
                pixel_count(self.width, self.height),
                seg.data.len(),
            ));
        }
        if affordances.len() != self.channels {
            return Err(TypesError::LengthMismatch {
                expected: self.channels,
                actual: affordances.len(),
            });
        }
        let target = id.as_u32();
        let bits = affordances.bits();
        for (i, &raw) in seg.data.iter().enumerate() {
            if raw == target {
                let start = i * self.channels;
                self.data[start..start + self.channels].copy_from_slice(bits);
            }
        }
        Ok(())
    }
}

/// An RGB color buffer (H × W × 3, `u8`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbFrame {
    /// Creates a black frame.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; pixel_count(width, height) * 3],
        }
    }

    /// Creates a frame from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::DataSizeMismatch`] if the data length does not
    /// equal `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = pixel_count(width, height) * 3;
        if data.len() != expected {
            return Err(TypesError::data_size_mismatch(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw pixel data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// A depth buffer (H × W, meters as `f32`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthFrame {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl DepthFrame {
    /// Creates a zero-depth frame.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; pixel_count(width, height)],
        }
    }

    /// Creates a frame from existing depth data.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::DataSizeMismatch`] if the data length does not
    /// match the dimensions.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = pixel_count(width, height);
        if data.len() != expected {
            return Err(TypesError::data_size_mismatch(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw depth data.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
