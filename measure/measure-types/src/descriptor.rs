//! Renderable shape descriptors.
//!
//! Descriptors are plain values handed to the rendering host. They are
//! rebuilt whenever the geometry changes and are never stored by the engine
//! beyond the current measurement.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight segment between two points, oriented for a cylinder renderer.
///
/// The renderer places a cylinder of height `length` at `center`, then
/// applies `pitch` about X and `yaw` about Y. Segments lie flat on the
/// detected surface, so `pitch` is a quarter turn.
///
/// `yaw` may be NaN when `from == to`; renderers should treat that as
/// "no rotation".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentDescriptor {
    /// Start point.
    pub from: Point3<f64>,
    /// End point.
    pub to: Point3<f64>,
    /// Midpoint between `from` and `to`.
    pub center: Point3<f64>,
    /// Euclidean length in meters.
    pub length: f64,
    /// Rotation about X in radians.
    pub pitch: f64,
    /// Rotation about Y in radians.
    pub yaw: f64,
}

impl SegmentDescriptor {
    /// Direction vector from `from` to `to` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.to - self.from
    }

    /// Returns true if the yaw is a finite angle.
    #[must_use]
    pub fn has_finite_yaw(&self) -> bool {
        self.yaw.is_finite()
    }
}

/// A box resting on the measured footprint.
///
/// `width` and `length` are fixed once the footprint is complete; `height`
/// follows the height input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeDescriptor {
    /// Box center on the surface.
    pub center: Point3<f64>,
    /// Size along the first edge, in meters.
    pub width: f64,
    /// Box height in meters.
    pub height: f64,
    /// Size along the second edge, in meters.
    pub length: f64,
}

impl VolumeDescriptor {
    /// Volume in cubic meters.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Returns a copy with a different height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }
}
