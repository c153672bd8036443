//! Builds renderable descriptors from committed corners.

use measure_types::{Point3, SegmentDescriptor, VolumeDescriptor, YawMode};

use crate::geometry::{SEGMENT_PITCH, distance, midpoint, segment_yaw};

/// Builds the box for a completed footprint.
///
/// The center is the midpoint of the P0–P2 diagonal, which is exact when
/// the three corners are three vertices of a rectangle. Skewed footprints
/// are not corrected.
///
/// # Example
///
/// ```
/// use measure_engine::build_volume;
/// use nalgebra::Point3;
///
/// let corners = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 2.0),
/// ];
/// let volume = build_volume(&corners, 0.02);
///
/// assert!((volume.width - 1.0).abs() < 1e-12);
/// assert!((volume.length - 2.0).abs() < 1e-12);
/// assert_eq!(volume.center, Point3::new(0.5, 0.0, 1.0));
/// ```
#[must_use]
pub fn build_volume(corners: &[Point3<f64>; 3], height: f64) -> VolumeDescriptor {
    let [p0, p1, p2] = *corners;
    VolumeDescriptor {
        center: midpoint(p0, p2),
        width: distance(p0, p1),
        height,
        length: distance(p1, p2),
    }
}

/// Builds a flat segment from `a` to `b` with the reference yaw.
#[must_use]
pub fn build_segment(a: Point3<f64>, b: Point3<f64>) -> SegmentDescriptor {
    build_segment_with(a, b, YawMode::Reference)
}

/// Builds a flat segment from `a` to `b` with the given yaw computation.
#[must_use]
pub fn build_segment_with(a: Point3<f64>, b: Point3<f64>, mode: YawMode) -> SegmentDescriptor {
    SegmentDescriptor {
        from: a,
        to: b,
        center: midpoint(a, b),
        length: distance(a, b),
        pitch: SEGMENT_PITCH,
        yaw: segment_yaw(mode, a, b),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn segment_fields() {
        let a = Point3::new(1.0, 0.0, 2.0);
        let b = Point3::new(0.0, 0.0, 0.0);
        let seg = build_segment(a, b);

        assert_eq!(seg.from, a);
        assert_eq!(seg.to, b);
        assert_eq!(seg.center, Point3::new(0.5, 0.0, 1.0));
        assert_relative_eq!(seg.length, 5.0f64.sqrt());
        assert_eq!(seg.pitch, FRAC_PI_2);
        assert_relative_eq!(seg.yaw, 0.5f64.atan());
    }

    #[test]
    fn segment_with_four_quadrant_yaw() {
        let a = Point3::origin();
        let b = Point3::new(0.0, 0.0, -2.0);
        assert_eq!(build_segment(a, b).yaw, 0.0);
        assert_relative_eq!(build_segment_with(a, b, YawMode::FourQuadrant).yaw, PI);
    }

    #[test]
    fn degenerate_segment_does_not_panic() {
        let p = Point3::new(0.2, 0.0, 0.2);
        let seg = build_segment(p, p);
        assert_eq!(seg.length, 0.0);
        assert_eq!(seg.center, p);
        assert!(seg.yaw.is_nan());
    }

    #[test]
    fn volume_rectangle() {
        let corners = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 4.0),
        ];
        let volume = build_volume(&corners, 0.25);
        assert_relative_eq!(volume.width, 3.0);
        assert_relative_eq!(volume.length, 4.0);
        assert_eq!(volume.height, 0.25);
        assert_eq!(volume.center, Point3::new(1.5, 0.0, 2.0));
    }

    #[test]
    fn volume_skewed_uses_diagonal_midpoint() {
        let corners = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
        ];
        let volume = build_volume(&corners, 0.0);
        assert_eq!(volume.center, Point3::new(1.0, 0.0, 0.5));
        assert_relative_eq!(volume.length, 2.0f64.sqrt());
    }
}
