//! Point-to-point geometry.
//!
//! Pure functions over tracked world-space points. None of them fail:
//! degenerate inputs produce the IEEE result (NaN or ±π/2 for yaw) and are
//! left for the renderer to interpret.

use measure_types::{Point3, Vector3, YawMode};

/// Rotation about X applied to every segment, in radians.
///
/// Segments lie flat on the detected horizontal surface, so a Y-aligned
/// cylinder is tipped over by a quarter turn.
pub const SEGMENT_PITCH: f64 = std::f64::consts::FRAC_PI_2;

/// Euclidean distance between two points.
///
/// # Example
///
/// ```
/// use measure_engine::distance;
/// use nalgebra::Point3;
///
/// let d = distance(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
/// assert!((d - 5.0).abs() < 1e-10); // 3-4-5 triangle
/// ```
#[must_use]
pub fn distance(a: Point3<f64>, b: Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Component-wise average of two points.
#[must_use]
pub fn midpoint(a: Point3<f64>, b: Point3<f64>) -> Point3<f64> {
    Point3::from((a.coords + b.coords) / 2.0)
}

/// Difference `b - a`.
#[must_use]
pub fn direction(a: Point3<f64>, b: Point3<f64>) -> Vector3<f64> {
    b - a
}

/// Yaw of the segment `a → b` as `atan(dx / dz)`.
///
/// The result lies in [-π/2, π/2]. When `dz == 0` the quotient is infinite
/// and the yaw is ±π/2; when both `dx` and `dz` are zero it is NaN.
///
/// # Example
///
/// ```
/// use measure_engine::yaw_angle;
/// use nalgebra::Point3;
///
/// let yaw = yaw_angle(Point3::origin(), Point3::new(1.0, 0.0, 1.0));
/// assert!((yaw - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
#[must_use]
pub fn yaw_angle(a: Point3<f64>, b: Point3<f64>) -> f64 {
    let dir = direction(a, b);
    (dir.x / dir.z).atan()
}

/// Yaw of the segment `a → b` as `atan2(dx, dz)`, in (-π, π].
///
/// Unlike [`yaw_angle`] this distinguishes a segment from its reverse and
/// returns 0 for coincident points.
#[must_use]
pub fn yaw_angle_four_quadrant(a: Point3<f64>, b: Point3<f64>) -> f64 {
    let dir = direction(a, b);
    dir.x.atan2(dir.z)
}

/// Yaw of the segment `a → b` using the given computation.
#[must_use]
pub fn segment_yaw(mode: YawMode, a: Point3<f64>, b: Point3<f64>) -> f64 {
    match mode {
        YawMode::Reference => yaw_angle(a, b),
        YawMode::FourQuadrant => yaw_angle_four_quadrant(a, b),
    }
}
