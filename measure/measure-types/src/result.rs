//! Computed box measurements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Unit;

/// Width, length, and height of a measured box, in meters.
///
/// `width` runs from the first corner to the second, `length` from the
/// second corner to the third. `height` is driven by a separate input and
/// never changes the footprint.
///
/// # Example
///
/// ```
/// use measure_types::{MeasurementResult, Unit};
///
/// let result = MeasurementResult::new(1.0, 2.0, 0.5);
/// assert_eq!(
///     result.summary(Unit::Centimeter),
///     "Width = 100.0 cm\nLength = 200.0 cm\nHeight = 50.0 cm"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementResult {
    /// Distance between corner 0 and corner 1 in meters.
    pub width: f64,
    /// Distance between corner 1 and corner 2 in meters.
    pub length: f64,
    /// Box height in meters.
    pub height: f64,
}

impl MeasurementResult {
    /// Creates a result from explicit dimensions.
    #[must_use]
    pub const fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// An all-zero result.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns true if either footprint dimension has been measured.
    #[must_use]
    pub fn has_footprint(&self) -> bool {
        self.width > 0.0 || self.length > 0.0
    }

    /// Footprint area in square meters.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Box volume in cubic meters.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.height
    }

    /// Three-line readout of all dimensions in `unit`.
    #[must_use]
    pub fn summary(&self, unit: Unit) -> String {
        format!(
            "Width = {}\nLength = {}\nHeight = {}",
            unit.format(self.width),
            unit.format(self.length),
            unit.format(self.height)
        )
    }
}
