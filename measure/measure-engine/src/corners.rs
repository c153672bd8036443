//! Bounded, ordered set of committed corners.

use measure_types::Point3;

/// Maximum number of corners in one measurement.
pub const MAX_CORNERS: usize = 3;

/// Up to three committed corners, in commit order.
///
/// Order defines the traversal P0 → P1 → P2 → P0: P0–P1 is the width,
/// P1–P2 the length, and P2–P0 the diagonal.
///
/// # Example
///
/// ```
/// use measure_engine::CornerSet;
/// use nalgebra::Point3;
///
/// let mut corners = CornerSet::new();
/// for i in 0..4 {
///     corners.push(Point3::new(f64::from(i), 0.0, 0.0));
/// }
/// assert_eq!(corners.len(), 3);
/// assert!(corners.is_full());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CornerSet {
    points: Vec<Point3<f64>>,
}

impl CornerSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(MAX_CORNERS),
        }
    }

    /// Number of committed corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no corner has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true once three corners are committed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_CORNERS
    }

    /// Appends a corner.
    ///
    /// Returns the index of the new corner, or `None` if the set is full.
    pub fn push(&mut self, point: Point3<f64>) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.points.push(point);
        Some(self.points.len() - 1)
    }

    /// Corner at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point3<f64>> {
        self.points.get(index).copied()
    }

    /// Most recently committed corner.
    #[must_use]
    pub fn last(&self) -> Option<Point3<f64>> {
        self.points.last().copied()
    }

    /// All three corners, once the set is full.
    #[must_use]
    pub fn triple(&self) -> Option<[Point3<f64>; 3]> {
        match self.points.as_slice() {
            [p0, p1, p2] => Some([*p0, *p1, *p2]),
            _ => None,
        }
    }

    /// Committed corners in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Iterates over consecutive corner pairs (P0, P1), (P1, P2).
    pub fn edges(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Removes every corner.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
