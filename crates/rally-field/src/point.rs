//! Points in the combined field.

use std::fmt;

/// A point in the shared continuous field.
///
/// `x` runs across the court (horizontal index, `0..=4`); `y` runs
/// along it from space 1's back line (`0`) to space 2's back line (`9`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPoint {
    /// Across-court coordinate.
    pub x: i32,
    /// Along-court coordinate.
    pub y: i32,
}

impl FieldPoint {
    /// Create a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: FieldPoint) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for FieldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<FieldPoint> for (i32, i32) {
    fn from(p: FieldPoint) -> Self {
        (p.x, p.y)
    }
}
