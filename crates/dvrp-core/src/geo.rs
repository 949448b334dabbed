//! Planar coordinate type.
//!
//! Scenario nodes live in the unit square; travel cost is plain Euclidean
//! distance divided by the vehicle speed.  `f64` keeps cached datasets
//! bit-exact through the CSV round trip.

/// A 2-D node coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.  Symmetric and exactly zero for identical points.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
