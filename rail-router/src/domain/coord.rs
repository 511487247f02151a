//! World-space coordinates.

use serde::{Deserialize, Serialize};

/// A point in world space.
///
/// Serialized as a 3-element array `[x, y, z]`. The vertical `y` component
/// is carried through for display but ignored by [`planar_distance`].
///
/// [`planar_distance`]: Coordinate::planar_distance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    /// Create a coordinate from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the horizontal (x, z) plane.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_router::domain::Coordinate;
    ///
    /// let a = Coordinate::new(0.0, 64.0, 0.0);
    /// let b = Coordinate::new(3.0, 10.0, 4.0);
    /// assert_eq!(a.planar_distance(&b), 5.0);
    /// ```
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Coordinate> for [f64; 3] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y, c.z]
    }
}
