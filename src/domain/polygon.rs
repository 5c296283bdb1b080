// ============================================================
// Layer 3 - Polygon Domain Types
// ============================================================
// Every region in a text-detection annotation is a
// quadrilateral: four (x, y) points in drawing order.
//
// On disk a quadrilateral is stored flattened as 8 numbers:
//   [x0, y0, x1, y1, x2, y2, x3, y3]
//
// Quad::from_flat reshapes that into [Point; 4]. A fixed-size
// array makes "exactly four points" part of the type, so no
// downstream code has to re-check it.
//
// Reference: Rust Book §5 (Structs), §8 (Arrays and Slices)

use serde::{Deserialize, Serialize};

/// Number of raw coordinates in a flattened quadrilateral.
pub const QUAD_COORDS: usize = 8;

/// A 2D point. `x` is the first stored coordinate, `y` the second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A quadrilateral region: a text line or a single character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    points: [Point; 4],
}

impl Quad {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Reshape 8 flattened coordinates into a Quad.
    /// Returns None unless exactly 8 values are given.
    pub fn from_flat(coords: &[f64]) -> Option<Self> {
        if coords.len() != QUAD_COORDS {
            return None;
        }
        let mut points = [Point::default(); 4];
        for (point, pair) in points.iter_mut().zip(coords.chunks_exact(2)) {
            *point = Point::new(pair[0], pair[1]);
        }
        Some(Self::new(points))
    }

    #[cfg(test)]
    /// Axis-aligned rectangle spanning [x0, x1] × [y0, y1],
    /// points listed clockwise from (x0, y0).
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new([
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_reshapes_pairs() {
        let q = Quad::from_flat(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(q.points()[0], Point::new(0.0, 1.0));
        assert_eq!(q.points()[3], Point::new(6.0, 7.0));
    }

    #[test]
    fn test_from_flat_rejects_wrong_length() {
        assert!(Quad::from_flat(&[0.0; 6]).is_none());
        assert!(Quad::from_flat(&[0.0; 10]).is_none());
        assert!(Quad::from_flat(&[]).is_none());
    }

    #[test]
    fn test_rect_corners() {
        let q = Quad::rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.points()[0], Point::new(1.0, 2.0));
        assert_eq!(q.points()[2], Point::new(3.0, 4.0));
    }
}
