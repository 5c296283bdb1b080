// ============================================================
// Layer 5 - Geometric Primitives
// ============================================================
// Area and overlap of quadrilaterals, plus the small helpers the
// predicates need (centroid, distance, scale).
//
// Area and intersection are delegated to the `geo` crate:
//
//   Quad ──to_polygon──▶ geo::Polygon<f64>
//                          │
//                          ├─ Area::unsigned_area        → area
//                          └─ BooleanOps::intersection   → MultiPolygon
//                                 └─ unsigned_area       → overlap
//
// `geo` handles convex and concave rings, and either winding
// order. Two polygons that do not touch intersect in an empty
// MultiPolygon whose area is 0, so "no overlap" is not an error.
//
// Reference: geo crate documentation (Area, BooleanOps)
//            owen800q-oar-ocr processors/geometry.rs

use geo::{Area, BooleanOps, LineString, Polygon};

use crate::domain::polygon::{Point, Quad};

/// Added under the square root in `scale` so a zero-area
/// polygon still has a small positive size.
pub const SCALE_EPSILON: f64 = 1e-3;

/// Polygons below this area are treated as degenerate and
/// never handed to the boolean engine.
const DEGENERATE_AREA: f64 = 1e-12;

// ─── Conversion ───────────────────────────────────────────────────────────────

/// Build a closed geo ring from the four corners.
/// Polygon::new closes the exterior ring itself.
fn to_polygon(poly: &Quad) -> Polygon<f64> {
    let ring: Vec<(f64, f64)> = poly.points().iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(ring), vec![])
}

// ─── Area ─────────────────────────────────────────────────────────────────────

/// Area of a quadrilateral, regardless of winding order.
pub fn area(poly: &Quad) -> f64 {
    to_polygon(poly).unsigned_area()
}

// ─── Intersection ─────────────────────────────────────────────────────────────

/// Area of the overlap between two quadrilaterals, 0 when disjoint.
pub fn intersection_area(a: &Quad, b: &Quad) -> f64 {
    let pa = to_polygon(a);
    let pb = to_polygon(b);

    // A flat polygon cannot cover anything
    if pa.unsigned_area() <= DEGENERATE_AREA || pb.unsigned_area() <= DEGENERATE_AREA {
        return 0.0;
    }

    pa.intersection(&pb).unsigned_area()
}

/// Overlap of `candidate` with `ground_truth`, divided by the area of
/// `ground_truth`.
///
/// Not symmetric: it answers "how much of the ground truth is
/// covered by the candidate". Standard IoU would divide by the
/// union instead. A zero-area ground truth yields 0.
pub fn containment_ratio(candidate: &Quad, ground_truth: &Quad) -> f64 {
    let gt_area = area(ground_truth);
    if gt_area <= 0.0 {
        return 0.0;
    }
    intersection_area(candidate, ground_truth) / gt_area
}

// ─── Position and Size ────────────────────────────────────────────────────────

/// Mean of the four corner points.
pub fn centroid(poly: &Quad) -> Point {
    let pts = poly.points();
    let sx: f64 = pts.iter().map(|p| p.x).sum();
    let sy: f64 = pts.iter().map(|p| p.y).sum();
    Point::new(sx / 4.0, sy / 4.0)
}

pub fn distance(p: Point, q: Point) -> f64 {
    ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}

/// Size proxy: sqrt(area + 1e-3).
pub fn scale(poly: &Quad) -> f64 {
    (area(poly) + SCALE_EPSILON).sqrt()
}

/// Mean `scale` over a set of polygons, 0 for an empty set.
pub fn mean_scale(polys: &[Quad]) -> f64 {
    if polys.is_empty() {
        return 0.0;
    }
    polys.iter().map(scale).sum::<f64>() / polys.len() as f64
}
