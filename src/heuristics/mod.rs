// ============================================================
// Layer 5 - Hard-Sample Heuristics
// ============================================================
// The geometric rule that decides whether a document is "hard"
// for a text-detection model.
//
//   geometry.rs   - area, intersection area, containment
//                   ratio, centroid, distance, scale
//   assign.rs     - which characters belong to which line
//   predicates.rs - large character spacing, juxtaposed lines
//   classifier.rs - combines the above into one HardType per file
//
// Everything here is a pure function of one file's polygons:
// no I/O, no randomness, no state shared between files.

/// Polygon area, overlap, and size primitives
pub mod geometry;

/// Character-to-line assignment
pub mod assign;

/// The two hard-layout predicates
pub mod predicates;

/// Per-file classification
pub mod classifier;
