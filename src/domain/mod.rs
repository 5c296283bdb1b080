// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types describing what the partitioner works on:
//
//   polygon.rs    - Point and the four-point Quad used for both
//                   text lines and single characters
//   annotation.rs - the per-image annotation record as stored
//                   on disk, and the filtered polygon lists the
//                   loader produces from it
//   hard_type.rs  - the per-file hard-sample label
//   errors.rs     - typed errors raised at the loader boundary
//   traits.rs     - the AnnotationSource abstraction
//
// Rules for this layer:
//   - NO file I/O
//   - NO geometry algorithms (those live in Layer 5)
//   - Only structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Points and quadrilaterals
pub mod polygon;

// Raw and filtered annotation records
pub mod annotation;

// NotHard / LargeSpacing / Juxtaposed
pub mod hard_type;

// Loader-boundary validation errors
pub mod errors;

// Core abstractions that other layers implement
pub mod traits;
