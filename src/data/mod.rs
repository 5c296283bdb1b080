// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the annotation directory and the two
// output lists:
//
//   <data_root>/train/gt/*.json
//       │
//       ▼
//   GtDirLoader       → lists and parses annotation files
//       │
//       ▼
//   load_annotation   → drops ignored entries, builds Quads
//       │
//       ▼
//   (Layer 5 classifier assigns a HardType per file)
//       │
//       ▼
//   split_train_val   → samples hard buckets into validation,
//                       everything else goes to train
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lists and parses annotation files
pub mod loader;

/// Builds the train/validation lists from hard buckets
pub mod splitter;
