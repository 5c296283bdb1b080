// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The partitioner only needs two things from wherever the
// annotations live: the list of file names, and the parsed
// record for one of them.
//
// Implementations:
//   - GtDirLoader → a directory of .json files (Layer 4)
//   - in-memory sources in tests
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::annotation::AnnotationRecord;

// ─── AnnotationSource ─────────────────────────────────────────────────────────
pub trait AnnotationSource {
    /// All annotation file names, in a stable order.
    fn file_names(&self) -> Result<Vec<String>>;

    /// Parse the record stored under `file_name`.
    fn load(&self, file_name: &str) -> Result<AnnotationRecord>;

    /// Identifier written to the output lists for `file_name`.
    fn file_id(&self, file_name: &str) -> String {
        file_name.to_string()
    }
}
