// ============================================================
// Layer 3 - Annotation Errors
// ============================================================
// A malformed annotation aborts the whole partitioning run.
// These variants carry enough context (file, field, entry
// index) to find the offending record by hand.
//
// Reference: thiserror documentation
//            Rust Book §9 (Recoverable Errors with Result)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotationError {
    /// A kept (non-ignored) entry does not have exactly 8 point values.
    #[error("{source_name}: {field}[{index}] has {count} point values, expected 8")]
    MalformedPoints {
        source_name: String,
        field:       &'static str,
        index:       usize,
        count:       usize,
    },

    /// The file is not a valid annotation record.
    #[error("failed to parse annotation '{source_name}'")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}
