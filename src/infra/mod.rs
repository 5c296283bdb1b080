// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Writing results to disk:
//
//   list_writer.rs - writes newline-terminated id lists into
//                    the output directory, creating it first
//                    if needed.
//
// Reference: Rust Book §12 (I/O and File Handling)

/// Plain-text id list output
pub mod list_writer;
