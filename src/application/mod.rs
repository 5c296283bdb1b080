// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers to produce the train and
// validation lists. No geometry and no direct file access here,
// only workflow coordination.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset partitioning workflow
pub mod partition_use_case;
