// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting concerns that touch the filesystem:
//
//   checkpoint.rs - Saving and loading highway weights with
//                   Burn's CompactRecorder, plus the
//                   HighwayConfig as JSON so a run can rebuild
//                   the exact architecture before loading.
//
//   metrics.rs    - Summary statistics of each forward pass,
//                   appended to a CSV file for later analysis.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Forward-pass metrics CSV logger
pub mod metrics;
