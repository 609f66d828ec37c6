// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers. No tensor math and no
// printing here; only workflow coordination.
//
//   init_use_case.rs  - build a fresh layer, save config + weights
//   apply_use_case.rs - restore a layer and run forward passes
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// Create a checkpoint with freshly initialised parameters
pub mod init_use_case;

/// Load a checkpoint and apply it to a synthetic batch
pub mod apply_use_case;
