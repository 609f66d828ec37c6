// ============================================================
// Layer 5 - ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code apart
// from checkpoint persistence in infra.
//
//   highway.rs - HighwayConfig and the Highway module
//                (transform/gate pairs, gated blend, trace)
//
//   dropout.rs - dropout driven by an explicit ForwardMode
//                instead of the backend's autodiff flag
//
//   backend.rs - the backend the CLI runs on
//
// Parameters are registered through #[derive(Module)], so any
// Burn optimiser, recorder or gradient pass can enumerate them
// without help from this crate.
//
// Reference: Burn Book §3 (Building Blocks)
//            Srivastava et al. (2015) Highway Networks

/// Highway layer architecture
pub mod highway;

/// Mode-aware dropout
pub mod dropout;

/// Backend aliases for the binary
pub mod backend;

pub use highway::{Highway, HighwayConfig, HighwayTrace};
