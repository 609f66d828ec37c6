// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types that describe the highway layer without
// touching the tensor framework:
//
//   error.rs - the typed failures a highway layer can report
//   mode.rs  - train/eval switch and the behaviour variant
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §9 (Error Handling)

/// Construction and invocation errors
pub mod error;

/// Forward mode and behaviour variant
pub mod mode;

pub use error::HighwayError;
pub use mode::{ForwardMode, HighwayVariant};
