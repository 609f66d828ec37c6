// ============================================================
// Layer 4 - Data
// ============================================================
// The highway layer does not load data of its own. This layer
// only produces reproducible input batches so the CLI can drive
// a forward pass:
//
//   seed ──▶ SyntheticBatch ──▶ Tensor [batch, seq_len, hidden_dim]
//
// Reference: Burn Book §4 (Batcher)

/// Seeded random input batches
pub mod synthetic;

pub use synthetic::SyntheticBatch;
