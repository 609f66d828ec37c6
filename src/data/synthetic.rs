// ============================================================
// Layer 4 - Synthetic Input Batches
// ============================================================
// Builds a [batch_size, seq_len, hidden_dim] float tensor from a
// seed. Same seed, same tensor, on any backend.
//
// How the tensor is built:
//   1. Draw batch_size * seq_len * hidden_dim values in [-1, 1)
//   2. Create a 1D tensor from the flat Vec
//   3. Reshape to [batch_size, seq_len, hidden_dim]
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape and seed of one synthetic batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticBatch {
    pub batch_size: usize,
    pub seq_len:    usize,
    pub hidden_dim: usize,
    pub seed:       u64,
}

impl SyntheticBatch {
    pub fn new(batch_size: usize, seq_len: usize, hidden_dim: usize, seed: u64) -> Self {
        Self { batch_size, seq_len, hidden_dim, seed }
    }

    pub fn dims(&self) -> [usize; 3] {
        [self.batch_size, self.seq_len, self.hidden_dim]
    }

    /// Flat row-major values, uniform in [-1, 1)
    pub fn values(&self) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let len     = self.batch_size * self.seq_len * self.hidden_dim;
        (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
    }

    pub fn to_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 3> {
        let flat = self.values();
        Tensor::<B, 1>::from_floats(flat.as_slice(), device).reshape(self.dims())
    }
}
