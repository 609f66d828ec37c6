// ============================================================
// Layer 5 - Highway Layer
// ============================================================
// A stack of `num_layers` highway repetitions. Each repetition
// owns two Linear maps of shape hidden_dim -> hidden_dim:
//
//   t   = relu(transform_i(x))     candidate value
//   g   = sigmoid(gate_i(x))       per-feature mix in (0, 1)
//   out = g * t + (1 - g) * c      convex blend with the carry c
//
// The first repetition carries its own candidate (c = t, so the
// output is t); every later repetition carries its input (c = x).
//
// Dropout is applied to the value entering repetitions 2..N,
// never to the first input and never after the last repetition.
//
// Only the trailing dimension is touched, so the same layer
// works on [hidden], [batch, hidden], [batch, seq, hidden], ...
//
// Reference: Srivastava et al. (2015) Highway Networks
//            Burn Book §3 (Building Blocks)

use burn::{
    module::Ignored,
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::{relu, sigmoid},
};

use crate::domain::{ForwardMode, HighwayError, HighwayVariant};
use crate::ml::dropout::{dropout, validate_rate};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct HighwayConfig {
    /// Width of the input and output feature vectors
    pub hidden_dim: usize,
    /// Number of stacked highway repetitions
    #[config(default = 1)]
    pub num_layers: usize,
    /// Dropout probability between repetitions
    #[config(default = 0.5)]
    pub dropout: f64,
    #[config(default = "HighwayVariant::Standard")]
    pub variant: HighwayVariant,
}

impl HighwayConfig {
    /// Reject configurations the layer cannot be built from.
    pub fn validate(&self) -> Result<(), HighwayError> {
        if self.hidden_dim == 0 {
            return Err(HighwayError::invalid("hidden_dim must be positive"));
        }
        if self.num_layers < 1 {
            return Err(HighwayError::invalid(format!(
                "num_layers must be at least 1, got {}",
                self.num_layers
            )));
        }
        validate_rate(self.dropout)
    }

    /// Allocate `num_layers` independent (transform, gate) pairs using
    /// Burn's default Linear initialisation.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<Highway<B>, HighwayError> {
        self.validate()?;

        let linear = || LinearConfig::new(self.hidden_dim, self.hidden_dim).init(device);
        let transforms: Vec<Linear<B>> = (0..self.num_layers).map(|_| linear()).collect();
        let gates:      Vec<Linear<B>> = (0..self.num_layers).map(|_| linear()).collect();

        tracing::debug!(
            "Highway ready: {} layers, hidden_dim={}, dropout={}, variant={}",
            self.num_layers, self.hidden_dim, self.dropout, self.variant,
        );

        Ok(Highway {
            transforms,
            gates,
            hidden_dim: self.hidden_dim,
            dropout:    self.dropout,
            variant:    Ignored(self.variant),
        })
    }
}

#[derive(Module, Debug)]
pub struct Highway<B: Backend> {
    pub transforms: Vec<Linear<B>>,
    pub gates:      Vec<Linear<B>>,
    pub hidden_dim: usize,
    pub dropout:    f64,
    pub variant:    Ignored<HighwayVariant>,
}

/// Output of a traced forward pass: the result plus the gate
/// tensor of every repetition, in order.
pub struct HighwayTrace<B: Backend, const D: usize> {
    pub output: Tensor<B, D>,
    pub gates:  Vec<Tensor<B, D>>,
}

impl<B: Backend, const D: usize> HighwayTrace<B, D> {
    /// Average gate value per repetition. Near 1 means the repetition
    /// mostly substitutes its transform, near 0 means it mostly carries.
    pub fn mean_gates(&self) -> Vec<f32> {
        self.gates
            .iter()
            .map(|g| g.clone().mean().into_scalar().elem::<f32>())
            .collect()
    }
}

impl<B: Backend> Highway<B> {
    pub fn num_layers(&self) -> usize {
        self.transforms.len()
    }

    /// The configuration this layer was built from.
    pub fn config(&self) -> HighwayConfig {
        HighwayConfig::new(self.hidden_dim)
            .with_num_layers(self.num_layers())
            .with_dropout(self.dropout)
            .with_variant(self.variant.0)
    }

    /// x: [..., hidden_dim] -> [..., hidden_dim]
    pub fn forward<const D: usize>(
        &self,
        x:    Tensor<B, D>,
        mode: ForwardMode,
    ) -> Result<Tensor<B, D>, HighwayError> {
        self.run(x, mode, |_| {})
    }

    /// Same as [`forward`](Self::forward) but also returns each repetition's gate.
    pub fn forward_traced<const D: usize>(
        &self,
        x:    Tensor<B, D>,
        mode: ForwardMode,
    ) -> Result<HighwayTrace<B, D>, HighwayError> {
        let mut gates = Vec::with_capacity(self.num_layers());
        let output = self.run(x, mode, |g| gates.push(g.clone()))?;
        Ok(HighwayTrace { output, gates })
    }

    fn run<const D: usize>(
        &self,
        x:           Tensor<B, D>,
        mode:        ForwardMode,
        mut on_gate: impl FnMut(&Tensor<B, D>),
    ) -> Result<Tensor<B, D>, HighwayError> {
        self.check_input(&x)?;
        let reference = self.variant.0 == HighwayVariant::Reference;

        let mut out = x;
        for (i, (transform, gate)) in self.transforms.iter().zip(&self.gates).enumerate() {
            if i > 0 {
                out = dropout(out, self.dropout, mode);
            }

            let t = relu(transform.forward(out.clone()));
            let g = if reference && i > 0 {
                sigmoid(transform.forward(out.clone()))
            } else {
                sigmoid(gate.forward(out.clone()))
            };
            on_gate(&g);

            let carry = if i == 0 { t.clone() } else { out };
            out = blend(t, g, carry);
        }

        Ok(out)
    }

    fn check_input<const D: usize>(&self, x: &Tensor<B, D>) -> Result<(), HighwayError> {
        let actual = x.dims().last().copied().unwrap_or(0);
        if actual != self.hidden_dim {
            return Err(HighwayError::ShapeMismatch {
                expected: self.hidden_dim,
                actual,
            });
        }
        Ok(())
    }
}

/// g * t + (1 - g) * carry, elementwise
fn blend<B: Backend, const D: usize>(
    t:     Tensor<B, D>,
    g:     Tensor<B, D>,
    carry: Tensor<B, D>,
) -> Tensor<B, D> {
    let keep = g.clone().neg().add_scalar(1.0);
    g * t + keep * carry
}
