// ============================================================
// Layer 5 - Mode-aware Dropout
// ============================================================
// Burn's nn::Dropout decides whether to drop based on the
// backend (autodiff on = training). The highway layer takes the
// mode as an explicit argument instead, so the mask is built
// here from the same inverted-dropout rule:
//
//   keep ~ Bernoulli(1 - p)
//   y    = x * keep / (1 - p)
//
// Scaling by 1/(1 - p) keeps the expected activation equal
// between train and eval, so eval can skip dropout entirely.
//
// Reference: Srivastava et al. (2014) Dropout

use burn::{prelude::*, tensor::Distribution};

use crate::domain::{ForwardMode, HighwayError};

/// Checks a dropout probability lies in [0, 1).
pub fn validate_rate(prob: f64) -> Result<(), HighwayError> {
    if (0.0..1.0).contains(&prob) {
        Ok(())
    } else {
        Err(HighwayError::invalid(format!(
            "dropout must be in [0, 1), got {prob}"
        )))
    }
}

/// Zero random elements of `x` with probability `prob` in train mode.
/// Identity in eval mode or when `prob` is zero.
pub fn dropout<B: Backend, const D: usize>(
    x:    Tensor<B, D>,
    prob: f64,
    mode: ForwardMode,
) -> Tensor<B, D> {
    if !mode.is_training() || prob == 0.0 {
        return x;
    }

    let keep = 1.0 - prob;
    let mask = x.random_like(Distribution::Bernoulli(keep));
    (x * mask).div_scalar(keep)
}
