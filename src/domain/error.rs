// ============================================================
// Layer 3 - Highway Errors
// ============================================================
// Both failures happen before any tensor work is done, so a
// caller never sees a half-applied stack.

/// Errors raised by [`HighwayConfig::init`](crate::ml::highway::HighwayConfig::init)
/// and [`Highway::forward`](crate::ml::highway::Highway::forward).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HighwayError {
    /// The layer was configured with values it cannot be built from
    /// (zero repetitions, zero width, dropout outside [0, 1)).
    #[error("invalid highway configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The input's trailing dimension does not match `hidden_dim`.
    #[error("shape mismatch: expected trailing dimension {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl HighwayError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let e = HighwayError::invalid("num_layers must be at least 1");
        assert_eq!(
            e.to_string(),
            "invalid highway configuration: num_layers must be at least 1"
        );

        let e = HighwayError::ShapeMismatch { expected: 4, actual: 5 };
        assert_eq!(
            e.to_string(),
            "shape mismatch: expected trailing dimension 4, got 5"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(HighwayError::ShapeMismatch { expected: 8, actual: 2 })?
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<HighwayError>().is_some());
    }
}
