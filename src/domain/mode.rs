// ============================================================
// Layer 3 - Forward Mode and Variant
// ============================================================
// ForwardMode is passed into every forward call instead of
// living as a flag on the layer, so applying a layer never
// depends on hidden mutable state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether dropout between repetitions is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardMode {
    /// Dropout active
    Train,
    /// Dropout is an identity pass-through
    #[default]
    Eval,
}

impl ForwardMode {
    pub fn is_training(self) -> bool {
        matches!(self, ForwardMode::Train)
    }
}

impl fmt::Display for ForwardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardMode::Train => write!(f, "train"),
            ForwardMode::Eval  => write!(f, "eval"),
        }
    }
}

/// Which blend rule the stack follows.
///
/// Both variants blend the first repetition's candidate with itself and
/// carry the repetition input through every later one.
///
/// `Standard` computes every gate with the repetition's own gate map.
///
/// `Reference` reproduces an older behaviour kept for comparison runs:
/// repetitions after the first compute their gate with the transform map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighwayVariant {
    #[default]
    Standard,
    Reference,
}

impl fmt::Display for HighwayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighwayVariant::Standard  => write!(f, "standard"),
            HighwayVariant::Reference => write!(f, "reference"),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_eval() {
        assert_eq!(ForwardMode::default(), ForwardMode::Eval);
        assert!(!ForwardMode::Eval.is_training());
        assert!(ForwardMode::Train.is_training());
    }

    #[test]
    fn test_variant_serialises_lowercase() {
        let json = serde_json::to_string(&HighwayVariant::Reference).unwrap();
        assert_eq!(json, "\"reference\"");
        let back: HighwayVariant = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(back, HighwayVariant::Standard);
    }
}
