//! Configuration options for normalization and compatibility scoring.

use serde::{Deserialize, Serialize};

use crate::enums::Convention;
use crate::error::{AbjadError, Result};

/// What tāʾ marbūṭa (ة) becomes during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaMarbutaAs {
    /// Fold to hāʾ (ه), valued 5.
    #[default]
    Ha,
    /// Keep ة as its own letter, valued like tāʾ (400).
    Distinct,
}

/// Options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Remove tashkīl and Qurʾānic annotation marks.
    pub strip_diacritics: bool,

    /// Fold hamza-bearing letters (أ إ آ ٱ ء ؤ ئ) to their carriers.
    pub unify_alif: bool,

    /// Expand the single-codepoint Allah ligature (ﷲ) to الله.
    pub normalize_allah: bool,

    /// Treatment of tāʾ marbūṭa.
    pub ta_marbuta_as: TaMarbutaAs,

    /// Remove the tatweel elongation character (ـ).
    pub strip_tatweel: bool,

    /// Keep single spaces between words instead of removing all whitespace.
    pub keep_spaces: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            unify_alif: true,
            normalize_allah: true,
            ta_marbuta_as: TaMarbutaAs::Ha,
            strip_tatweel: true,
            keep_spaces: true,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strip_diacritics(mut self, enable: bool) -> Self {
        self.strip_diacritics = enable;
        self
    }

    pub fn with_unify_alif(mut self, enable: bool) -> Self {
        self.unify_alif = enable;
        self
    }

    pub fn with_normalize_allah(mut self, enable: bool) -> Self {
        self.normalize_allah = enable;
        self
    }

    pub fn with_ta_marbuta_as(mut self, mode: TaMarbutaAs) -> Self {
        self.ta_marbuta_as = mode;
        self
    }

    pub fn with_strip_tatweel(mut self, enable: bool) -> Self {
        self.strip_tatweel = enable;
        self
    }

    pub fn with_keep_spaces(mut self, enable: bool) -> Self {
        self.keep_spaces = enable;
        self
    }
}

/// Weights used to combine per-method scores into the overall score.
///
/// Only the ratios matter: weights of unavailable layers are dropped and
/// the remaining ones renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityWeights {
    /// Spiritual/destiny method (mod 9).
    pub spiritual: f64,
    /// Elemental/temperament method (mod 4).
    pub elemental: f64,
    /// Planetary/cosmic method (mod 7).
    pub planetary: f64,
    /// Daily interaction layer (needs both mothers' names).
    pub daily: f64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            spiritual: 0.30,
            elemental: 0.30,
            planetary: 0.20,
            daily: 0.20,
        }
    }
}

impl CompatibilityWeights {
    /// Reject negative or non-finite weights, an all-zero base set and weights
    /// whose sum overflows.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("spiritual", self.spiritual),
            ("elemental", self.elemental),
            ("planetary", self.planetary),
            ("daily", self.daily),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AbjadError::invalid_input(
                    format!("weights.{name}"),
                    format!("must be a finite, non-negative number (got {weight})"),
                ));
            }
        }
        if self.spiritual + self.elemental + self.planetary <= 0.0 {
            return Err(AbjadError::invalid_input(
                "weights",
                "spiritual, elemental and planetary weights cannot all be zero",
            ));
        }
        let sum: f64 = named.iter().map(|(_, weight)| weight).sum();
        if !sum.is_finite() {
            return Err(AbjadError::invalid_input(
                "weights",
                "weights are too large to sum",
            ));
        }
        Ok(())
    }
}

/// Options for a compatibility analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityOptions {
    pub convention: Convention,
    pub weights: CompatibilityWeights,
    pub normalization: NormalizationOptions,
}

impl CompatibilityOptions {
    pub fn new(convention: Convention) -> Self {
        Self {
            convention,
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: CompatibilityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_normalization(mut self, normalization: NormalizationOptions) -> Self {
        self.normalization = normalization;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_valid() {
        assert!(CompatibilityWeights::default().validate().is_ok());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let weights = CompatibilityWeights {
            planetary: -0.1,
            ..CompatibilityWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(matches!(err, AbjadError::InvalidInput { ref field, .. } if field == "weights.planetary"));
    }

    #[test]
    fn zero_base_weights_are_rejected() {
        let weights = CompatibilityWeights {
            spiritual: 0.0,
            elemental: 0.0,
            planetary: 0.0,
            daily: 1.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn overflowing_sum_is_rejected() {
        let weights = CompatibilityWeights {
            spiritual: 1e308,
            elemental: 1e308,
            planetary: 1e308,
            daily: 0.0,
        };
        assert_eq!(
            weights.validate(),
            Err(AbjadError::invalid_input(
                "weights",
                "weights are too large to sum"
            ))
        );
    }

    #[test]
    fn nan_weight_is_rejected() {
        let weights = CompatibilityWeights {
            daily: f64::NAN,
            ..CompatibilityWeights::default()
        };
        assert!(weights.validate().is_err());
    }
}
