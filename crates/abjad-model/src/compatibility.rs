//! Compatibility analysis result types.

use serde::Serialize;
use std::fmt;

use crate::classification::{BurujClassification, DestinyTier, PlanetClassification};
use crate::enums::{Convention, Element, ElementRelation, Recommendation, Weekday};
use crate::options::CompatibilityWeights;

/// The scoring methods combined into an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityMethod {
    Spiritual,
    Elemental,
    Planetary,
    Daily,
}

impl CompatibilityMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityMethod::Spiritual => "Spiritual (destiny)",
            CompatibilityMethod::Elemental => "Elemental (temperament)",
            CompatibilityMethod::Planetary => "Planetary (cosmic)",
            CompatibilityMethod::Daily => "Daily interaction",
        }
    }

    pub fn weight(&self, weights: &CompatibilityWeights) -> f64 {
        match self {
            CompatibilityMethod::Spiritual => weights.spiritual,
            CompatibilityMethod::Elemental => weights.elemental,
            CompatibilityMethod::Planetary => weights.planetary,
            CompatibilityMethod::Daily => weights.daily,
        }
    }
}

impl fmt::Display for CompatibilityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A method's share of the overall score, for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub method: CompatibilityMethod,
    /// Method score (0..=100).
    pub score: u8,
    /// Weight after renormalization over available methods.
    pub weight: f64,
    /// `score * weight`.
    pub contribution: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpiritualMethod {
    pub combined_total: u64,
    pub includes_mothers: bool,
    pub tier: DestinyTier,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementalMethod {
    pub element_a: Element,
    pub element_b: Element,
    pub relation: ElementRelation,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryMethod {
    pub combined_total: u64,
    pub planet: PlanetClassification,
    pub score: u8,
}

/// Fourth layer: how the two blessed days sit in the week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyInteraction {
    pub burj_a: BurujClassification,
    pub burj_b: BurujClassification,
    pub day_a: Weekday,
    pub day_b: Weekday,
    /// Circular distance between the days (0..=3).
    pub distance: u8,
    pub score: u8,
}

/// A layer that may be missing because its inputs were not supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LayerStatus<T> {
    Available(T),
    Unavailable { reason: String },
}

impl<T> LayerStatus<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, LayerStatus::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            LayerStatus::Available(value) => Some(value),
            LayerStatus::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub convention: Convention,
    pub total_a: u64,
    pub total_b: u64,
    /// Mothers' totals, present only when both were supplied.
    pub mother_totals: Option<(u64, u64)>,
    pub spiritual: SpiritualMethod,
    pub elemental: ElementalMethod,
    pub planetary: PlanetaryMethod,
    pub daily: LayerStatus<DailyInteraction>,
    /// Weights as configured, before renormalization.
    pub weights: CompatibilityWeights,
    pub components: Vec<ScoreComponent>,
    /// Weighted score in `0..=100`.
    pub overall: u8,
    pub recommendation: Recommendation,
}

impl CompatibilityResult {
    pub fn component(&self, method: CompatibilityMethod) -> Option<&ScoreComponent> {
        self.components.iter().find(|c| c.method == method)
    }
}
