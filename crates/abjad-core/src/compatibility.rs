//! Two-person compatibility scoring.
//!
//! Three base methods are always computed from the two name totals:
//!
//! - **Spiritual**: combined total reduced mod 9 to a destiny tier
//! - **Elemental**: each total reduced mod 4 to an element, scored by the
//!   element affinity matrix
//! - **Planetary**: combined total reduced mod 7 to a ruling planet
//!
//! A fourth, daily-interaction layer needs both mothers' names. The overall
//! score is a weighted mean of the available methods, with the weights
//! renormalized over what was computed and each method's share reported as a
//! [`ScoreComponent`].

use abjad_model::{
    AbjadError, CompatibilityMethod, CompatibilityOptions, CompatibilityResult,
    CompatibilityWeights, DailyInteraction, Element, ElementRelation, ElementalMethod,
    LayerStatus, Modulus, NameInput, PlanetaryMethod, Recommendation, Result, ScoreComponent,
    SpiritualMethod,
};

use crate::classify::{classify_buruj, classify_element, classify_planet, destiny_tier};
use crate::reduce::mod_index;
use crate::resolve::require_name;
use crate::tables::LetterValueTable;
use crate::total::sum_normalized;

/// Affinity scores indexed by `[a.index() - 1][b.index() - 1]`, in element
/// order Fire, Earth, Air, Water.
pub static ELEMENT_AFFINITY: [[u8; 4]; 4] = [
    [90, 60, 75, 35],
    [60, 90, 35, 75],
    [75, 35, 90, 60],
    [35, 75, 60, 90],
];

/// Daily-layer score by circular distance between blessed days (0..=3).
pub static DAILY_SCORES: [u8; 4] = [90, 75, 60, 45];

/// Score the matrix assigns to each kind of relation.
pub fn relation_score(relation: ElementRelation) -> u8 {
    match relation {
        ElementRelation::Harmonious => 90,
        ElementRelation::Complementary => 75,
        ElementRelation::Neutral => 60,
        ElementRelation::Opposing => 35,
    }
}

/// Affinity of two elements; symmetric and defined for all 16 pairs.
pub fn element_affinity(a: Element, b: Element) -> u8 {
    ELEMENT_AFFINITY[a.index() as usize - 1][b.index() as usize - 1]
}

/// Score two people's names.
///
/// Both names are required; mothers' names are optional and only used when
/// both are given. Errors are raised before any score is computed.
pub fn analyze_compatibility(
    a: &NameInput,
    b: &NameInput,
    options: &CompatibilityOptions,
) -> Result<CompatibilityResult> {
    options.weights.validate()?;
    let norm = &options.normalization;
    let table = LetterValueTable::for_convention(options.convention);

    let name_a = require_name(&a.name, "name_a", norm)?;
    let name_b = require_name(&b.name, "name_b", norm)?;
    let mothers = match (a.mother(), b.mother()) {
        (Some(ma), Some(mb)) => Some((
            require_name(ma, "mother_name_a", norm)?,
            require_name(mb, "mother_name_b", norm)?,
        )),
        _ => None,
    };

    let total_a = sum_normalized(&name_a.normalized, table);
    let total_b = sum_normalized(&name_b.normalized, table);
    let mother_totals = mothers.as_ref().map(|(ma, mb)| {
        (
            sum_normalized(&ma.normalized, table),
            sum_normalized(&mb.normalized, table),
        )
    });
    let combined = total_a + total_b + mother_totals.map_or(0, |(ma, mb)| ma + mb);

    let spiritual = spiritual_method(combined, mother_totals.is_some())?;
    let elemental = elemental_method(total_a, total_b)?;
    let planetary = planetary_method(combined)?;
    let daily = match mother_totals {
        Some((ma, mb)) => LayerStatus::Available(daily_interaction(total_a + ma, total_b + mb)?),
        None => LayerStatus::Unavailable {
            reason: missing_mothers_reason(a, b).to_string(),
        },
    };

    let mut scores = vec![
        (CompatibilityMethod::Spiritual, spiritual.score),
        (CompatibilityMethod::Elemental, elemental.score),
        (CompatibilityMethod::Planetary, planetary.score),
    ];
    if let Some(layer) = daily.as_available() {
        scores.push((CompatibilityMethod::Daily, layer.score));
    }
    let components = weigh(&scores, &options.weights)?;
    let overall = overall_score(&components);
    let recommendation = Recommendation::from_score(overall);

    tracing::debug!(
        convention = %options.convention,
        total_a,
        total_b,
        with_mothers = mother_totals.is_some(),
        overall,
        "computed compatibility"
    );

    Ok(CompatibilityResult {
        convention: options.convention,
        total_a,
        total_b,
        mother_totals,
        spiritual,
        elemental,
        planetary,
        daily,
        weights: options.weights,
        components,
        overall,
        recommendation,
    })
}

fn spiritual_method(combined: u64, includes_mothers: bool) -> Result<SpiritualMethod> {
    let tier = destiny_tier(mod_index(combined, Modulus::Destiny))?;
    Ok(SpiritualMethod {
        combined_total: combined,
        includes_mothers,
        tier: *tier,
        score: tier.score,
    })
}

fn elemental_method(total_a: u64, total_b: u64) -> Result<ElementalMethod> {
    let element_a = classify_element(mod_index(total_a, Modulus::Elements))?.element;
    let element_b = classify_element(mod_index(total_b, Modulus::Elements))?.element;
    Ok(ElementalMethod {
        element_a,
        element_b,
        relation: ElementRelation::between(element_a, element_b),
        score: element_affinity(element_a, element_b),
    })
}

fn planetary_method(combined: u64) -> Result<PlanetaryMethod> {
    let planet = classify_planet(mod_index(combined, Modulus::Planets))?;
    Ok(PlanetaryMethod {
        combined_total: combined,
        planet: *planet,
        score: planet.score,
    })
}

/// Compare the blessed days of the two buruj derived from name plus mother.
fn daily_interaction(with_mother_a: u64, with_mother_b: u64) -> Result<DailyInteraction> {
    let burj_a = classify_buruj(mod_index(with_mother_a, Modulus::Buruj))?;
    let burj_b = classify_buruj(mod_index(with_mother_b, Modulus::Buruj))?;
    let distance = burj_a.blessed_day.circular_distance(burj_b.blessed_day);
    let score = DAILY_SCORES
        .get(usize::from(distance))
        .copied()
        .ok_or(AbjadError::InvalidIndex {
            index: u32::from(distance),
            base: DAILY_SCORES.len() as u32,
        })?;
    Ok(DailyInteraction {
        burj_a: *burj_a,
        burj_b: *burj_b,
        day_a: burj_a.blessed_day,
        day_b: burj_b.blessed_day,
        distance,
        score,
    })
}

fn missing_mothers_reason(a: &NameInput, b: &NameInput) -> &'static str {
    match (a.mother(), b.mother()) {
        (None, None) => "mothers' names were not given",
        _ => "only one mother's name was given; the daily layer needs both",
    }
}

/// Renormalize the weights of the computed methods and attach them to the
/// method scores.
fn weigh(
    scores: &[(CompatibilityMethod, u8)],
    weights: &CompatibilityWeights,
) -> Result<Vec<ScoreComponent>> {
    let sum: f64 = scores.iter().map(|(method, _)| method.weight(weights)).sum();
    if sum <= 0.0 {
        return Err(AbjadError::invalid_input(
            "weights",
            "weights of the computed methods sum to zero",
        ));
    }
    Ok(scores
        .iter()
        .map(|&(method, score)| {
            let weight = method.weight(weights) / sum;
            ScoreComponent {
                method,
                score,
                weight,
                contribution: f64::from(score) * weight,
            }
        })
        .collect())
}

fn overall_score(components: &[ScoreComponent]) -> u8 {
    let sum: f64 = components.iter().map(|c| c.contribution).sum();
    // method scores are in 0..=100 and weights sum to 1
    sum.round().clamp(0.0, 100.0) as u8
}
