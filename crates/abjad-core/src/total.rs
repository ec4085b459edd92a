//! Summing letter values into totals.

use abjad_model::{Convention, LetterValue, NormalizationOptions};
use abjad_normalization::normalize;

use crate::tables::{LetterValueTable, letter_element};

/// Abjad total of `name` under `convention`, after default normalization.
///
/// Characters without a value (Latin letters, digits, punctuation) add
/// nothing; empty input totals `0`.
pub fn total(name: &str, convention: Convention) -> u64 {
    total_with(
        name,
        LetterValueTable::for_convention(convention),
        &NormalizationOptions::default(),
    )
}

/// Abjad total with an explicit table and normalization options.
pub fn total_with(name: &str, table: &LetterValueTable, options: &NormalizationOptions) -> u64 {
    let normalized = normalize(name, options);
    let sum = sum_normalized(&normalized, table);
    tracing::debug!(
        convention = %table.convention(),
        letters = normalized.chars().filter(|c| !c.is_whitespace()).count(),
        total = sum,
        "computed total"
    );
    sum
}

/// Sum already normalized text.
pub fn sum_normalized(text: &str, table: &LetterValueTable) -> u64 {
    text.chars()
        .filter_map(|c| table.value(c))
        .map(u64::from)
        .sum()
}

/// Per-letter values of `name`, in order, after default normalization.
pub fn letter_breakdown(name: &str, convention: Convention) -> Vec<LetterValue> {
    let normalized = normalize(name, &NormalizationOptions::default());
    breakdown_normalized(&normalized, LetterValueTable::for_convention(convention))
}

/// Per-letter values of already normalized text; characters without a value
/// are skipped.
pub fn breakdown_normalized(text: &str, table: &LetterValueTable) -> Vec<LetterValue> {
    text.chars()
        .filter_map(|letter| {
            table.value(letter).map(|value| LetterValue {
                letter,
                value,
                element: letter_element(letter),
            })
        })
        .collect()
}
