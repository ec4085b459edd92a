//! Single-name analysis.

use abjad_model::{
    Convention, ElementBalance, Modulus, NameInput, NameProfile, NormalizationOptions, Result,
};

use crate::classify::{classify_buruj, classify_element};
use crate::reduce::{digital_root, mod_index};
use crate::resolve::require_name;
use crate::tables::LetterValueTable;
use crate::total::{breakdown_normalized, sum_normalized};

/// Analyze a name with default normalization.
pub fn analyze_name(input: &NameInput, convention: Convention) -> Result<NameProfile> {
    analyze_name_with(input, convention, &NormalizationOptions::default())
}

/// Analyze a name: total, reductions, classifications and letter balance.
///
/// The burj is taken from the name total, or from name plus mother total
/// when a mother's name is given. Latin names are transliterated first.
pub fn analyze_name_with(
    input: &NameInput,
    convention: Convention,
    options: &NormalizationOptions,
) -> Result<NameProfile> {
    let table = LetterValueTable::for_convention(convention);
    let name = require_name(&input.name, "name", options)?;
    let mother = input
        .mother()
        .map(|m| require_name(m, "mother_name", options))
        .transpose()?;

    let total = sum_normalized(&name.normalized, table);
    let mother_total = mother
        .as_ref()
        .map(|m| sum_normalized(&m.normalized, table));

    let element = classify_element(mod_index(total, Modulus::Elements))?;
    let burj_total = total + mother_total.unwrap_or(0);
    let burj = classify_buruj(mod_index(burj_total, Modulus::Buruj))?;

    let letters = breakdown_normalized(&name.normalized, table);
    let mut balance = ElementBalance::default();
    for element in letters.iter().filter_map(|l| l.element) {
        balance.add(element);
    }

    tracing::debug!(
        convention = %convention,
        total,
        with_mother = mother_total.is_some(),
        element = %element.element,
        burj = burj.index,
        "analyzed name"
    );

    Ok(NameProfile {
        input: input.name.clone(),
        transliteration: name.transliteration,
        normalized: name.normalized,
        convention,
        total,
        mother_total,
        digital_root: digital_root(total),
        element: *element,
        burj: *burj,
        letters,
        dominant_element: balance.dominant(),
        balance,
    })
}
