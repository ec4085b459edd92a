//! Individual normalization passes.
//!
//! Each pass is a pure `&str -> String` function. [`PASSES`] fixes their
//! order; [`crate::normalize`] runs the list until the text is stable.

use abjad_model::{NormalizationOptions, TaMarbutaAs};
use unicode_normalization::UnicodeNormalization;

use crate::charset::{
    ALLAH_LIGATURE, ALLAH_SPELLED, ALIF_MAQSURA, HA, TA_MARBUTA, TATWEEL, YA, hamza_carrier,
    is_canonical_letter, is_diacritic, is_hamza_form, is_presentation_form, is_word_ligature,
    regional_base,
};

/// A single step of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Compose,
    ExpandLigatures,
    FoldVariants,
    StripDiacritics,
    StripTatweel,
    RetainArabic,
    ApplySpacePolicy,
}

/// Passes in execution order.
pub const PASSES: [Pass; 7] = [
    Pass::Compose,
    Pass::ExpandLigatures,
    Pass::FoldVariants,
    Pass::StripDiacritics,
    Pass::StripTatweel,
    Pass::RetainArabic,
    Pass::ApplySpacePolicy,
];

impl Pass {
    pub fn name(&self) -> &'static str {
        match self {
            Pass::Compose => "compose",
            Pass::ExpandLigatures => "expand_ligatures",
            Pass::FoldVariants => "fold_variants",
            Pass::StripDiacritics => "strip_diacritics",
            Pass::StripTatweel => "strip_tatweel",
            Pass::RetainArabic => "retain_arabic",
            Pass::ApplySpacePolicy => "apply_space_policy",
        }
    }

    pub fn apply(&self, text: &str, options: &NormalizationOptions) -> String {
        match self {
            Pass::Compose => compose(text),
            Pass::ExpandLigatures => expand_ligatures(text, options),
            Pass::FoldVariants => fold_variants(text, options),
            Pass::StripDiacritics => {
                if options.strip_diacritics {
                    strip_diacritics(text)
                } else {
                    text.to_string()
                }
            }
            Pass::StripTatweel => {
                if options.strip_tatweel {
                    strip_tatweel(text)
                } else {
                    text.to_string()
                }
            }
            Pass::RetainArabic => retain_arabic(text, options),
            Pass::ApplySpacePolicy => apply_space_policy(text, options.keep_spaces),
        }
    }
}

/// Unicode NFC.
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Spell out ligatures and presentation forms as base letters.
///
/// The Allah ligature is expanded only when `normalize_allah` is set; other
/// whole-word ligatures are left for [`retain_arabic`] to drop. Whitespace
/// produced by compatibility decomposition (isolated tanwīn forms) is
/// discarded so it cannot split words.
pub fn expand_ligatures(text: &str, options: &NormalizationOptions) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ALLAH_LIGATURE {
            if options.normalize_allah {
                out.push_str(ALLAH_SPELLED);
            } else {
                out.push(c);
            }
        } else if is_presentation_form(c) && !is_word_ligature(c) {
            out.extend(std::iter::once(c).nfkc().filter(|d| !d.is_whitespace()));
        } else {
            out.push(c);
        }
    }
    out
}

/// Map letter variants onto canonical letters.
///
/// Regional letters and alif maqṣūra always fold; hamza carriers fold when
/// `unify_alif` is set; tāʾ marbūṭa folds to hāʾ unless kept distinct.
pub fn fold_variants(text: &str, options: &NormalizationOptions) -> String {
    text.chars()
        .map(|c| {
            let c = regional_base(c).unwrap_or(c);
            let c = if options.unify_alif {
                hamza_carrier(c).unwrap_or(c)
            } else {
                c
            };
            match c {
                ALIF_MAQSURA => YA,
                TA_MARBUTA if options.ta_marbuta_as == TaMarbutaAs::Ha => HA,
                other => other,
            }
        })
        .collect()
}

pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|c| !is_diacritic(*c)).collect()
}

pub fn strip_tatweel(text: &str) -> String {
    text.chars().filter(|c| *c != TATWEEL).collect()
}

/// Drop everything that is not a retained Arabic character or whitespace.
pub fn retain_arabic(text: &str, options: &NormalizationOptions) -> String {
    text.chars()
        .filter(|c| c.is_whitespace() || is_retained(*c, options))
        .collect()
}

/// Whether `c` may appear in normalized output under `options`.
pub fn is_retained(c: char, options: &NormalizationOptions) -> bool {
    is_canonical_letter(c)
        || (!options.unify_alif && is_hamza_form(c))
        || (options.ta_marbuta_as == TaMarbutaAs::Distinct && c == TA_MARBUTA)
        || (!options.strip_diacritics && is_diacritic(c))
        || (!options.strip_tatweel && c == TATWEEL)
}

/// Collapse whitespace to single inner spaces, or remove it entirely.
pub fn apply_space_policy(text: &str, keep_spaces: bool) -> String {
    if keep_spaces {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> NormalizationOptions {
        NormalizationOptions::default()
    }

    #[test]
    fn compose_joins_alif_and_hamza() {
        assert_eq!(compose("\u{0627}\u{0654}"), "\u{0623}");
    }

    #[test]
    fn allah_ligature_respects_option() {
        assert_eq!(expand_ligatures("\u{FDF2}", &defaults()), "الله");
        let keep = defaults().with_normalize_allah(false);
        assert_eq!(expand_ligatures("\u{FDF2}", &keep), "\u{FDF2}");
    }

    #[test]
    fn presentation_forms_decompose() {
        // ﻻ lam-alif isolated form
        assert_eq!(expand_ligatures("\u{FEFB}", &defaults()), "لا");
        // ﻣ mim initial form
        assert_eq!(expand_ligatures("\u{FEE3}", &defaults()), "م");
        // ﷺ is a whole-word ligature and stays as-is
        assert_eq!(expand_ligatures("\u{FDFA}", &defaults()), "\u{FDFA}");
    }

    #[test]
    fn fold_variants_maps_hamza_and_regional_letters() {
        assert_eq!(fold_variants("أإآٱءؤئ", &defaults()), "اااااوي");
        assert_eq!(fold_variants("پچژگکی", &defaults()), "بجزككي");
        assert_eq!(fold_variants("موسى", &defaults()), "موسي");
    }

    #[test]
    fn fold_variants_keeps_hamza_without_unify() {
        let options = defaults().with_unify_alif(false);
        assert_eq!(fold_variants("أحمد", &options), "أحمد");
    }

    #[test]
    fn ta_marbuta_modes() {
        assert_eq!(fold_variants("فاطمة", &defaults()), "فاطمه");
        let distinct = defaults().with_ta_marbuta_as(TaMarbutaAs::Distinct);
        assert_eq!(fold_variants("فاطمة", &distinct), "فاطمة");
    }

    #[test]
    fn strips_marks_and_tatweel() {
        assert_eq!(strip_diacritics("مُحَمَّد"), "محمد");
        assert_eq!(strip_tatweel("محـــمد"), "محمد");
    }

    #[test]
    fn retain_drops_latin_digits_and_emoji() {
        assert_eq!(retain_arabic("علي Ali 42 ✨", &defaults()), "علي   ");
    }

    #[test]
    fn space_policy() {
        assert_eq!(apply_space_policy("  عبد \t الله  ", true), "عبد الله");
        assert_eq!(apply_space_policy("  عبد \t الله  ", false), "عبدالله");
    }

    #[test]
    fn pass_order_is_fixed() {
        let names: Vec<_> = PASSES.iter().map(Pass::name).collect();
        assert_eq!(
            names,
            [
                "compose",
                "expand_ligatures",
                "fold_variants",
                "strip_diacritics",
                "strip_tatweel",
                "retain_arabic",
                "apply_space_policy"
            ]
        );
    }
}
