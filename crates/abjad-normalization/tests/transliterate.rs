//! Behaviour of the Latin to Arabic transliterator.

use abjad_model::{MAX_CONFIDENCE, Script, TransliterationSource};
use abjad_normalization::{detect_script, transliterate};
use proptest::prelude::*;

#[test]
fn known_name_comes_from_lexicon() {
    let result = transliterate("Muhammad");
    assert_eq!(result.primary, "محمد");
    assert_eq!(result.source, TransliterationSource::Lexicon);
    assert_eq!(result.confidence, 95);
    assert!(result.unmapped.is_empty());
}

#[test]
fn lookup_ignores_case_accents_and_separators() {
    assert_eq!(transliterate("AÏCHA").primary, "عائشة");
    assert_eq!(transliterate("Abdul-Rahman").primary, "عبد الرحمن");
    assert_eq!(transliterate("abd al rahman").primary, "عبد الرحمن");
}

#[test]
fn separate_words_do_not_merge_into_a_known_name() {
    for input in ["Al I", "Ha San", "Mo Hamed"] {
        let result = transliterate(input);
        assert_ne!(result.source, TransliterationSource::Lexicon, "{input}");
        assert!(result.confidence < MAX_CONFIDENCE, "{input}");
    }
    assert_ne!(transliterate("Al I").primary, "علي");
}

#[test]
fn lexicon_alternates_are_offered() {
    let result = transliterate("Fatima");
    assert_eq!(result.primary, "فاطمة");
    assert_eq!(result.alternates, vec!["فاطمه".to_string()]);
}

#[test]
fn article_joins_the_following_word() {
    let result = transliterate("Abd al-Karim");
    assert_eq!(result.primary, "عبد الكريم");
    assert_eq!(result.source, TransliterationSource::Lexicon);
    assert_eq!(result.confidence, 95);
}

#[test]
fn unknown_word_falls_back_to_heuristic() {
    let result = transliterate("Fatoumata Binta");
    assert_eq!(result.primary, "فاطمة بنتة");
    assert_eq!(result.source, TransliterationSource::Mixed);
    // lexicon 95 and heuristic 70 - 2 * 5
    assert_eq!(result.confidence, 78);
    assert_eq!(
        result.alternates,
        vec![
            "فاطمه بنتة".to_string(),
            "فاطمة بنطة".to_string(),
            "فاطمة بنتا".to_string(),
        ]
    );
}

#[test]
fn unmapped_characters_lower_confidence() {
    let result = transliterate("Xq9");
    assert_eq!(result.primary, "كسق");
    assert_eq!(result.source, TransliterationSource::Heuristic);
    assert_eq!(result.confidence, 55);
    assert_eq!(result.unmapped, vec!['9']);
}

#[test]
fn empty_and_unmappable_input_is_not_an_error() {
    for input in ["", "   ", " - "] {
        let result = transliterate(input);
        assert!(result.is_empty());
        assert_eq!(result.source, TransliterationSource::Empty);
        assert_eq!(result.confidence, 0);
    }

    let digits = transliterate("123");
    assert!(digits.is_empty());
    assert_eq!(digits.source, TransliterationSource::Empty);
    assert_eq!(digits.unmapped, vec!['1', '2', '3']);
}

#[test]
fn script_of_common_inputs() {
    assert_eq!(detect_script("Khadija"), Script::Latin);
    assert_eq!(detect_script("خديجة"), Script::Arabic);
    assert_eq!(detect_script("Khadija خديجة"), Script::Mixed);
    assert_eq!(detect_script(""), Script::Unknown);
}

proptest! {
    #[test]
    fn confidence_and_alternates_stay_bounded(input in "[a-zA-Z' -]{0,24}") {
        let result = transliterate(&input);
        prop_assert!(result.confidence <= MAX_CONFIDENCE);
        prop_assert!(result.alternates.len() <= 5);
        prop_assert!(!result.alternates.contains(&result.primary));

        let mut seen = result.alternates.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), result.alternates.len());
    }

    #[test]
    fn never_panics_on_arbitrary_text(input in any::<String>()) {
        let result = transliterate(&input);
        prop_assert!(result.confidence <= MAX_CONFIDENCE);
    }
}
