//! Best-effort Latin to Arabic transliteration.
//!
//! The whole input is first looked up in the name lexicon, with hyphenated
//! compounds such as `Abdul-Rahman` counting as one word. Failing that,
//! each word is looked up on its own and unknown words go through the
//! phoneme heuristic. The result is never an error: unmapped characters are
//! reported and lower the confidence instead.

mod lexicon;
mod phonemes;

use abjad_model::{MAX_CONFIDENCE, Script, Transliteration, TransliterationSource};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::charset::is_arabic_script;

const LEXICON_CONFIDENCE: u8 = MAX_CONFIDENCE;
const HEURISTIC_BASE: i32 = 70;
const AMBIGUITY_PENALTY: i32 = 5;
const UNMAPPED_PENALTY: i32 = 15;
const MAX_ALTERNATES: usize = 5;

/// The definite article; it is written joined to the following word.
const ARTICLE: &str = "ال";

/// One input word after transliteration.
struct RenderedWord {
    arabic: String,
    alternates: Vec<String>,
    confidence: u8,
    from_lexicon: bool,
    unmapped: Vec<char>,
}

/// Transliterate Latin-script `input` into Arabic script.
pub fn transliterate(input: &str) -> Transliteration {
    let folded = fold(input);
    let words = split_words(&folded);
    if words.is_empty() {
        return Transliteration::empty(input);
    }

    if let Some(entry) = lexicon::lookup(&phrase_key(&folded)) {
        tracing::debug!(words = words.len(), "transliterated from lexicon");
        return Transliteration {
            input: input.to_string(),
            primary: entry.arabic.to_string(),
            alternates: entry
                .alternates
                .iter()
                .take(MAX_ALTERNATES)
                .copied()
                .map(String::from)
                .collect(),
            confidence: LEXICON_CONFIDENCE,
            source: TransliterationSource::Lexicon,
            unmapped: Vec::new(),
        };
    }

    let rendered: Vec<RenderedWord> = words.iter().copied().map(render_word).collect();
    let unmapped: Vec<char> = rendered.iter().flat_map(|w| w.unmapped.clone()).collect();
    if !unmapped.is_empty() {
        tracing::warn!(
            count = unmapped.len(),
            "transliteration skipped unmapped characters"
        );
    }

    let primary = join_words(rendered.iter().map(|w| w.arabic.as_str()));
    if primary.is_empty() {
        return Transliteration {
            unmapped,
            ..Transliteration::empty(input)
        };
    }

    let confidence = average_confidence(&rendered);
    let source = if rendered.iter().all(|w| w.from_lexicon) {
        TransliterationSource::Lexicon
    } else if rendered.iter().any(|w| w.from_lexicon) {
        TransliterationSource::Mixed
    } else {
        TransliterationSource::Heuristic
    };
    let alternates = word_alternates(&rendered, &primary);

    tracing::debug!(
        words = rendered.len(),
        confidence,
        alternates = alternates.len(),
        "transliterated"
    );

    Transliteration {
        input: input.to_string(),
        primary,
        alternates,
        confidence,
        source,
        unmapped,
    }
}

/// Classify `input` by the scripts of its letters.
pub fn detect_script(input: &str) -> Script {
    let mut arabic = false;
    let mut latin = false;
    for c in input.chars() {
        if is_arabic_script(c) && c.is_alphabetic() {
            arabic = true;
        } else if is_latin_letter(c) {
            latin = true;
        }
    }
    match (arabic, latin) {
        (true, true) => Script::Mixed,
        (true, false) => Script::Arabic,
        (false, true) => Script::Latin,
        (false, false) => Script::Unknown,
    }
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (c.is_alphabetic()
            && matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}'))
}

/// Decompose, drop accents, unify apostrophes and lower-case.
///
/// `‘` and `` ` `` mark ʿayn, `’` and `ʾ` mark hamza.
fn fold(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            '\u{2018}' | '`' => 'ʿ',
            '\u{2019}' | '\u{02BE}' => '\'',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

fn split_words(folded: &str) -> Vec<&str> {
    folded
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .collect()
}

/// Lexicon key: folded ASCII letters only.
fn compact_key(folded: &str) -> String {
    folded.chars().filter(char::is_ascii_lowercase).collect()
}

/// Whole-input lexicon key. Words are compacted one by one and kept apart by
/// a space, so separate words never merge into an unrelated spelling.
fn phrase_key(folded: &str) -> String {
    folded
        .split_whitespace()
        .map(compact_key)
        .filter(|key| !key.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_word(word: &str) -> RenderedWord {
    if let Some(entry) = lexicon::lookup(&compact_key(word)) {
        return RenderedWord {
            arabic: entry.arabic.to_string(),
            alternates: entry.alternates.iter().copied().map(String::from).collect(),
            confidence: LEXICON_CONFIDENCE,
            from_lexicon: true,
            unmapped: Vec::new(),
        };
    }

    let guess = phonemes::transliterate_word(word);
    let penalty = AMBIGUITY_PENALTY * guess.ambiguous_segments() as i32
        + UNMAPPED_PENALTY * guess.unmapped.len() as i32;
    let confidence = (HEURISTIC_BASE - penalty).clamp(0, i32::from(MAX_CONFIDENCE)) as u8;
    RenderedWord {
        arabic: guess.primary(),
        alternates: guess.single_substitutions(),
        confidence,
        from_lexicon: false,
        unmapped: guess.unmapped,
    }
}

/// Join rendered words with spaces, attaching the article to what follows.
fn join_words<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    let mut glue = false;
    for word in words.filter(|w| !w.is_empty()) {
        if !out.is_empty() && !glue {
            out.push(' ');
        }
        out.push_str(word);
        glue = word == ARTICLE;
    }
    out
}

fn average_confidence(rendered: &[RenderedWord]) -> u8 {
    let sum: u32 = rendered.iter().map(|w| u32::from(w.confidence)).sum();
    let count = rendered.len() as u32;
    let mean = (sum + count / 2) / count;
    mean.min(u32::from(MAX_CONFIDENCE)) as u8
}

/// Whole-input readings obtained by swapping a single word for one of its
/// alternates, in word order.
fn word_alternates(rendered: &[RenderedWord], primary: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (i, word) in rendered.iter().enumerate() {
        for alternate in &word.alternates {
            let candidate = join_words(rendered.iter().enumerate().map(|(j, w)| {
                if i == j {
                    alternate.as_str()
                } else {
                    w.arabic.as_str()
                }
            }));
            if candidate != primary && !out.contains(&candidate) {
                out.push(candidate);
            }
            if out.len() == MAX_ALTERNATES {
                return out;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_accents_and_case() {
        assert_eq!(fold("Aïcha"), "aicha");
        assert_eq!(fold("Ma’mun"), "ma'mun");
        assert_eq!(fold("‘Ali"), "ʿali");
    }

    #[test]
    fn compact_key_keeps_letters_only() {
        assert_eq!(compact_key("abd-al rahman"), "abdalrahman");
        assert_eq!(compact_key("o'neil"), "oneil");
    }

    #[test]
    fn phrase_key_keeps_word_boundaries() {
        assert_eq!(phrase_key("abdul-rahman"), "abdulrahman");
        assert_eq!(phrase_key("al  i"), "al i");
        assert_eq!(phrase_key("mo 9 hamed"), "mo hamed");
    }

    #[test]
    fn article_is_joined() {
        let words = ["عبد", "ال", "كريم"];
        assert_eq!(join_words(words.into_iter()), "عبد الكريم");
    }

    #[test]
    fn confidence_is_rounded_mean() {
        let word = |confidence| RenderedWord {
            arabic: "ب".to_string(),
            alternates: Vec::new(),
            confidence,
            from_lexicon: false,
            unmapped: Vec::new(),
        };
        assert_eq!(average_confidence(&[word(95), word(60)]), 78);
    }

    #[test]
    fn script_detection() {
        assert_eq!(detect_script("محمد"), Script::Arabic);
        assert_eq!(detect_script("Muhammad"), Script::Latin);
        assert_eq!(detect_script("Ali علي"), Script::Mixed);
        assert_eq!(detect_script("123 ✨"), Script::Unknown);
        assert_eq!(detect_script("Aïcha"), Script::Latin);
    }
}
