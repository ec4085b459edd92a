//! Phoneme heuristic for words the lexicon does not know.
//!
//! Greedy longest match over a small rule table. Short vowels inside a word
//! are not written in Arabic and are dropped; vowels at the edges of a word
//! become letters. Doubled consonants collapse (shadda is not written).

/// One Latin sequence and the Arabic it most likely stands for.
struct Rule {
    latin: &'static str,
    arabic: &'static str,
    /// Other plausible readings, best first.
    alternates: &'static [&'static str],
}

/// Longest sequences first so that greedy matching prefers digraphs.
const RULES: &[Rule] = &[
    Rule { latin: "kh", arabic: "خ", alternates: &[] },
    Rule { latin: "sh", arabic: "ش", alternates: &[] },
    Rule { latin: "ch", arabic: "ش", alternates: &[] },
    Rule { latin: "th", arabic: "ث", alternates: &["ت"] },
    Rule { latin: "dh", arabic: "ذ", alternates: &["ض"] },
    Rule { latin: "gh", arabic: "غ", alternates: &[] },
    Rule { latin: "ph", arabic: "ف", alternates: &[] },
    Rule { latin: "ou", arabic: "و", alternates: &[] },
    Rule { latin: "aa", arabic: "ا", alternates: &[] },
    Rule { latin: "ee", arabic: "ي", alternates: &[] },
    Rule { latin: "ii", arabic: "ي", alternates: &[] },
    Rule { latin: "oo", arabic: "و", alternates: &[] },
    Rule { latin: "uu", arabic: "و", alternates: &[] },
    Rule { latin: "ai", arabic: "ي", alternates: &[] },
    Rule { latin: "ay", arabic: "ي", alternates: &[] },
    Rule { latin: "ei", arabic: "ي", alternates: &[] },
    Rule { latin: "ey", arabic: "ي", alternates: &[] },
    Rule { latin: "b", arabic: "ب", alternates: &[] },
    Rule { latin: "p", arabic: "ب", alternates: &[] },
    Rule { latin: "t", arabic: "ت", alternates: &["ط"] },
    Rule { latin: "j", arabic: "ج", alternates: &[] },
    Rule { latin: "h", arabic: "ح", alternates: &["ه"] },
    Rule { latin: "d", arabic: "د", alternates: &["ض"] },
    Rule { latin: "r", arabic: "ر", alternates: &[] },
    Rule { latin: "z", arabic: "ز", alternates: &["ظ"] },
    Rule { latin: "s", arabic: "س", alternates: &["ص"] },
    Rule { latin: "f", arabic: "ف", alternates: &[] },
    Rule { latin: "v", arabic: "ف", alternates: &[] },
    Rule { latin: "q", arabic: "ق", alternates: &[] },
    Rule { latin: "k", arabic: "ك", alternates: &["ق"] },
    Rule { latin: "c", arabic: "ك", alternates: &["س"] },
    Rule { latin: "g", arabic: "غ", alternates: &["ج"] },
    Rule { latin: "l", arabic: "ل", alternates: &[] },
    Rule { latin: "m", arabic: "م", alternates: &[] },
    Rule { latin: "n", arabic: "ن", alternates: &[] },
    Rule { latin: "w", arabic: "و", alternates: &[] },
    Rule { latin: "y", arabic: "ي", alternates: &[] },
    Rule { latin: "x", arabic: "كس", alternates: &[] },
    Rule { latin: "ʿ", arabic: "ع", alternates: &[] },
    Rule { latin: "'", arabic: "ء", alternates: &["ع"] },
];

/// A word rendered by the heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeuristicWord {
    /// Best reading, segment by segment.
    pub segments: Vec<Segment>,
    pub unmapped: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment {
    pub arabic: &'static str,
    pub alternates: &'static [&'static str],
}

impl HeuristicWord {
    pub fn primary(&self) -> String {
        self.segments.iter().map(|s| s.arabic).collect()
    }

    pub fn ambiguous_segments(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| !s.alternates.is_empty())
            .count()
    }

    /// Readings that differ from the primary in exactly one segment.
    pub fn single_substitutions(&self) -> Vec<String> {
        let mut out = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            for alternate in segment.alternates {
                let candidate: String = self
                    .segments
                    .iter()
                    .enumerate()
                    .map(|(j, s)| if i == j { *alternate } else { s.arabic })
                    .collect();
                out.push(candidate);
            }
        }
        out
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Transliterate one folded, lower-case word.
pub(crate) fn transliterate_word(word: &str) -> HeuristicWord {
    let chars: Vec<char> = word.chars().collect();
    let mut segments: Vec<Segment> = Vec::new();
    let mut unmapped = Vec::new();
    let mut last_latin: Option<&'static str> = None;
    let mut i = 0;

    while i < chars.len() {
        let at_start = i == 0;
        let c = chars[i];

        if let Some(rule) = match_rule(&chars[i..]) {
            let len = rule.latin.chars().count();
            // A digraph that spells a long vowel at the start still needs its alif.
            if at_start && rule.latin.starts_with(is_vowel) && rule.arabic != "ا" {
                segments.push(Segment { arabic: "ا", alternates: &[] });
            }
            let doubled = last_latin == Some(rule.latin) && !rule.latin.starts_with(is_vowel);
            if !doubled {
                segments.push(Segment {
                    arabic: rule.arabic,
                    alternates: rule.alternates,
                });
            }
            last_latin = Some(rule.latin);
            i += len;
            continue;
        }

        if is_vowel(c) {
            let at_end = i + 1 == chars.len();
            if at_start {
                segments.push(Segment { arabic: "ا", alternates: &[] });
            } else if at_end {
                match c {
                    'a' => segments.push(Segment {
                        arabic: "ة",
                        alternates: &["ا"],
                    }),
                    'i' => segments.push(Segment { arabic: "ي", alternates: &[] }),
                    'o' | 'u' => segments.push(Segment { arabic: "و", alternates: &[] }),
                    _ => {}
                }
            }
            last_latin = None;
            i += 1;
            continue;
        }

        unmapped.push(c);
        last_latin = None;
        i += 1;
    }

    HeuristicWord { segments, unmapped }
}

fn match_rule(rest: &[char]) -> Option<&'static Rule> {
    RULES.iter().find(|rule| {
        let mut latin = rule.latin.chars();
        let matched = rest
            .iter()
            .zip(latin.by_ref())
            .take_while(|(a, b)| a == &b)
            .count();
        matched == rule.latin.chars().count()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_inner_short_vowels_and_collapses_doubles() {
        let word = transliterate_word("muhammad");
        assert_eq!(word.primary(), "محمد");
        assert!(word.unmapped.is_empty());
    }

    #[test]
    fn initial_vowel_becomes_alif() {
        assert_eq!(transliterate_word("amin").primary(), "امن");
    }

    #[test]
    fn final_a_becomes_ta_marbuta_with_alif_alternate() {
        let word = transliterate_word("karima");
        assert_eq!(word.primary(), "كرمة");
        assert!(word.single_substitutions().contains(&"كرما".to_string()));
    }

    #[test]
    fn digraphs_take_precedence() {
        assert_eq!(transliterate_word("khalid").primary(), "خلد");
        assert_eq!(transliterate_word("zaynab").primary(), "زينب");
    }

    #[test]
    fn unmapped_characters_are_reported() {
        let word = transliterate_word("ali9");
        assert_eq!(word.unmapped, vec!['9']);
    }

    #[test]
    fn ambiguous_segments_are_counted() {
        // h, s and d all have alternates
        let word = transliterate_word("hasid");
        assert_eq!(word.ambiguous_segments(), 3);
        assert_eq!(word.single_substitutions().len(), 3);
    }
}
