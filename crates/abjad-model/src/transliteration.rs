//! Result types for best-effort Latin to Arabic transliteration.

use serde::{Deserialize, Serialize};

/// Highest confidence any transliteration may claim.
pub const MAX_CONFIDENCE: u8 = 95;

/// Dominant script of an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Arabic,
    Latin,
    Mixed,
    /// No letters of either script.
    Unknown,
}

/// Where the primary candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransliterationSource {
    /// Every word matched the lexicon.
    Lexicon,
    /// No word matched the lexicon.
    Heuristic,
    /// Some words matched the lexicon, others were guessed.
    Mixed,
    /// Nothing to transliterate.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transliteration {
    pub input: String,
    /// Best Arabic candidate.
    pub primary: String,
    /// Ranked alternates, best first, never containing `primary`.
    pub alternates: Vec<String>,
    /// Confidence in `0..=MAX_CONFIDENCE`.
    pub confidence: u8,
    pub source: TransliterationSource,
    /// Input characters no rule could map.
    pub unmapped: Vec<char>,
}

impl Transliteration {
    pub fn empty(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            primary: String::new(),
            alternates: Vec::new(),
            confidence: 0,
            source: TransliterationSource::Empty,
            unmapped: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}
