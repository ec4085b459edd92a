//! Descriptive records returned by the classification lookups.
//!
//! All records are authored static data, so their text fields borrow
//! `'static` strings and the records are `Copy`.

use serde::Serialize;
use std::fmt;

use crate::enums::{Element, Planet, Weekday};

/// A Qurʾānic verse reference (surah and ayah range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseRef {
    pub surah: u16,
    pub surah_name: &'static str,
    pub ayah_start: u16,
    pub ayah_end: u16,
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ayah_start == self.ayah_end {
            write!(f, "{} {}:{}", self.surah_name, self.surah, self.ayah_start)
        } else {
            write!(
                f,
                "{} {}:{}-{}",
                self.surah_name, self.surah, self.ayah_start, self.ayah_end
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementClassification {
    pub element: Element,
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub symbol: &'static str,
    pub qualities: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BurujClassification {
    /// 1-based position (1 Ḥamal .. 12 Ḥūt).
    pub index: u32,
    pub name: &'static str,
    pub arabic_name: &'static str,
    /// Western zodiac equivalent.
    pub zodiac: &'static str,
    pub element: Element,
    pub ruling_planet: Planet,
    pub blessed_day: Weekday,
    pub verse: VerseRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetClassification {
    pub planet: Planet,
    pub arabic_name: &'static str,
    pub day: Weekday,
    /// Compatibility flavor for a couple ruled by this planet.
    pub flavor: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinyTier {
    /// 1-based tier (1..=9).
    pub index: u32,
    pub label: &'static str,
    pub description: &'static str,
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_ref_display() {
        let single = VerseRef {
            surah: 13,
            surah_name: "Ar-Ra'd",
            ayah_start: 28,
            ayah_end: 28,
        };
        assert_eq!(single.to_string(), "Ar-Ra'd 13:28");

        let range = VerseRef {
            surah: 94,
            surah_name: "Ash-Sharh",
            ayah_start: 5,
            ayah_end: 6,
        };
        assert_eq!(range.to_string(), "Ash-Sharh 94:5-6");
    }
}
