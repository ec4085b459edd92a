//! Type-safe enumerations for Abjad concepts.
//!
//! These enums replace the loose strings ("maghribi", "fire", "venus") that
//! callers pass around, so that every lookup is total at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regional letter-value convention.
///
/// The two conventions agree on every letter except `ض`, `ظ` and `غ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Western (North African) values.
    #[default]
    Maghribi,
    /// Eastern values.
    Mashriqi,
}

impl Convention {
    pub const ALL: [Convention; 2] = [Convention::Maghribi, Convention::Mashriqi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Maghribi => "maghribi",
            Convention::Mashriqi => "mashriqi",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maghribi" | "maghrebi" | "western" => Ok(Convention::Maghribi),
            "mashriqi" | "mashreqi" | "eastern" => Ok(Convention::Mashriqi),
            _ => Err(format!("Unknown convention: {s}")),
        }
    }
}

/// One of the four classical elements.
///
/// The discriminant order is the order of the base-4 classification:
/// 1 Fire, 2 Earth, 3 Air, 4 Water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    /// 1-based position in the element cycle.
    pub fn index(&self) -> u32 {
        match self {
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Air => 3,
            Element::Water => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    /// Fire and Air are hot; Earth and Water are cold.
    pub fn is_hot(&self) -> bool {
        matches!(self, Element::Fire | Element::Air)
    }

    /// Fire and Earth are dry; Air and Water are moist.
    pub fn is_dry(&self) -> bool {
        matches!(self, Element::Fire | Element::Earth)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fire" | "nar" => Ok(Element::Fire),
            "earth" | "turab" => Ok(Element::Earth),
            "air" | "hawa" => Ok(Element::Air),
            "water" | "maa" => Ok(Element::Water),
            _ => Err(format!("Unknown element: {s}")),
        }
    }
}

/// How two elements relate in the temperament scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// Both people share the same element.
    Harmonious,
    /// Elements share temperature (Fire/Air, Earth/Water).
    Complementary,
    /// Elements share humidity (Fire/Earth, Air/Water).
    Neutral,
    /// Elements share neither quality (Fire/Water, Air/Earth).
    Opposing,
}

impl ElementRelation {
    pub fn between(a: Element, b: Element) -> Self {
        if a == b {
            ElementRelation::Harmonious
        } else if a.is_hot() == b.is_hot() {
            ElementRelation::Complementary
        } else if a.is_dry() == b.is_dry() {
            ElementRelation::Neutral
        } else {
            ElementRelation::Opposing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementRelation::Harmonious => "Harmonious",
            ElementRelation::Complementary => "Complementary",
            ElementRelation::Neutral => "Neutral",
            ElementRelation::Opposing => "Opposing",
        }
    }
}

impl fmt::Display for ElementRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The seven classical planets in Chaldean weekday order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
    ];

    pub fn index(&self) -> u32 {
        match self {
            Planet::Sun => 1,
            Planet::Moon => 2,
            Planet::Mars => 3,
            Planet::Mercury => 4,
            Planet::Jupiter => 5,
            Planet::Venus => 6,
            Planet::Saturn => 7,
        }
    }

    /// The weekday the planet rules.
    pub fn weekday(&self) -> Weekday {
        match self {
            Planet::Sun => Weekday::Sunday,
            Planet::Moon => Weekday::Monday,
            Planet::Mars => Weekday::Tuesday,
            Planet::Mercury => Weekday::Wednesday,
            Planet::Jupiter => Weekday::Thursday,
            Planet::Venus => Weekday::Friday,
            Planet::Saturn => Weekday::Saturday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Days since Sunday (0..=6).
    pub fn number_from_sunday(&self) -> u8 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    /// Shortest distance around the week, in days (0..=3).
    pub fn circular_distance(&self, other: Weekday) -> u8 {
        let a = self.number_from_sunday();
        let b = other.number_from_sunday();
        let forward = a.abs_diff(b);
        forward.min(7 - forward)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bucket sizes used by the 1-indexed modulo reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modulus {
    /// Four elements.
    Elements,
    /// Seven planets.
    Planets,
    /// Nine destiny tiers.
    Destiny,
    /// Twelve buruj.
    Buruj,
}

impl Modulus {
    pub const ALL: [Modulus; 4] = [
        Modulus::Elements,
        Modulus::Planets,
        Modulus::Destiny,
        Modulus::Buruj,
    ];

    pub fn value(&self) -> u32 {
        match self {
            Modulus::Elements => 4,
            Modulus::Planets => 7,
            Modulus::Destiny => 9,
            Modulus::Buruj => 12,
        }
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Qualitative verdict derived from an overall compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighlyCompatible,
    WorkableWithEffort,
    Challenging,
}

impl Recommendation {
    /// Lowest overall score that counts as highly compatible.
    pub const HIGH_THRESHOLD: u8 = 75;
    /// Lowest overall score that counts as workable.
    pub const WORKABLE_THRESHOLD: u8 = 55;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Recommendation::HighlyCompatible
        } else if score >= Self::WORKABLE_THRESHOLD {
            Recommendation::WorkableWithEffort
        } else {
            Recommendation::Challenging
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::HighlyCompatible => "highly compatible",
            Recommendation::WorkableWithEffort => "workable with effort",
            Recommendation::Challenging => "challenging",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_relation_follows_qualities() {
        use ElementRelation::{Complementary, Harmonious, Neutral, Opposing};

        assert_eq!(ElementRelation::between(Element::Fire, Element::Fire), Harmonious);
        assert_eq!(ElementRelation::between(Element::Fire, Element::Air), Complementary);
        assert_eq!(ElementRelation::between(Element::Earth, Element::Water), Complementary);
        assert_eq!(ElementRelation::between(Element::Fire, Element::Earth), Neutral);
        assert_eq!(ElementRelation::between(Element::Air, Element::Water), Neutral);
        assert_eq!(ElementRelation::between(Element::Fire, Element::Water), Opposing);
        assert_eq!(ElementRelation::between(Element::Air, Element::Earth), Opposing);
    }

    #[test]
    fn weekday_distance_wraps_around() {
        assert_eq!(Weekday::Sunday.circular_distance(Weekday::Sunday), 0);
        assert_eq!(Weekday::Sunday.circular_distance(Weekday::Saturday), 1);
        assert_eq!(Weekday::Monday.circular_distance(Weekday::Thursday), 3);
        assert_eq!(Weekday::Tuesday.circular_distance(Weekday::Saturday), 3);
    }

    #[test]
    fn recommendation_thresholds() {
        assert_eq!(Recommendation::from_score(100), Recommendation::HighlyCompatible);
        assert_eq!(Recommendation::from_score(75), Recommendation::HighlyCompatible);
        assert_eq!(Recommendation::from_score(74), Recommendation::WorkableWithEffort);
        assert_eq!(Recommendation::from_score(55), Recommendation::WorkableWithEffort);
        assert_eq!(Recommendation::from_score(54), Recommendation::Challenging);
    }

    #[test]
    fn convention_parses_aliases() {
        assert_eq!("Maghribi".parse::<Convention>(), Ok(Convention::Maghribi));
        assert_eq!(" eastern ".parse::<Convention>(), Ok(Convention::Mashriqi));
        assert!("coptic".parse::<Convention>().is_err());
    }
}
