//! Static classification tables and their lookups.
//!
//! Every table is keyed by a 1-based index as produced by
//! [`crate::reduce::mod_index`]. An index outside the table is a caller bug
//! and is reported as [`AbjadError::InvalidIndex`], never clamped.

use abjad_model::{
    AbjadError, BurujClassification, DestinyTier, Element, ElementClassification, Modulus, Planet,
    PlanetClassification, Result, VerseRef, Weekday,
};

pub static ELEMENTS: [ElementClassification; 4] = [
    ElementClassification {
        element: Element::Fire,
        name: "Fire",
        arabic_name: "نار",
        symbol: "🜂",
        qualities: "Hot and dry: bold, passionate, quick to begin",
    },
    ElementClassification {
        element: Element::Earth,
        name: "Earth",
        arabic_name: "تراب",
        symbol: "🜃",
        qualities: "Cold and dry: patient, grounded, dependable",
    },
    ElementClassification {
        element: Element::Air,
        name: "Air",
        arabic_name: "هواء",
        symbol: "🜁",
        qualities: "Hot and moist: curious, sociable, adaptable",
    },
    ElementClassification {
        element: Element::Water,
        name: "Water",
        arabic_name: "ماء",
        symbol: "🜄",
        qualities: "Cold and moist: intuitive, empathetic, reflective",
    },
];

const fn verse(surah: u16, surah_name: &'static str, ayah_start: u16, ayah_end: u16) -> VerseRef {
    VerseRef {
        surah,
        surah_name,
        ayah_start,
        ayah_end,
    }
}

pub static BURUJ: [BurujClassification; 12] = [
    BurujClassification {
        index: 1,
        name: "Ḥamal",
        arabic_name: "الحمل",
        zodiac: "Aries",
        element: Element::Fire,
        ruling_planet: Planet::Mars,
        blessed_day: Weekday::Tuesday,
        verse: verse(20, "Ta-Ha", 25, 25),
    },
    BurujClassification {
        index: 2,
        name: "Thawr",
        arabic_name: "الثور",
        zodiac: "Taurus",
        element: Element::Earth,
        ruling_planet: Planet::Venus,
        blessed_day: Weekday::Friday,
        verse: verse(14, "Ibrahim", 7, 7),
    },
    BurujClassification {
        index: 3,
        name: "Jawzāʾ",
        arabic_name: "الجوزاء",
        zodiac: "Gemini",
        element: Element::Air,
        ruling_planet: Planet::Mercury,
        blessed_day: Weekday::Wednesday,
        verse: verse(20, "Ta-Ha", 114, 114),
    },
    BurujClassification {
        index: 4,
        name: "Saraṭān",
        arabic_name: "السرطان",
        zodiac: "Cancer",
        element: Element::Water,
        ruling_planet: Planet::Moon,
        blessed_day: Weekday::Monday,
        verse: verse(13, "Ar-Ra'd", 28, 28),
    },
    BurujClassification {
        index: 5,
        name: "Asad",
        arabic_name: "الأسد",
        zodiac: "Leo",
        element: Element::Fire,
        ruling_planet: Planet::Sun,
        blessed_day: Weekday::Sunday,
        verse: verse(24, "An-Nur", 35, 35),
    },
    BurujClassification {
        index: 6,
        name: "Sunbula",
        arabic_name: "السنبلة",
        zodiac: "Virgo",
        element: Element::Earth,
        ruling_planet: Planet::Mercury,
        blessed_day: Weekday::Wednesday,
        verse: verse(2, "Al-Baqarah", 286, 286),
    },
    BurujClassification {
        index: 7,
        name: "Mīzān",
        arabic_name: "الميزان",
        zodiac: "Libra",
        element: Element::Air,
        ruling_planet: Planet::Venus,
        blessed_day: Weekday::Friday,
        verse: verse(55, "Ar-Rahman", 9, 9),
    },
    BurujClassification {
        index: 8,
        name: "ʿAqrab",
        arabic_name: "العقرب",
        zodiac: "Scorpio",
        element: Element::Water,
        ruling_planet: Planet::Mars,
        blessed_day: Weekday::Tuesday,
        verse: verse(94, "Ash-Sharh", 5, 6),
    },
    BurujClassification {
        index: 9,
        name: "Qaws",
        arabic_name: "القوس",
        zodiac: "Sagittarius",
        element: Element::Fire,
        ruling_planet: Planet::Jupiter,
        blessed_day: Weekday::Thursday,
        verse: verse(2, "Al-Baqarah", 201, 201),
    },
    BurujClassification {
        index: 10,
        name: "Jady",
        arabic_name: "الجدي",
        zodiac: "Capricorn",
        element: Element::Earth,
        ruling_planet: Planet::Saturn,
        blessed_day: Weekday::Saturday,
        verse: verse(65, "At-Talaq", 3, 3),
    },
    BurujClassification {
        index: 11,
        name: "Dalw",
        arabic_name: "الدلو",
        zodiac: "Aquarius",
        element: Element::Air,
        ruling_planet: Planet::Saturn,
        blessed_day: Weekday::Saturday,
        verse: verse(21, "Al-Anbiya", 30, 30),
    },
    BurujClassification {
        index: 12,
        name: "Ḥūt",
        arabic_name: "الحوت",
        zodiac: "Pisces",
        element: Element::Water,
        ruling_planet: Planet::Jupiter,
        blessed_day: Weekday::Thursday,
        verse: verse(21, "Al-Anbiya", 87, 87),
    },
];

pub static PLANETS: [PlanetClassification; 7] = [
    PlanetClassification {
        planet: Planet::Sun,
        arabic_name: "الشمس",
        day: Weekday::Sunday,
        flavor: "Radiant partnership where each encourages the other to shine",
        score: 80,
    },
    PlanetClassification {
        planet: Planet::Moon,
        arabic_name: "القمر",
        day: Weekday::Monday,
        flavor: "Emotional closeness and mutual care",
        score: 85,
    },
    PlanetClassification {
        planet: Planet::Mars,
        arabic_name: "المريخ",
        day: Weekday::Tuesday,
        flavor: "Energetic bond that needs patience to avoid friction",
        score: 55,
    },
    PlanetClassification {
        planet: Planet::Mercury,
        arabic_name: "عطارد",
        day: Weekday::Wednesday,
        flavor: "Lively exchange of ideas and shared learning",
        score: 70,
    },
    PlanetClassification {
        planet: Planet::Jupiter,
        arabic_name: "المشتري",
        day: Weekday::Thursday,
        flavor: "Expansive, generous union blessed with growth",
        score: 90,
    },
    PlanetClassification {
        planet: Planet::Venus,
        arabic_name: "الزهرة",
        day: Weekday::Friday,
        flavor: "Affection, beauty and natural harmony",
        score: 95,
    },
    PlanetClassification {
        planet: Planet::Saturn,
        arabic_name: "زحل",
        day: Weekday::Saturday,
        flavor: "Serious, enduring commitment built slowly over time",
        score: 50,
    },
];

pub static DESTINY_TIERS: [DestinyTier; 9] = [
    DestinyTier {
        index: 1,
        label: "New beginnings",
        description: "A partnership that opens fresh paths for both",
        score: 75,
    },
    DestinyTier {
        index: 2,
        label: "Harmonious partnership",
        description: "Balance and cooperation come naturally",
        score: 90,
    },
    DestinyTier {
        index: 3,
        label: "Creative joy",
        description: "Shared expression, warmth and optimism",
        score: 85,
    },
    DestinyTier {
        index: 4,
        label: "Stable foundation",
        description: "Steady work builds something lasting",
        score: 70,
    },
    DestinyTier {
        index: 5,
        label: "Dynamic change",
        description: "Movement and adventure, with a need for anchoring",
        score: 60,
    },
    DestinyTier {
        index: 6,
        label: "Nurturing love",
        description: "Devotion, family and mutual care",
        score: 95,
    },
    DestinyTier {
        index: 7,
        label: "Spiritual depth",
        description: "A bond oriented toward reflection and faith",
        score: 80,
    },
    DestinyTier {
        index: 8,
        label: "Material strength",
        description: "Ambition and worldly achievement pursued together",
        score: 65,
    },
    DestinyTier {
        index: 9,
        label: "Completion & compassion",
        description: "Generosity and a sense of shared purpose",
        score: 88,
    },
];

fn lookup<T>(table: &'static [T], index: u32, base: Modulus) -> Result<&'static T> {
    index
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .ok_or(AbjadError::InvalidIndex {
            index,
            base: base.value(),
        })
}

/// Element record for a base-4 index (1 Fire, 2 Earth, 3 Air, 4 Water).
pub fn classify_element(index: u32) -> Result<&'static ElementClassification> {
    lookup(&ELEMENTS, index, Modulus::Elements)
}

/// Burj record for a base-12 index (1 Ḥamal .. 12 Ḥūt).
pub fn classify_buruj(index: u32) -> Result<&'static BurujClassification> {
    lookup(&BURUJ, index, Modulus::Buruj)
}

/// Planet record for a base-7 index, in Chaldean weekday order.
pub fn classify_planet(index: u32) -> Result<&'static PlanetClassification> {
    lookup(&PLANETS, index, Modulus::Planets)
}

pub fn destiny_tier(index: u32) -> Result<&'static DestinyTier> {
    lookup(&DESTINY_TIERS, index, Modulus::Destiny)
}
