//! Letter value tables for the two regional conventions.
//!
//! The tables only hold the 28 canonical letters. Hamza forms, alif maqṣūra
//! and tāʾ marbūṭa are valued through the letter they stand for, so that a
//! text normalized with non-default options still totals correctly.

use abjad_model::{Convention, Element, Modulus};
use abjad_normalization::charset::{
    ALIF_MAQSURA, CANONICAL_LETTERS, TA_MARBUTA, YA, hamza_carrier,
};

use crate::reduce::mod_index;

/// Values shared by both conventions, in abjad order.
const SHARED_VALUES: [(char, u32); 25] = [
    ('ا', 1),
    ('ب', 2),
    ('ج', 3),
    ('د', 4),
    ('ه', 5),
    ('و', 6),
    ('ز', 7),
    ('ح', 8),
    ('ط', 9),
    ('ي', 10),
    ('ك', 20),
    ('ل', 30),
    ('م', 40),
    ('ن', 50),
    ('س', 60),
    ('ع', 70),
    ('ف', 80),
    ('ص', 90),
    ('ق', 100),
    ('ر', 200),
    ('ش', 300),
    ('ت', 400),
    ('ث', 500),
    ('خ', 600),
    ('ذ', 700),
];

const MAGHRIBI_VALUES: [(char, u32); 3] = [('ض', 90), ('ظ', 800), ('غ', 900)];
const MASHRIQI_VALUES: [(char, u32); 3] = [('ض', 800), ('ظ', 900), ('غ', 1000)];

/// The letter whose value a retained variant takes.
const TA: char = 'ت';

/// Elemental nature of the letters, cycling through abjad order.
const LETTER_CYCLE: [Element; 4] = [Element::Fire, Element::Air, Element::Water, Element::Earth];

/// Mapping from Arabic letter to its numeric value under one convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterValueTable {
    convention: Convention,
    distinct: &'static [(char, u32); 3],
}

pub static MAGHRIBI: LetterValueTable = LetterValueTable {
    convention: Convention::Maghribi,
    distinct: &MAGHRIBI_VALUES,
};

pub static MASHRIQI: LetterValueTable = LetterValueTable {
    convention: Convention::Mashriqi,
    distinct: &MASHRIQI_VALUES,
};

impl LetterValueTable {
    pub fn for_convention(convention: Convention) -> &'static LetterValueTable {
        match convention {
            Convention::Maghribi => &MAGHRIBI,
            Convention::Mashriqi => &MASHRIQI,
        }
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Value of `ch`, or `None` for anything that is not an Arabic letter.
    pub fn value(&self, ch: char) -> Option<u32> {
        let base = base_letter(ch);
        self.distinct
            .iter()
            .chain(SHARED_VALUES.iter())
            .find(|(letter, _)| *letter == base)
            .map(|(_, value)| *value)
    }

    /// The 28 canonical letters and their values, in abjad order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        let letters: &'static [char; 28] = &CANONICAL_LETTERS;
        letters
            .iter()
            .filter_map(|&letter| self.value(letter).map(|value| (letter, value)))
    }
}

/// Resolve a letter variant to the canonical letter it is valued as.
fn base_letter(ch: char) -> char {
    match ch {
        ALIF_MAQSURA => YA,
        TA_MARBUTA => TA,
        other => hamza_carrier(other).unwrap_or(other),
    }
}

/// Traditional elemental nature of a letter.
///
/// Walking the alphabet in abjad order, the letters cycle Fire, Air, Water,
/// Earth (ا fire, ب air, ج water, د earth, ه fire, ...).
pub fn letter_element(ch: char) -> Option<Element> {
    let base = base_letter(ch);
    let position = CANONICAL_LETTERS.iter().position(|&letter| letter == base)?;
    let index = mod_index(position as u64 + 1, Modulus::Elements);
    LETTER_CYCLE.get(index as usize - 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_tables_cover_all_canonical_letters() {
        for convention in Convention::ALL {
            let table = LetterValueTable::for_convention(convention);
            assert_eq!(table.iter().count(), 28, "{convention}");
            assert_eq!(table.convention(), convention);
        }
    }

    #[test]
    fn conventions_differ_in_three_letters() {
        assert_eq!(MAGHRIBI.value('ض'), Some(90));
        assert_eq!(MASHRIQI.value('ض'), Some(800));
        assert_eq!(MAGHRIBI.value('ظ'), Some(800));
        assert_eq!(MASHRIQI.value('ظ'), Some(900));
        assert_eq!(MAGHRIBI.value('غ'), Some(900));
        assert_eq!(MASHRIQI.value('غ'), Some(1000));

        let differing: Vec<char> = MAGHRIBI
            .iter()
            .zip(MASHRIQI.iter())
            .filter(|(a, b)| a.1 != b.1)
            .map(|(a, _)| a.0)
            .collect();
        assert_eq!(differing, vec!['ض', 'ظ', 'غ']);
    }

    #[test]
    fn variants_take_their_carrier_value() {
        for form in ['أ', 'إ', 'آ', 'ٱ', 'ء'] {
            assert_eq!(MAGHRIBI.value(form), Some(1), "{form}");
        }
        assert_eq!(MAGHRIBI.value('ؤ'), Some(6));
        assert_eq!(MAGHRIBI.value('ئ'), Some(10));
        assert_eq!(MAGHRIBI.value('ى'), Some(10));
        assert_eq!(MAGHRIBI.value('ة'), Some(400));
    }

    #[test]
    fn non_letters_have_no_value() {
        assert_eq!(MAGHRIBI.value(' '), None);
        assert_eq!(MAGHRIBI.value('a'), None);
        assert_eq!(MAGHRIBI.value('\u{064E}'), None);
    }

    #[test]
    fn classical_fire_letters() {
        let fire: String = CANONICAL_LETTERS
            .iter()
            .filter(|&&c| letter_element(c) == Some(Element::Fire))
            .collect();
        assert_eq!(fire, "اهطمفشذ");
        assert_eq!(letter_element('غ'), Some(Element::Earth));
        assert_eq!(letter_element('أ'), Some(Element::Fire));
        assert_eq!(letter_element('x'), None);
    }
}
