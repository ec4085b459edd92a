//! Per-person inputs and the single-name analysis record.

use serde::{Deserialize, Serialize};

use crate::classification::{BurujClassification, ElementClassification};
use crate::enums::{Convention, Element};
use crate::transliteration::Transliteration;

/// A person's name, optionally with their mother's name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
}

impl NameInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mother_name: None,
        }
    }

    pub fn with_mother(mut self, mother_name: impl Into<String>) -> Self {
        self.mother_name = Some(mother_name.into());
        self
    }

    /// The mother's name, if present and not blank.
    pub fn mother(&self) -> Option<&str> {
        self.mother_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// One letter of a normalized name and its contribution to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
    /// Elemental nature of the letter, if it is one of the 28 base letters.
    pub element: Option<Element>,
}

/// Count of letters per element in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementBalance {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementBalance {
    pub fn add(&mut self, element: Element) {
        match element {
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Air => self.air += 1,
            Element::Water => self.water += 1,
        }
    }

    pub fn count(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    /// The element with the most letters. Ties go to the earlier element in
    /// cycle order; an empty balance has no dominant element.
    pub fn dominant(&self) -> Option<Element> {
        let mut best: Option<(Element, u32)> = None;
        for element in Element::ALL {
            let count = self.count(element);
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((element, count));
            }
        }
        best.map(|(element, _)| element)
    }
}

/// Full analysis of a single name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameProfile {
    /// The name as supplied by the caller.
    pub input: String,
    /// Present when the name had to be transliterated from Latin script.
    pub transliteration: Option<Transliteration>,
    pub normalized: String,
    pub convention: Convention,
    pub total: u64,
    pub mother_total: Option<u64>,
    pub digital_root: u32,
    pub element: ElementClassification,
    /// Burj from the name total, or name plus mother total when given.
    pub burj: BurujClassification,
    pub letters: Vec<LetterValue>,
    pub balance: ElementBalance,
    pub dominant_element: Option<Element>,
}
