//! Phonetic property table for Devanagari characters.
//!
//! Maps a single native character to its articulatory attributes
//! (vowel/consonant, aspiration, voicing, nasality, place of articulation)
//! and its canonical Roman rendering. The table is immutable once built and
//! is shared between components as `Arc<PhoneticTable>`.
//!
//! Characters missing from the table have no record; every query on them
//! answers "unknown" (`None` / `false` / [`Place::None`]) instead of guessing.

mod table;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

pub use table::{PropertyTableError, DEFAULT_PHONETICS_TOML};

/// Place of articulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Velar,
    Palatal,
    Retroflex,
    Dental,
    Labial,
    None,
}

impl Place {
    /// The nasal stop articulated at this place (ङ ञ ण न म).
    pub fn nasal(self) -> Option<char> {
        match self {
            Place::Velar => Some('\u{0919}'),
            Place::Palatal => Some('\u{091E}'),
            Place::Retroflex => Some('\u{0923}'),
            Place::Dental => Some('\u{0928}'),
            Place::Labial => Some('\u{092E}'),
            Place::None => None,
        }
    }
}

/// Phonetic attributes of one native character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    pub ch: char,
    /// Canonical Roman rendering. Empty for marks with no sound of their own
    /// (virama, nukta).
    pub roman: String,
    pub is_vowel: bool,
    pub is_consonant: bool,
    pub is_independent_vowel: bool,
    pub aspirated: bool,
    pub voiced: bool,
    pub nasal: bool,
    pub place: Place,
}

impl PropertyRecord {
    /// Vowel sign (matra) as opposed to a standalone vowel letter.
    pub fn is_dependent_vowel(&self) -> bool {
        self.is_vowel && !self.is_independent_vowel
    }
}

/// Character-count summary of a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneticProfile {
    pub vowels: usize,
    pub consonants: usize,
    pub aspirated: usize,
    pub nasals: usize,
    pub total_chars: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PhoneticTable {
    records: HashMap<char, PropertyRecord>,
}

impl PhoneticTable {
    /// A table with no records. Every lookup answers "unknown".
    pub fn empty() -> Self {
        Self::default()
    }

    /// The embedded default table, parsed once and shared.
    pub fn embedded() -> Arc<PhoneticTable> {
        static INSTANCE: OnceLock<Arc<PhoneticTable>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                let table = PhoneticTable::from_toml(DEFAULT_PHONETICS_TOML)
                    .expect("embedded phonetic table must be valid");
                Arc::new(table)
            })
            .clone()
    }

    pub(crate) fn from_records(records: HashMap<char, PropertyRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, c: char) -> Option<&PropertyRecord> {
        self.records.get(&c)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn canonical_roman(&self, c: char) -> Option<&str> {
        self.get(c).map(|r| r.roman.as_str())
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.get(c).is_some_and(|r| r.is_vowel)
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.get(c).is_some_and(|r| r.is_consonant)
    }

    pub fn is_dependent_vowel(&self, c: char) -> bool {
        self.get(c).is_some_and(|r| r.is_dependent_vowel())
    }

    pub fn is_aspirated(&self, c: char) -> bool {
        self.get(c).is_some_and(|r| r.aspirated)
    }

    pub fn is_voiced(&self, c: char) -> bool {
        self.get(c).is_some_and(|r| r.voiced)
    }

    pub fn is_nasal(&self, c: char) -> bool {
        self.get(c).is_some_and(|r| r.nasal)
    }

    /// Place of articulation; [`Place::None`] for unknown characters too.
    pub fn place(&self, c: char) -> Place {
        self.get(c).map_or(Place::None, |r| r.place)
    }

    /// Homorganic nasal for a stop consonant: क→ङ, ट→ण, द→न, ब→म, ...
    ///
    /// Only the four non-nasal stops of each series qualify; semivowels,
    /// sibilants and unknown characters return `None`.
    pub fn homorganic_nasal(&self, c: char) -> Option<char> {
        let record = self.get(c)?;
        if !record.is_consonant || record.nasal {
            return None;
        }
        let nasal = record.place.nasal()?;
        // Each stop series is laid out contiguously, ending in its nasal.
        let gap = (nasal as u32).checked_sub(c as u32)?;
        (1..=4).contains(&gap).then_some(nasal)
    }

    /// Count vowels, consonants, aspirates and nasals in a word, character by character.
    pub fn profile(&self, word: &str) -> PhoneticProfile {
        let mut p = PhoneticProfile::default();
        for c in word.chars() {
            p.total_chars += 1;
            let Some(r) = self.get(c) else {
                continue;
            };
            if r.is_vowel {
                p.vowels += 1;
            } else if r.is_consonant {
                p.consonants += 1;
                if r.aspirated {
                    p.aspirated += 1;
                }
                if r.nasal {
                    p.nasals += 1;
                }
            }
        }
        p
    }
}
