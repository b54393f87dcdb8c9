use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{PhoneticTable, Place, PropertyRecord};

pub const DEFAULT_PHONETICS_TOML: &str = include_str!("default_phonetics.toml");

#[derive(Deserialize)]
struct PhoneticFile {
    rows: Vec<Row>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Row {
    char: String,
    roman: String,
    vowel: bool,
    consonant: bool,
    independent: bool,
    aspirated: bool,
    voiced: bool,
    nasal: bool,
    velar: bool,
    palatal: bool,
    retroflex: bool,
    dental: bool,
    labial: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum PropertyTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("row {row}: char must be exactly one character, got {value:?}")]
    InvalidChar { row: usize, value: String },
    #[error("duplicate row for {0:?}")]
    Duplicate(char),
}

impl Row {
    /// First place flag set, checked velar to labial.
    fn place(&self) -> Place {
        [
            (self.velar, Place::Velar),
            (self.palatal, Place::Palatal),
            (self.retroflex, Place::Retroflex),
            (self.dental, Place::Dental),
            (self.labial, Place::Labial),
        ]
        .into_iter()
        .find_map(|(on, place)| on.then_some(place))
        .unwrap_or(Place::None)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut it = s.chars();
    let c = it.next()?;
    it.next().is_none().then_some(c)
}

impl PhoneticTable {
    /// Parse a phonetic table from TOML text.
    ///
    /// Every column is required; a missing column, a `char` that is not a
    /// single scalar value, or a repeated character rejects the whole table.
    pub fn from_toml(toml_str: &str) -> Result<Self, PropertyTableError> {
        let file: PhoneticFile =
            toml::from_str(toml_str).map_err(|e| PropertyTableError::Parse(e.to_string()))?;

        let mut records = HashMap::with_capacity(file.rows.len());
        for (i, row) in file.rows.into_iter().enumerate() {
            let Some(ch) = single_char(&row.char) else {
                return Err(PropertyTableError::InvalidChar {
                    row: i,
                    value: row.char,
                });
            };
            let place = row.place();
            let record = PropertyRecord {
                ch,
                roman: row.roman,
                is_vowel: row.vowel,
                is_consonant: row.consonant,
                is_independent_vowel: row.independent,
                aspirated: row.aspirated,
                voiced: row.voiced,
                nasal: row.nasal,
                place,
            };
            if records.insert(ch, record).is_some() {
                return Err(PropertyTableError::Duplicate(ch));
            }
        }

        Ok(PhoneticTable::from_records(records))
    }

    /// Load a table from a file.
    ///
    /// An unreadable file yields an empty table (and a warning); malformed
    /// content is an error.
    pub fn load(path: &Path) -> Result<Self, PropertyTableError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "phonetic table unreadable, using empty table");
                return Ok(PhoneticTable::empty());
            }
        };
        let table = Self::from_toml(&content)?;
        debug!(path = %path.display(), rows = table.len(), "phonetic table loaded");
        Ok(table)
    }
}
