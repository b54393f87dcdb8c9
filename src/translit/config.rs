use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct VowelForms {
    pub independent: String,
    pub dependent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NasalConfig {
    pub trigger: String,
    pub mark: String,
    pub before: String,
}

/// Raw sections of a Roman token table, as written in TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RomanConfig {
    #[serde(default)]
    pub special_vowels: BTreeMap<String, VowelForms>,
    #[serde(default)]
    pub special_consonants: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, VowelForms>,
    pub digraphs: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    #[serde(default)]
    pub final_lengthening: BTreeMap<String, String>,
    pub nasal: NasalConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum RomanTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("[{section}] key must be lowercase ASCII: {key}")]
    NonAsciiKey { section: &'static str, key: String },
    #[error("[{section}] key {key:?} must be {expected} characters long")]
    KeyLength {
        section: &'static str,
        key: String,
        expected: usize,
    },
    #[error("[{section}] empty value for key: {key}")]
    EmptyValue { section: &'static str, key: String },
    #[error("[final_lengthening] {key} lengthens to unknown vowel {target:?}")]
    UnknownVowel { key: String, target: String },
    #[error("[nasal] {0}")]
    Nasal(&'static str),
}

fn check_keys<'a, V: 'a>(
    section: &'static str,
    entries: impl IntoIterator<Item = (&'a String, &'a V)>,
    expected_len: Option<usize>,
    is_empty: impl Fn(&str, &V) -> bool,
) -> Result<(), RomanTableError> {
    for (key, value) in entries {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(RomanTableError::NonAsciiKey {
                section,
                key: key.clone(),
            });
        }
        if let Some(expected) = expected_len {
            if key.len() != expected {
                return Err(RomanTableError::KeyLength {
                    section,
                    key: key.clone(),
                    expected,
                });
            }
        }
        if is_empty(key.as_str(), value) {
            return Err(RomanTableError::EmptyValue {
                section,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

/// Parse and validate a Roman token table.
pub fn parse_roman_toml(toml_str: &str) -> Result<RomanConfig, RomanTableError> {
    let config: RomanConfig =
        toml::from_str(toml_str).map_err(|e| RomanTableError::Parse(e.to_string()))?;

    if config.vowels.is_empty() {
        return Err(RomanTableError::Empty("vowels"));
    }
    if config.digraphs.is_empty() {
        return Err(RomanTableError::Empty("digraphs"));
    }
    if config.consonants.is_empty() {
        return Err(RomanTableError::Empty("consonants"));
    }

    let string_empty = |_: &str, v: &String| v.is_empty();
    // Only the inherent vowel may have an empty dependent form.
    let vowel_empty = |k: &str, v: &VowelForms| {
        v.independent.is_empty() || (v.dependent.is_empty() && k != "a")
    };

    check_keys("special_vowels", &config.special_vowels, Some(3), vowel_empty)?;
    check_keys("special_consonants", &config.special_consonants, Some(3), string_empty)?;
    check_keys("vowels", &config.vowels, None, vowel_empty)?;
    check_keys("digraphs", &config.digraphs, Some(2), string_empty)?;
    check_keys("consonants", &config.consonants, Some(1), string_empty)?;
    check_keys("final_lengthening", &config.final_lengthening, Some(1), string_empty)?;

    for (key, target) in &config.final_lengthening {
        if !config.vowels.contains_key(key) || !config.vowels.contains_key(target) {
            return Err(RomanTableError::UnknownVowel {
                key: key.clone(),
                target: target.clone(),
            });
        }
    }

    let nasal = &config.nasal;
    if nasal.trigger.len() != 1 || !nasal.trigger.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(RomanTableError::Nasal("trigger must be one lowercase ASCII letter"));
    }
    if nasal.mark.is_empty() {
        return Err(RomanTableError::Nasal("mark must not be empty"));
    }
    if nasal.before.is_empty() || !nasal.before.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(RomanTableError::Nasal("before must be lowercase ASCII letters"));
    }

    Ok(config)
}
