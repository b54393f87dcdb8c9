use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::config::{parse_roman_toml, RomanConfig, RomanTableError, VowelForms};

pub const DEFAULT_ROMAN_TOML: &str = include_str!("default_roman.toml");

/// What a recognized Roman fragment produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutput {
    /// Independent letter at word start or after a vowel; dependent sign
    /// after a consonant.
    Vowel {
        independent: String,
        dependent: String,
    },
    Consonant(String),
}

/// A Roman fragment recognized at a cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanToken {
    pub roman: String,
    pub output: TokenOutput,
}

impl RomanToken {
    /// Cursor advance in characters.
    pub fn advance(&self) -> usize {
        self.roman.len()
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self.output, TokenOutput::Vowel { .. })
    }

    /// Whether this token's roman spelling starts at `pos` in `chars`.
    pub(crate) fn matches_at(&self, chars: &[char], pos: usize) -> bool {
        self.roman
            .chars()
            .enumerate()
            .all(|(k, c)| chars.get(pos + k) == Some(&c))
    }
}

/// Nasal-before-stop rule: `trigger` after a vowel and before one of
/// `before` becomes `mark`.
#[derive(Debug, Clone)]
pub struct NasalRule {
    pub trigger: char,
    pub mark: String,
    pub before: Vec<char>,
}

/// Compiled Roman token table.
///
/// Each matcher group is an explicit list tried in order; within a group the
/// longest spelling comes first.
#[derive(Debug, Clone)]
pub struct RomanTable {
    specials: Vec<RomanToken>,
    vowels: Vec<RomanToken>,
    digraphs: Vec<RomanToken>,
    consonants: Vec<RomanToken>,
    /// Single vowel → its lengthened token, for word-final position.
    lengthening: HashMap<String, RomanToken>,
    nasal: NasalRule,
}

fn vowel_token(roman: &str, forms: &VowelForms) -> RomanToken {
    RomanToken {
        roman: roman.to_string(),
        output: TokenOutput::Vowel {
            independent: forms.independent.clone(),
            dependent: forms.dependent.clone(),
        },
    }
}

fn consonant_token(roman: &str, native: &str) -> RomanToken {
    RomanToken {
        roman: roman.to_string(),
        output: TokenOutput::Consonant(native.to_string()),
    }
}

/// Longest first; equal lengths keep alphabetical order so the scan is stable.
fn longest_first(mut tokens: Vec<RomanToken>) -> Vec<RomanToken> {
    tokens.sort_by(|a, b| b.roman.len().cmp(&a.roman.len()).then(a.roman.cmp(&b.roman)));
    tokens
}

impl RomanTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, RomanTableError> {
        parse_roman_toml(toml_str).map(Self::from_config)
    }

    /// The embedded default table, parsed once and shared.
    pub fn embedded() -> Arc<RomanTable> {
        static INSTANCE: OnceLock<Arc<RomanTable>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                Arc::new(
                    RomanTable::from_toml(DEFAULT_ROMAN_TOML)
                        .expect("embedded roman table must be valid"),
                )
            })
            .clone()
    }

    /// Build from an already validated config.
    fn from_config(config: RomanConfig) -> Self {
        let specials = config
            .special_vowels
            .iter()
            .map(|(k, v)| vowel_token(k, v))
            .chain(
                config
                    .special_consonants
                    .iter()
                    .map(|(k, v)| consonant_token(k, v)),
            )
            .collect();
        let vowels = config
            .vowels
            .iter()
            .map(|(k, v)| vowel_token(k, v))
            .collect();
        let digraphs = config
            .digraphs
            .iter()
            .map(|(k, v)| consonant_token(k, v))
            .collect();
        let consonants = config
            .consonants
            .iter()
            .map(|(k, v)| consonant_token(k, v))
            .collect();
        let lengthening = config
            .final_lengthening
            .iter()
            .filter_map(|(short, long)| {
                let forms = config.vowels.get(long)?;
                Some((short.clone(), vowel_token(long, forms)))
            })
            .collect();
        let nasal = NasalRule {
            trigger: config.nasal.trigger.chars().next().unwrap_or('n'),
            mark: config.nasal.mark.clone(),
            before: config.nasal.before.chars().collect(),
        };

        Self {
            specials: longest_first(specials),
            vowels: longest_first(vowels),
            digraphs: longest_first(digraphs),
            consonants: longest_first(consonants),
            lengthening,
            nasal,
        }
    }

    fn find<'a>(group: &'a [RomanToken], chars: &[char], pos: usize) -> Option<&'a RomanToken> {
        group.iter().find(|t| t.matches_at(chars, pos))
    }

    pub fn match_special(&self, chars: &[char], pos: usize) -> Option<&RomanToken> {
        Self::find(&self.specials, chars, pos)
    }

    pub fn match_vowel(&self, chars: &[char], pos: usize) -> Option<&RomanToken> {
        Self::find(&self.vowels, chars, pos)
    }

    pub fn match_digraph(&self, chars: &[char], pos: usize) -> Option<&RomanToken> {
        Self::find(&self.digraphs, chars, pos)
    }

    pub fn match_consonant(&self, chars: &[char], pos: usize) -> Option<&RomanToken> {
        Self::find(&self.consonants, chars, pos)
    }

    /// Lengthened replacement for a word-final single vowel, if any.
    pub fn lengthened(&self, token: &RomanToken) -> Option<&RomanToken> {
        self.lengthening.get(&token.roman)
    }

    pub fn nasal(&self) -> &NasalRule {
        &self.nasal
    }
}
