//! Roman → Devanagari transliteration.
//!
//! A data-driven token table ([`RomanTable`], embedded as `default_roman.toml`)
//! drives a single greedy left-to-right scan, followed by a nasal
//! place-assimilation pass. Output is deterministic and unknown characters
//! pass through unchanged.

mod automaton;
mod config;
mod postprocess;
mod table;

use std::sync::Arc;

pub use config::{parse_roman_toml, RomanConfig, RomanTableError};
pub use table::{NasalRule, RomanTable, RomanToken, TokenOutput, DEFAULT_ROMAN_TOML};

#[derive(Debug, Clone)]
pub struct Transliterator {
    table: Arc<RomanTable>,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(RomanTable::embedded())
    }
}

impl Transliterator {
    pub fn new(table: Arc<RomanTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RomanTable {
        &self.table
    }

    pub fn transliterate(&self, roman: &str) -> String {
        let scanned = automaton::scan(&self.table, roman);
        postprocess::assimilate_nasals(&scanned)
    }
}
