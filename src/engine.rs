use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::backtranslit::{back_transliterate, back_transliterate_with, RomanScheme};
use crate::candidates::{self, Candidate, ScoredCandidate};
use crate::distance::similarity;
use crate::grapheme::{self, ClusterPart};
use crate::phonetic::PhoneticTable;
use crate::script::{self, ScriptSegment, ScriptTag, TextComposition};
use crate::settings::Settings;
use crate::translit::Transliterator;

/// Entry point for the matching operations.
///
/// Holds the read-only property table, the Roman token table and the
/// settings. Every call works on its own locals, so one engine can be shared
/// across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    table: Arc<PhoneticTable>,
    translit: Transliterator,
    settings: Settings,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the embedded tables and default settings.
    pub fn new() -> Self {
        Self::with_parts(
            PhoneticTable::embedded(),
            Transliterator::default(),
            Settings::default(),
        )
    }

    pub fn with_parts(
        table: Arc<PhoneticTable>,
        translit: Transliterator,
        settings: Settings,
    ) -> Self {
        Self {
            table,
            translit,
            settings,
        }
    }

    pub fn table(&self) -> &PhoneticTable {
        &self.table
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        grapheme::segment(text)
    }

    pub fn segment_decomposed<'a>(&self, text: &'a str) -> Vec<ClusterPart<'a>> {
        grapheme::segment_decomposed(text)
    }

    pub fn classify(&self, c: char) -> ScriptTag {
        script::classify(c)
    }

    pub fn detect_switches<'a>(&self, text: &'a str) -> Vec<ScriptSegment<'a>> {
        script::detect_switches(text)
    }

    pub fn composition(&self, text: &str) -> TextComposition {
        script::composition(text)
    }

    pub fn transliterate(&self, roman: &str) -> String {
        self.translit.transliterate(roman)
    }

    pub fn back_transliterate(&self, native: &str) -> String {
        back_transliterate(&self.table, native)
    }

    pub fn back_transliterate_with(&self, native: &str, scheme: RomanScheme) -> String {
        back_transliterate_with(&self.table, native, scheme)
    }

    /// Phonetic similarity of two Roman strings under the configured costs.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        similarity(a, b, &self.settings.distance)
    }

    /// Unscored candidate spellings for `query`, base spelling first.
    pub fn variants(&self, query: &str) -> Vec<Candidate> {
        candidates::variants::generate(
            &self.translit,
            &self.table,
            query,
            self.settings.candidates.max_variants,
        )
    }

    /// Ranked native spellings for `query`; empty for an empty query.
    pub fn suggest(&self, query: &str, top_k: usize) -> Vec<ScoredCandidate> {
        let _span = debug_span!("suggest", query, top_k).entered();
        let results = candidates::suggest(&self.translit, &self.table, &self.settings, query, top_k);
        debug!(
            returned = results.len(),
            best = ?results.first().map(|r| r.text.as_str()),
            "suggest done"
        );
        results
    }

    /// [`Engine::suggest`] with `candidates.default_top_k`.
    pub fn suggest_default(&self, query: &str) -> Vec<ScoredCandidate> {
        self.suggest(query, self.settings.candidates.default_top_k)
    }
}
