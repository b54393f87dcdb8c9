//! Candidate generation and ranking for a Roman (or native) query.
//!
//! [`variants::generate`] transliterates the query once and enumerates fixed
//! phonetic alternations; [`ranker::rank`] back-transliterates each candidate,
//! scores it against the query and applies the configured rule weights.

use tracing::debug;

use crate::backtranslit::back_transliterate;
use crate::normalize::{has_native, normalize_query};
use crate::phonetic::PhoneticTable;
use crate::settings::Settings;
use crate::translit::Transliterator;

pub mod ranker;
pub mod variants;

#[cfg(test)]
mod tests;

pub use ranker::{rank, rule_adjustment, score, ScoredCandidate};
pub use variants::{resolve_anusvara, Candidate};

/// Ranked native spellings for `query`, best first, at most `top_k` of them.
///
/// The query is normalized first; an empty query yields no candidates. A query
/// already in native script is compared through its own back-transliteration.
pub fn suggest(
    translit: &Transliterator,
    table: &PhoneticTable,
    settings: &Settings,
    query: &str,
    top_k: usize,
) -> Vec<ScoredCandidate> {
    let query = normalize_query(query);
    if query.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let roman = if has_native(&query) {
        back_transliterate(table, &query)
    } else {
        query.clone()
    };

    let candidates = variants::generate(translit, table, &query, settings.candidates.max_variants);
    debug!(candidate_count = candidates.len(), "variants generated");

    rank(table, settings, &roman, candidates, top_k)
}
