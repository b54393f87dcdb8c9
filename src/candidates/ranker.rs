use std::cmp::Ordering;

use tracing::trace;

use crate::backtranslit::back_transliterate;
use crate::distance::similarity;
use crate::phonetic::PhoneticTable;
use crate::settings::Settings;

use super::Candidate;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub text: String,
    /// Clamped to [0, 1] and rounded to two decimals.
    pub score: f64,
    pub rule: &'static str,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Sum of the weights of every ranker rule that fires for this pair.
pub fn rule_adjustment(settings: &Settings, query: &str, candidate: &str) -> f64 {
    settings
        .ranker
        .rules
        .iter()
        .filter(|rule| rule.applies(query, candidate))
        .map(|rule| rule.weight)
        .sum()
}

/// Score one native candidate against a Roman query.
///
/// The candidate is back-transliterated and compared with the query by
/// phonetic similarity; rule adjustments are keyed on the query.
pub fn score(table: &PhoneticTable, settings: &Settings, query: &str, candidate: &str) -> f64 {
    let roman = back_transliterate(table, candidate);
    let base = similarity(query, &roman, &settings.distance);
    let adjustment = rule_adjustment(settings, query, candidate);
    trace!(candidate, %roman, base, adjustment, "scored candidate");
    round2((base + adjustment).clamp(0.0, 1.0))
}

fn by_score_then_text(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.text.cmp(&b.text))
}

/// Score, sort (score descending, text ascending) and keep the best `top_k`.
pub fn rank(
    table: &PhoneticTable,
    settings: &Settings,
    query: &str,
    candidates: Vec<Candidate>,
    top_k: usize,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|c| ScoredCandidate {
            score: score(table, settings, query, &c.text),
            text: c.text,
            rule: c.rule,
        })
        .collect();
    scored.sort_by(by_score_then_text);
    scored.truncate(top_k);
    scored
}
