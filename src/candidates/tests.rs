use proptest::prelude::*;

use crate::phonetic::PhoneticTable;
use crate::settings::{parse_settings_toml, Settings};
use crate::translit::Transliterator;

use super::variants::generate;
use super::{rank, resolve_anusvara, rule_adjustment, suggest, Candidate, ScoredCandidate};

fn variants_of(query: &str) -> Vec<Candidate> {
    generate(
        &Transliterator::default(),
        &PhoneticTable::embedded(),
        query,
        Settings::default().candidates.max_variants,
    )
}

fn texts(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.text.as_str()).collect()
}

fn suggest_default(query: &str, top_k: usize) -> Vec<ScoredCandidate> {
    suggest(
        &Transliterator::default(),
        &PhoneticTable::embedded(),
        &Settings::default(),
        query,
        top_k,
    )
}

fn position(results: &[ScoredCandidate], text: &str) -> usize {
    results
        .iter()
        .position(|r| r.text == text)
        .unwrap_or_else(|| panic!("{text} missing from {results:?}"))
}

// --- variants ---

#[test]
fn thand_variants() {
    let v = variants_of("thand");
    assert_eq!(v[0].text, "थंद");
    assert_eq!(v[0].rule, "base");
    let t = texts(&v);
    for expected in ["ठंद", "थंड", "ठंड", "थन्द"] {
        assert!(t.contains(&expected), "{expected} missing from {t:?}");
    }
}

#[test]
fn variants_are_unique_and_first_rule_wins() {
    let v = variants_of("thand");
    let mut t = texts(&v);
    let len = t.len();
    t.sort();
    t.dedup();
    assert_eq!(t.len(), len);
    // retroflex_d comes before nasal_retroflex and produces the same text
    let rule = v.iter().find(|c| c.text == "थंड").map(|c| c.rule);
    assert_eq!(rule, Some("retroflex_d"));
}

#[test]
fn vowel_lengthening_variant() {
    let v = variants_of("hindi");
    assert_eq!(v[0].text, "हिंदी");
    let long = v.iter().find(|c| c.rule == "long_i").map(|c| c.text.as_str());
    assert_eq!(long, Some("हींदी"));
    let full = v.iter().find(|c| c.rule == "full_nasal").map(|c| c.text.as_str());
    assert_eq!(full, Some("हिन्दी"));
}

#[test]
fn nasal_retroflex_only_after_anusvara() {
    let v = variants_of("tantaa");
    assert_eq!(v[0].text, "तंता");
    let nasal = v.iter().find(|c| c.rule == "nasal_retroflex").map(|c| c.text.as_str());
    assert_eq!(nasal, Some("तंटा"));
}

#[test]
fn variants_capped() {
    let v = generate(
        &Transliterator::default(),
        &PhoneticTable::embedded(),
        "thand",
        2,
    );
    assert_eq!(v.len(), 2);
    assert_eq!(v[0].rule, "base");
}

#[test]
fn empty_query_has_no_variants() {
    assert!(variants_of("").is_empty());
}

// --- anusvara resolution ---

#[test]
fn anusvara_resolves_to_homorganic_nasal() {
    let t = PhoneticTable::embedded();
    assert_eq!(resolve_anusvara(&t, "हिंदी"), "हिन्दी");
    assert_eq!(resolve_anusvara(&t, "ठंड"), "ठण्ड");
    assert_eq!(resolve_anusvara(&t, "गंगा"), "गङ्गा");
    assert_eq!(resolve_anusvara(&t, "चंपा"), "चम्पा");
}

#[test]
fn anusvara_kept_without_following_stop() {
    let t = PhoneticTable::embedded();
    assert_eq!(resolve_anusvara(&t, "संसार"), "संसार");
    assert_eq!(resolve_anusvara(&t, "मैं"), "मैं");
    assert_eq!(resolve_anusvara(&PhoneticTable::empty(), "हिंदी"), "हिंदी");
}

// --- ranking ---

#[test]
fn thand_prefers_nasal_retroflex() {
    let results = suggest_default("thand", 5);
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].text, "ठंड");
    assert_eq!(results[0].score, 1.0);
    assert!(position(&results, "ठंड") < position(&results, "ठंद"));
    assert!(position(&results, "थंड") < position(&results, "थंद"));
}

#[test]
fn final_ight_prefers_retroflex() {
    let results = suggest_default("right", 5);
    assert!(position(&results, "राइट") < position(&results, "राइत"));
}

#[test]
fn empty_query_suggests_nothing() {
    assert!(suggest_default("", 5).is_empty());
    assert!(suggest_default("   ", 5).is_empty());
    assert!(suggest_default("thand", 0).is_empty());
}

#[test]
fn elongated_query_is_normalized() {
    assert_eq!(suggest_default("THAAAND", 5), suggest_default("thand", 5));
}

#[test]
fn native_query_is_compared_by_its_roman_form() {
    let results = suggest_default("थंड", 5);
    assert!(!results.is_empty());
    assert!(results.iter().any(|r| r.text == "थंड"));
}

#[test]
fn ties_break_on_text() {
    let settings = Settings::default();
    let candidates = vec![
        Candidate { text: "ख".into(), rule: "base" },
        Candidate { text: "क".into(), rule: "base" },
    ];
    let results = rank(&PhoneticTable::embedded(), &settings, "xyz", candidates, 5);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].text, "क");
}

#[test]
fn rule_weights_come_from_settings() {
    let custom = r#"
[distance]
near_substitution = 0.25
substitution = 1.0
indel = 1.0

[candidates]
default_top_k = 5
max_variants = 16

[[ranker.rules]]
name = "prefer_dental"
query = [{ ends_with = "nd" }]
candidate = { contains = "ंद" }
weight = 0.5
"#;
    let settings = parse_settings_toml(custom).unwrap();
    assert_eq!(rule_adjustment(&settings, "thand", "थंद"), 0.5);
    assert_eq!(rule_adjustment(&settings, "thand", "थंड"), 0.0);

    let results = suggest(
        &Transliterator::default(),
        &PhoneticTable::embedded(),
        &settings,
        "thand",
        5,
    );
    assert!(position(&results, "थंद") < position(&results, "थंड"));
}

#[test]
fn no_rules_means_plain_similarity() {
    let mut settings = Settings::default();
    settings.ranker.rules.clear();
    let results = suggest(
        &Transliterator::default(),
        &PhoneticTable::embedded(),
        &settings,
        "thand",
        5,
    );
    // थन्द back-transliterates to exactly "thand"
    assert_eq!(results[0].text, "थन्द");
    assert_eq!(results[0].score, 1.0);
}

fn roman_query() -> impl Strategy<Value = String> {
    "[a-z]{0,10}"
}

proptest! {
    #[test]
    fn suggest_respects_top_k_and_order(q in roman_query(), k in 0usize..8) {
        let results = suggest_default(&q, k);
        prop_assert!(results.len() <= k);
        for r in &results {
            prop_assert!((0.0..=1.0).contains(&r.score));
        }
        for pair in results.windows(2) {
            let ordered = pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].text <= pair[1].text);
            prop_assert!(ordered, "{:?}", pair);
        }
    }

    #[test]
    fn suggest_is_deterministic(q in roman_query()) {
        prop_assert_eq!(suggest_default(&q, 5), suggest_default(&q, 5));
    }
}
