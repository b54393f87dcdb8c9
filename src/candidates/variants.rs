use std::collections::HashSet;

use crate::phonetic::PhoneticTable;
use crate::translit::Transliterator;
use crate::unicode::{ANUSVARA, VIRAMA};

/// A native spelling plus the alternation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    /// Name of the variant rule; debugging only, never used for scoring.
    pub rule: &'static str,
}

type Rewrite = fn(&PhoneticTable, &str) -> String;

const DENTAL_TO_RETROFLEX: &[(char, char)] = &[('त', 'ट'), ('थ', 'ठ'), ('द', 'ड'), ('ध', 'ढ')];

/// Variant rules, each applied to the base spelling on its own. Earlier rules
/// win when two produce the same text.
static RULES: &[(&str, Rewrite)] = &[
    ("base", keep),
    ("retroflex_t", retroflex_t),
    ("retroflex_th", retroflex_th),
    ("retroflex_d", retroflex_d),
    ("retroflex_dh", retroflex_dh),
    ("dental_t", dental_t),
    ("dental_d", dental_d),
    ("all_retroflex", all_retroflex),
    ("long_i", long_i),
    ("nasal_retroflex", nasal_retroflex),
    ("full_nasal", resolve_anusvara),
];

fn mapped(pairs: &[(char, char)], c: char) -> char {
    pairs
        .iter()
        .find(|&&(from, _)| from == c)
        .map_or(c, |&(_, to)| to)
}

fn swap(text: &str, pairs: &[(char, char)]) -> String {
    text.chars().map(|c| mapped(pairs, c)).collect()
}

fn keep(_: &PhoneticTable, text: &str) -> String {
    text.to_string()
}

fn retroflex_t(_: &PhoneticTable, text: &str) -> String {
    text.replace('त', "ट")
}

fn retroflex_th(_: &PhoneticTable, text: &str) -> String {
    text.replace('थ', "ठ")
}

fn retroflex_d(_: &PhoneticTable, text: &str) -> String {
    text.replace('द', "ड")
}

fn retroflex_dh(_: &PhoneticTable, text: &str) -> String {
    text.replace('ध', "ढ")
}

fn dental_t(_: &PhoneticTable, text: &str) -> String {
    text.replace('ट', "त")
}

fn dental_d(_: &PhoneticTable, text: &str) -> String {
    text.replace('ड', "द")
}

fn all_retroflex(_: &PhoneticTable, text: &str) -> String {
    swap(text, DENTAL_TO_RETROFLEX)
}

fn long_i(_: &PhoneticTable, text: &str) -> String {
    text.replace('ि', "ी")
}

/// Anusvara + dental stop → anusvara + retroflex stop. Stops elsewhere are untouched.
fn nasal_retroflex(_: &PhoneticTable, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_anusvara = false;
    for c in text.chars() {
        out.push(if after_anusvara {
            mapped(DENTAL_TO_RETROFLEX, c)
        } else {
            c
        });
        after_anusvara = c == ANUSVARA;
    }
    out
}

/// Rewrite every anusvara that precedes a stop into the stop's homorganic
/// nasal plus virama: हिंदी → हिन्दी, ठंड → ठण्ड.
///
/// An anusvara before anything else (sibilant, semivowel, end of word) stays.
pub fn resolve_anusvara(table: &PhoneticTable, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let nasal = (c == ANUSVARA)
            .then(|| chars.get(i + 1))
            .flatten()
            .and_then(|&next| table.homorganic_nasal(next));
        match nasal {
            Some(n) => {
                out.push(n);
                out.push(VIRAMA);
            }
            None => out.push(c),
        }
    }

    out
}

/// Transliterate `query` once and enumerate its alternations.
///
/// The base spelling always comes first. Duplicates keep their first rule,
/// empty strings are dropped and at most `max` candidates are returned.
pub fn generate(
    translit: &Transliterator,
    table: &PhoneticTable,
    query: &str,
    max: usize,
) -> Vec<Candidate> {
    let base = translit.transliterate(query);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for &(rule, rewrite) in RULES {
        if out.len() >= max {
            break;
        }
        let text = rewrite(table, &base);
        if text.is_empty() || !seen.insert(text.clone()) {
            continue;
        }
        out.push(Candidate { text, rule });
    }

    out
}
