//! Phonology-aware edit distance between Roman strings.
//!
//! Strings are cut into chunks first: aspirate digraphs such as `th` or `ṭh`
//! count as one unit, everything else is one character. Substituting a chunk
//! for another chunk of the same confusable group (dental/retroflex stops,
//! nasals, velars, labials, sibilants and affricates, v/w) costs
//! `near_substitution`; any other substitution costs `substitution`.

use crate::settings::DistanceSettings;

const DIGRAPHS: &[&str] = &["th", "ch", "jh", "ph", "bh", "kh", "gh", "dh", "sh", "ṭh", "ḍh"];

const CONFUSABLE: &[&[&str]] = &[
    &["t", "ṭ", "d", "ḍ", "th", "ṭh", "dh", "ḍh"],
    &["n", "m", "ṅ", "ṇ", "ṃ", "ñ"],
    &["k", "g", "kh", "gh", "q"],
    &["p", "b", "ph", "bh", "f"],
    &["c", "j", "s", "z", "ch", "jh", "sh", "ṣ"],
    &["v", "w"],
];

/// Split `text` into comparison chunks. No case folding.
pub fn chunk(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        let mut end = start + c.len_utf8();
        if let Some(&(next_start, next)) = iter.peek() {
            let pair_end = next_start + next.len_utf8();
            if DIGRAPHS.contains(&&text[start..pair_end]) {
                end = pair_end;
                iter.next();
            }
        }
        chunks.push(&text[start..end]);
    }

    chunks
}

fn confusable(a: &str, b: &str) -> bool {
    CONFUSABLE
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

fn substitution_cost(a: &str, b: &str, costs: &DistanceSettings) -> f64 {
    if a == b {
        0.0
    } else if confusable(a, b) {
        costs.near_substitution
    } else {
        costs.substitution
    }
}

/// Weighted edit distance over chunk sequences.
pub fn chunk_distance(a: &[&str], b: &[&str], costs: &DistanceSettings) -> f64 {
    let mut prev: Vec<f64> = (0..=b.len()).map(|j| j as f64 * costs.indel).collect();
    let mut curr = vec![0.0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = (i + 1) as f64 * costs.indel;
        for (j, cb) in b.iter().enumerate() {
            let substitute = prev[j] + substitution_cost(ca, cb, costs);
            let delete = prev[j + 1] + costs.indel;
            let insert = curr[j] + costs.indel;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Distance between two Roman strings after lowercasing.
pub fn distance(a: &str, b: &str, costs: &DistanceSettings) -> f64 {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    chunk_distance(&chunk(&a), &chunk(&b), costs)
}

/// Similarity in [0, 1]: `1 - 2d / (len_a + len_b)` over chunk counts,
/// floored at 0. Two empty strings are identical.
pub fn similarity(a: &str, b: &str, costs: &DistanceSettings) -> f64 {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    let (ca, cb) = (chunk(&a), chunk(&b));
    let total = ca.len() + cb.len();
    if total == 0 {
        return 1.0;
    }
    let d = chunk_distance(&ca, &cb, costs);
    (1.0 - 2.0 * d / total as f64).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use proptest::prelude::*;

    fn costs() -> DistanceSettings {
        Settings::default().distance
    }

    #[test]
    fn chunks_digraphs() {
        assert_eq!(chunk("thand"), vec!["th", "a", "n", "d"]);
        assert_eq!(chunk("ṭhaṃḍ"), vec!["ṭh", "a", "ṃ", "ḍ"]);
        assert_eq!(chunk("chhota"), vec!["ch", "h", "o", "t", "a"]);
        assert!(chunk("").is_empty());
    }

    #[test]
    fn identical_is_one() {
        assert_eq!(similarity("namaste", "namaste", &costs()), 1.0);
        assert_eq!(similarity("", "", &costs()), 1.0);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(similarity("Namaste", "namaste", &costs()), 1.0);
    }

    #[test]
    fn near_substitution_is_cheap() {
        let c = costs();
        assert!((distance("thand", "ṭhand", &c) - 0.25).abs() < 1e-9);
        assert!((distance("t", "th", &c) - 0.25).abs() < 1e-9);
        assert!((distance("v", "w", &c) - 0.25).abs() < 1e-9);
        assert!((distance("t", "k", &c) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn aspirate_is_one_unit() {
        // "th" vs "t" is a single near substitution, not a substitution plus an insertion.
        let c = costs();
        assert!((similarity("thanda", "tanda", &c) - (1.0 - 2.0 * 0.25 / 10.0)).abs() < 1e-9);
    }

    #[test]
    fn unrelated_floors_at_zero() {
        assert_eq!(similarity("abc", "xyzuvw", &costs()), 0.0);
        assert_eq!(similarity("", "abc", &costs()), 0.0);
    }

    #[test]
    fn insertion_cost() {
        let c = costs();
        assert!((distance("ghar", "gha", &c) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn custom_costs() {
        let c = DistanceSettings {
            near_substitution: 0.5,
            substitution: 3.0,
            indel: 1.0,
        };
        assert!((distance("d", "ḍ", &c) - 0.5).abs() < 1e-9);
        // delete + insert is cheaper than a 3.0 substitution
        assert!((distance("a", "o", &c) - 2.0).abs() < 1e-9);
    }

    fn roman_word() -> impl Strategy<Value = String> {
        "[a-zṭḍṃṇ]{0,12}"
    }

    proptest! {
        #[test]
        fn similarity_is_symmetric(a in roman_word(), b in roman_word()) {
            let c = costs();
            prop_assert_eq!(similarity(&a, &b, &c), similarity(&b, &a, &c));
        }

        #[test]
        fn similarity_in_unit_range(a in roman_word(), b in roman_word()) {
            let s = similarity(&a, &b, &costs());
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn self_similarity_is_one(a in "[a-z]{1,12}") {
            prop_assert_eq!(similarity(&a, &a, &costs()), 1.0);
        }
    }
}
