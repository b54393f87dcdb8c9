//! Grapheme-cluster segmentation that keeps conjuncts and diacritics whole.
//!
//! Extended grapheme clusters from `unicode-segmentation` are the starting
//! point. Two merges are applied on top:
//!
//! - a cluster ending in virama (optionally followed by ZWJ/ZWNJ) absorbs a
//!   following cluster that starts with a consonant, so `क्ष` stays one unit
//!   regardless of the Unicode version's conjunct break rules;
//! - a cluster starting with a combining mark is appended to the previous one.
//!
//! A mark at the very start of the input has nothing to attach to and forms a
//! cluster of its own. Segmentation never drops or reorders characters, so the
//! clusters always concatenate back to the input.

use unicode_segmentation::UnicodeSegmentation;

use crate::unicode::{is_joiner, is_native_consonant, is_native_mark, mark_kind, MarkKind, VIRAMA};

fn ends_in_virama(cluster: &str) -> bool {
    let mut rev = cluster.chars().rev().skip_while(|&c| is_joiner(c));
    rev.next() == Some(VIRAMA)
}

fn starts_with(cluster: &str, pred: impl Fn(char) -> bool) -> bool {
    cluster.chars().next().is_some_and(pred)
}

/// Split `text` into grapheme clusters.
pub fn segment(text: &str) -> Vec<&str> {
    // (start, end) byte ranges; clusters are contiguous so merging only moves `end`.
    let mut spans: Vec<(usize, usize)> = Vec::new();

    for (start, g) in text.grapheme_indices(true) {
        let end = start + g.len();
        if let Some(last) = spans.last_mut() {
            let prev = &text[last.0..last.1];
            let merge = starts_with(g, is_native_mark)
                || (ends_in_virama(prev) && starts_with(g, is_native_consonant));
            if merge {
                last.1 = end;
                continue;
            }
        }
        spans.push((start, end));
    }

    spans.into_iter().map(|(s, e)| &text[s..e]).collect()
}

/// Role of one part of a decomposed cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Maximal run of non-mark characters (consonant or vowel letter, with any
    /// nukta that follows it).
    Base,
    VowelSign,
    Nasalization,
    ConjunctMarker,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterPart<'a> {
    pub kind: PartKind,
    pub text: &'a str,
}

fn part_kind(c: char) -> PartKind {
    match mark_kind(c) {
        Some(MarkKind::VowelSign) => PartKind::VowelSign,
        Some(MarkKind::Nasalization) => PartKind::Nasalization,
        Some(MarkKind::ConjunctMarker) => PartKind::ConjunctMarker,
        Some(MarkKind::Accent) => PartKind::Accent,
        Some(MarkKind::Nukta) | None => PartKind::Base,
    }
}

/// Split one cluster into base runs and single marks, in order.
///
/// A mark only ever follows the base it belongs to; the next base starts a new
/// run.
pub fn decompose(cluster: &str) -> Vec<ClusterPart<'_>> {
    let mut parts = Vec::new();
    let mut base_start: Option<usize> = None;

    for (i, c) in cluster.char_indices() {
        match part_kind(c) {
            PartKind::Base => {
                base_start.get_or_insert(i);
            }
            kind => {
                if let Some(s) = base_start.take() {
                    parts.push(ClusterPart {
                        kind: PartKind::Base,
                        text: &cluster[s..i],
                    });
                }
                parts.push(ClusterPart {
                    kind,
                    text: &cluster[i..i + c.len_utf8()],
                });
            }
        }
    }
    if let Some(s) = base_start {
        parts.push(ClusterPart {
            kind: PartKind::Base,
            text: &cluster[s..],
        });
    }

    parts
}

/// Segment `text` and decompose every cluster, flattened in order.
pub fn segment_decomposed(text: &str) -> Vec<ClusterPart<'_>> {
    segment(text).into_iter().flat_map(decompose).collect()
}
