//! Script classification and code-switch detection for mixed Hindi/Roman text.

use crate::grapheme;
use crate::unicode::{is_danda, is_devanagari, is_native_digit, is_roman};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptTag {
    Native,
    Roman,
    Digit,
    Punctuation,
    Other,
}

impl ScriptTag {
    /// Digits and punctuation never open a new segment.
    pub fn is_neutral(self) -> bool {
        matches!(self, ScriptTag::Digit | ScriptTag::Punctuation)
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || ('\u{00A1}'..='\u{00BF}').contains(&c)
        || ('\u{2000}'..='\u{206F}').contains(&c)
}

/// Tag a single character. Pure and total.
pub fn classify(c: char) -> ScriptTag {
    if is_native_digit(c) {
        ScriptTag::Digit
    } else if is_danda(c) {
        ScriptTag::Punctuation
    } else if is_devanagari(c) {
        ScriptTag::Native
    } else if is_roman(c) {
        ScriptTag::Roman
    } else if c.is_numeric() {
        ScriptTag::Digit
    } else if is_punctuation(c) {
        ScriptTag::Punctuation
    } else {
        ScriptTag::Other
    }
}

/// A maximal run of text in one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSegment<'a> {
    pub text: &'a str,
    pub tag: ScriptTag,
}

/// Tag of the first non-neutral character, so a native mark on a space still
/// counts as native. All-neutral clusters take the tag of their first character.
fn cluster_tag(cluster: &str) -> ScriptTag {
    let mut tags = cluster.chars().map(classify);
    let first = tags.next().unwrap_or(ScriptTag::Other);
    if !first.is_neutral() {
        return first;
    }
    tags.find(|t| !t.is_neutral()).unwrap_or(first)
}

/// Split `text` at script switches.
///
/// A switch happens only between two non-neutral grapheme clusters with
/// different tags, so a cluster is never split. A cluster is tagged by its
/// first non-neutral character. Neutral clusters (digits,
/// punctuation, whitespace) fold into the segment that is open; leading ones
/// fold into the first segment. Text made only of neutral characters is one
/// segment tagged by its first character.
pub fn detect_switches(text: &str) -> Vec<ScriptSegment<'_>> {
    let mut segments = Vec::new();
    // (segment start, tag) of the open segment
    let mut open: Option<(usize, ScriptTag)> = None;
    let mut offset = 0;

    for cluster in grapheme::segment(text) {
        let tag = cluster_tag(cluster);
        if !tag.is_neutral() {
            match open {
                None => open = Some((0, tag)),
                Some((start, current)) if current != tag => {
                    segments.push(ScriptSegment {
                        text: &text[start..offset],
                        tag: current,
                    });
                    open = Some((offset, tag));
                }
                Some(_) => {}
            }
        }
        offset += cluster.len();
    }

    match open {
        Some((start, tag)) => segments.push(ScriptSegment {
            text: &text[start..],
            tag,
        }),
        None if !text.is_empty() => segments.push(ScriptSegment {
            text,
            tag: cluster_tag(text),
        }),
        None => {}
    }

    segments
}

/// Summary statistics of a mixed-script string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextComposition {
    pub cluster_count: usize,
    /// Number of segment boundaries reported by [`detect_switches`].
    pub script_switches: usize,
    /// Share of characters that fall in native-script segments.
    pub native_ratio: f64,
    pub roman_ratio: f64,
}

pub fn composition(text: &str) -> TextComposition {
    let segments = detect_switches(text);
    let total = text.chars().count();
    let chars_in = |tag: ScriptTag| -> usize {
        segments
            .iter()
            .filter(|s| s.tag == tag)
            .map(|s| s.text.chars().count())
            .sum()
    };
    let ratio = |n: usize| if total == 0 { 0.0 } else { n as f64 / total as f64 };

    TextComposition {
        cluster_count: grapheme::segment(text).len(),
        script_switches: segments.len().saturating_sub(1),
        native_ratio: ratio(chars_in(ScriptTag::Native)),
        roman_ratio: ratio(chars_in(ScriptTag::Roman)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classify_basic() {
        assert_eq!(classify('क'), ScriptTag::Native);
        assert_eq!(classify('ा'), ScriptTag::Native);
        assert_eq!(classify('a'), ScriptTag::Roman);
        assert_eq!(classify('ṭ'), ScriptTag::Roman);
        assert_eq!(classify('7'), ScriptTag::Digit);
        assert_eq!(classify('७'), ScriptTag::Digit);
        assert_eq!(classify(' '), ScriptTag::Punctuation);
        assert_eq!(classify('।'), ScriptTag::Punctuation);
        assert_eq!(classify('?'), ScriptTag::Punctuation);
        assert_eq!(classify('\u{2018}'), ScriptTag::Punctuation);
        assert_eq!(classify('日'), ScriptTag::Other);
    }

    #[test]
    fn switch_between_scripts() {
        let segs = detect_switches("aaj मौसम");
        assert_eq!(
            segs,
            vec![
                ScriptSegment { text: "aaj ", tag: ScriptTag::Roman },
                ScriptSegment { text: "मौसम", tag: ScriptTag::Native },
            ]
        );
    }

    #[test]
    fn punctuation_and_digits_do_not_switch() {
        let segs = detect_switches("मैं 2 बजे, घर।");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].tag, ScriptTag::Native);
    }

    #[test]
    fn leading_neutral_folds_into_first() {
        let segs = detect_switches("12 hello");
        assert_eq!(segs, vec![ScriptSegment { text: "12 hello", tag: ScriptTag::Roman }]);
    }

    #[test]
    fn all_neutral_text() {
        let segs = detect_switches("123 !");
        assert_eq!(segs, vec![ScriptSegment { text: "123 !", tag: ScriptTag::Digit }]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(detect_switches("").is_empty());
    }

    #[test]
    fn mark_on_neutral_base_is_native() {
        let segs = detect_switches(" \u{093E}");
        assert_eq!(segs, vec![ScriptSegment { text: " \u{093E}", tag: ScriptTag::Native }]);

        let segs = detect_switches("hi \u{093E}");
        assert_eq!(
            segs,
            vec![
                ScriptSegment { text: "hi", tag: ScriptTag::Roman },
                ScriptSegment { text: " \u{093E}", tag: ScriptTag::Native },
            ]
        );
    }

    #[test]
    fn cluster_tag_skips_neutral_chars() {
        assert_eq!(cluster_tag(" \u{0902}"), ScriptTag::Native);
        assert_eq!(cluster_tag("a\u{0902}"), ScriptTag::Roman);
        assert_eq!(cluster_tag("1"), ScriptTag::Digit);
        assert_eq!(cluster_tag(""), ScriptTag::Other);
    }

    #[test]
    fn other_script_switches() {
        let segs = detect_switches("hi日本");
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].tag, ScriptTag::Other);
    }

    #[test]
    fn composition_stats() {
        let c = composition("aaj मौसम");
        assert_eq!(c.script_switches, 1);
        assert!((c.roman_ratio - 4.0 / 8.0).abs() < 1e-9);
        assert!((c.native_ratio - 4.0 / 8.0).abs() < 1e-9);
        assert_eq!(c.cluster_count, 7);
    }

    #[test]
    fn composition_of_empty() {
        let c = composition("");
        assert_eq!(c.cluster_count, 0);
        assert_eq!(c.script_switches, 0);
        assert_eq!(c.native_ratio, 0.0);
    }

    fn mixed_text() -> impl Strategy<Value = String> {
        let pool: Vec<char> = "कमलािं abcxyz 0123४ .,!?।".chars().collect();
        prop::collection::vec(prop::sample::select(pool), 0..32)
            .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn segments_concatenate_to_input(s in mixed_text()) {
            let joined: String = detect_switches(&s).iter().map(|seg| seg.text).collect();
            prop_assert_eq!(joined, s);
        }

        #[test]
        fn neighbours_differ_and_start_non_neutral(s in mixed_text()) {
            let segs = detect_switches(&s);
            for pair in segs.windows(2) {
                prop_assert_ne!(pair[0].tag, pair[1].tag);
                let first = grapheme::segment(pair[1].text)[0];
                prop_assert!(!cluster_tag(first).is_neutral());
            }
        }
    }
}
