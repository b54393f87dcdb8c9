//! Devanagari → Roman rendering for comparison against Roman queries.
//!
//! The default scheme is lossy on purpose: it produces the informal spelling a
//! Hinglish writer would type (inherent `a` dropped word-finally, `aa`/`ii`
//! for long vowels) so that PhoneticDistance can compare it with a query.
//! [`RomanScheme::Iast`] keeps every inherent vowel and uses IAST diacritics.

use crate::phonetic::PhoneticTable;
use crate::unicode::{is_native_word_char, mark_kind, MarkKind, NUKTA};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RomanScheme {
    /// Informal Hinglish spelling with word-final schwa deletion.
    #[default]
    Informal,
    Iast,
}

/// Precomposed letter for consonant + nukta.
fn nukta_form(base: char) -> Option<char> {
    match base {
        'क' => Some('\u{0958}'),
        'ख' => Some('\u{0959}'),
        'ग' => Some('\u{095A}'),
        'ज' => Some('\u{095B}'),
        'ड' => Some('\u{095C}'),
        'ढ' => Some('\u{095D}'),
        'फ' => Some('\u{095E}'),
        'य' => Some('\u{095F}'),
        _ => None,
    }
}

fn iast_override(c: char) -> Option<&'static str> {
    Some(match c {
        'आ' | 'ा' => "ā",
        'ई' | 'ी' => "ī",
        'ऊ' | 'ू' => "ū",
        'ऋ' | 'ृ' => "ṛ",
        'ॠ' | 'ॄ' => "ṝ",
        'च' => "c",
        'छ' => "ch",
        'श' => "ś",
        'ँ' => "m\u{0310}",
        'ॐ' => "oṃ",
        'ऽ' => "'",
        _ => return None,
    })
}

/// A following mark that replaces or cancels the inherent vowel.
fn suppresses_inherent(c: Option<&char>) -> bool {
    matches!(
        c.copied().and_then(mark_kind),
        Some(MarkKind::VowelSign | MarkKind::ConjunctMarker)
    )
}

fn roman_for<'t>(table: &'t PhoneticTable, c: char, scheme: RomanScheme) -> Option<&'t str> {
    let record = table.get(c)?;
    if scheme == RomanScheme::Iast {
        if let Some(s) = iast_override(c) {
            return Some(s);
        }
    }
    Some(record.roman.as_str())
}

/// Render `text` in Roman using the informal scheme.
///
/// Characters absent from `table` pass through, lowercased where that applies.
pub fn back_transliterate(table: &PhoneticTable, text: &str) -> String {
    back_transliterate_with(table, text, RomanScheme::Informal)
}

pub fn back_transliterate_with(table: &PhoneticTable, text: &str, scheme: RomanScheme) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut word_has_vowel = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let Some(record) = table.get(c) else {
            out.extend(c.to_lowercase());
            if !is_native_word_char(c) {
                word_has_vowel = false;
            }
            i += 1;
            continue;
        };

        if !record.is_consonant {
            out.push_str(roman_for(table, c, scheme).unwrap_or_default());
            if record.is_vowel {
                word_has_vowel = true;
            } else if !is_native_word_char(c) {
                word_has_vowel = false;
            }
            i += 1;
            continue;
        }

        let mut next = i + 1;
        let mut roman = roman_for(table, c, scheme).unwrap_or_default();
        if chars.get(next) == Some(&NUKTA) {
            if let Some(r) = nukta_form(c).and_then(|n| roman_for(table, n, scheme)) {
                roman = r;
            }
            next += 1;
        }
        out.push_str(roman);

        if !suppresses_inherent(chars.get(next)) {
            let word_final = !chars.get(next).is_some_and(|&n| is_native_word_char(n));
            let drop_schwa = scheme == RomanScheme::Informal && word_final && word_has_vowel;
            if !drop_schwa {
                out.push('a');
                word_has_vowel = true;
            }
        }
        i = next;
    }

    out
}
