//! Light text normalization for mixed Hindi/Roman input.
//!
//! Devanagari is never rewritten beyond NFC; only Roman letters are folded and
//! social-media noise is trimmed.

use unicode_normalization::UnicodeNormalization;

use crate::unicode::{is_devanagari, is_roman};

/// Unicode NFC. Precomposed nukta letters (U+0958..U+095F) are composition
/// exclusions and come out decomposed.
pub fn nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Lowercase Roman letters only.
pub fn lowercase_roman(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_roman(c) {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Collapse runs of three or more identical characters to one ("yaaaar" → "yar").
/// Doubles are kept.
pub fn remove_elongations(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        if run >= 3 {
            out.push(c);
        } else {
            out.extend(&chars[i..i + run]);
        }
        i += run;
    }
    out
}

fn is_allowed(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
        || c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"' | '-')
}

/// Drop everything outside Devanagari, ASCII alphanumerics, whitespace and
/// basic punctuation.
pub fn filter_garbage(text: &str) -> String {
    text.chars().filter(|&c| is_allowed(c)).collect()
}

/// Crude spelling-insensitive key for a Roman Hinglish word.
///
/// Final `ee`/`oo` shorten, `aa` shortens everywhere and aspirate digraphs
/// drop their `h`: "nahee" and "nahi" share the key "nahi".
pub fn phonetic_signature(word: &str) -> String {
    let mut w = remove_elongations(&word.to_lowercase());
    if let Some(stem) = w.strip_suffix("ee") {
        w = format!("{stem}i");
    }
    if let Some(stem) = w.strip_suffix("oo") {
        w = format!("{stem}u");
    }
    for (from, to) in [
        ("aa", "a"),
        ("kh", "k"),
        ("gh", "g"),
        ("ch", "c"),
        ("th", "t"),
        ("ph", "p"),
        ("bh", "b"),
        ("dh", "d"),
    ] {
        w = w.replace(from, to);
    }
    w
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub lowercase_roman: bool,
    /// Garbage filtering plus elongation removal.
    pub clean: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lowercase_roman: true,
            clean: true,
        }
    }
}

/// NFC, then optional Roman lowercasing, then optional cleanup.
pub fn normalize_text(text: &str, opts: NormalizeOptions) -> String {
    let mut text = nfc(text);
    if opts.lowercase_roman {
        text = lowercase_roman(&text);
    }
    if opts.clean {
        text = remove_elongations(&filter_garbage(&text));
    }
    text
}

/// Query form used for matching: trimmed, NFC, Roman lowercased, elongations removed.
pub fn normalize_query(query: &str) -> String {
    remove_elongations(&lowercase_roman(&nfc(query.trim())))
}

/// True when `text` contains at least one Devanagari character.
pub fn has_native(text: &str) -> bool {
    text.chars().any(is_devanagari)
}
