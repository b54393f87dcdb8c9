//! Character-level Unicode classification for Devanagari and Roman text.

pub const VIRAMA: char = '\u{094D}';
pub const NUKTA: char = '\u{093C}';
pub const ANUSVARA: char = '\u{0902}';
pub const ZWJ: char = '\u{200D}';
pub const ZWNJ: char = '\u{200C}';

/// Kind of a Devanagari combining mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Candrabindu, anusvara, visarga (U+0900..U+0903).
    Nasalization,
    VowelSign,
    /// Virama.
    ConjunctMarker,
    Nukta,
    /// Vedic svara and stress marks (U+0951..U+0954).
    Accent,
}

/// Classify a Devanagari combining mark. Returns `None` for anything else.
pub fn mark_kind(c: char) -> Option<MarkKind> {
    match c {
        '\u{0900}'..='\u{0903}' => Some(MarkKind::Nasalization),
        '\u{093A}'..='\u{093B}'
        | '\u{093E}'..='\u{094C}'
        | '\u{094E}'..='\u{094F}'
        | '\u{0955}'..='\u{0957}'
        | '\u{0962}'..='\u{0963}' => Some(MarkKind::VowelSign),
        VIRAMA => Some(MarkKind::ConjunctMarker),
        NUKTA => Some(MarkKind::Nukta),
        '\u{0951}'..='\u{0954}' => Some(MarkKind::Accent),
        _ => None,
    }
}

pub fn is_native_mark(c: char) -> bool {
    mark_kind(c).is_some()
}

/// Devanagari block (U+0900..U+097F) plus Devanagari Extended (U+A8E0..U+A8FF).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c) || ('\u{A8E0}'..='\u{A8FF}').contains(&c)
}

pub fn is_native_consonant(c: char) -> bool {
    ('\u{0915}'..='\u{0939}').contains(&c)
        || ('\u{0958}'..='\u{095F}').contains(&c)
        || ('\u{0978}'..='\u{097F}').contains(&c)
}

/// Devanagari digits ० to ९.
pub fn is_native_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

/// Danda and double danda.
pub fn is_danda(c: char) -> bool {
    c == '\u{0964}' || c == '\u{0965}'
}

/// Letters and marks that keep a native word going (excludes danda and digits).
pub fn is_native_word_char(c: char) -> bool {
    ('\u{0900}'..='\u{0963}').contains(&c) || ('\u{0970}'..='\u{097F}').contains(&c)
}

/// ASCII letters plus Latin-1, Latin Extended-A/B and Latin Extended Additional
/// letters (covers IAST diacritics such as ṭ ḍ ṃ ā).
pub fn is_roman(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (('\u{00C0}'..='\u{024F}').contains(&c) && c != '×' && c != '÷')
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}

pub fn is_joiner(c: char) -> bool {
    c == ZWJ || c == ZWNJ
}
