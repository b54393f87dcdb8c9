use crate::unicode::{is_native_word_char, ANUSVARA, VIRAMA};

const DENTAL_NASAL: char = '\u{0928}';

/// Dental and retroflex stops that pull a preceding dental nasal to anusvara.
fn is_assimilating_stop(c: char) -> bool {
    matches!(c, 'त' | 'थ' | 'द' | 'ध' | 'ट' | 'ठ' | 'ड' | 'ढ')
}

/// Rewrite `न्` + dental/retroflex stop to `ं` + stop.
///
/// The nasal must follow a letter of the same word that is not itself a
/// virama, so word-initial clusters and longer conjunct chains are kept.
pub(super) fn assimilate_nasals(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == DENTAL_NASAL
            && i > 0
            && is_native_word_char(chars[i - 1])
            && chars[i - 1] != VIRAMA
            && chars.get(i + 1) == Some(&VIRAMA)
            && chars.get(i + 2).is_some_and(|&s| is_assimilating_stop(s))
        {
            out.push(ANUSVARA);
            i += 2;
            continue;
        }
        out.push(c);
        i += 1;
    }

    out
}
