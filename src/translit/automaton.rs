use super::table::{RomanTable, RomanToken, TokenOutput};
use crate::unicode::VIRAMA;

/// Scanner state carried between tokens.
#[derive(Debug, Default)]
struct ScanState {
    /// Last emitted token was a consonant: the next vowel is a sign, the next
    /// consonant joins as a conjunct.
    after_consonant: bool,
    /// Last emitted token was a vowel; enables the nasal-before-stop rule.
    after_vowel: bool,
}

impl ScanState {
    fn emit(&mut self, token: &RomanToken, out: &mut String) {
        match &token.output {
            TokenOutput::Vowel {
                independent,
                dependent,
            } => {
                out.push_str(if self.after_consonant {
                    dependent
                } else {
                    independent
                });
                self.after_consonant = false;
                self.after_vowel = true;
            }
            TokenOutput::Consonant(native) => {
                if self.after_consonant {
                    out.push(VIRAMA);
                }
                out.push_str(native);
                self.after_consonant = true;
                self.after_vowel = false;
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_word_letter(c: Option<&char>) -> bool {
    c.is_some_and(|c| c.is_ascii_lowercase())
}

/// Single left-to-right pass over `input`, longest match first.
///
/// ASCII letters are lowercased up front. Characters that match no token are
/// copied through and end the current syllable.
pub(super) fn scan(table: &RomanTable, input: &str) -> String {
    let chars: Vec<char> = input.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut out = String::with_capacity(input.len() * 3);
    let mut state = ScanState::default();
    let nasal = table.nasal();
    let mut i = 0;

    while i < chars.len() {
        if let Some(token) = table.match_special(&chars, i) {
            state.emit(token, &mut out);
            i += token.advance();
            continue;
        }

        if state.after_vowel
            && chars[i] == nasal.trigger
            && chars.get(i + 1).is_some_and(|c| nasal.before.contains(c))
        {
            out.push_str(&nasal.mark);
            state.reset();
            i += 1;
            continue;
        }

        if let Some(token) = table.match_vowel(&chars, i) {
            let next = i + token.advance();
            let token = if state.after_consonant && !is_word_letter(chars.get(next)) {
                table.lengthened(token).unwrap_or(token)
            } else {
                token
            };
            state.emit(token, &mut out);
            i = next;
            continue;
        }

        if let Some(token) = table
            .match_digraph(&chars, i)
            .or_else(|| table.match_consonant(&chars, i))
        {
            state.emit(token, &mut out);
            i += token.advance();
            continue;
        }

        out.push(chars[i]);
        state.reset();
        i += 1;
    }

    out
}
