//! Word-level tokenization with an optional morphological model.

use crate::unicode::is_danda;

const WORD_BREAK_PUNCT: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Split `text` into words.
///
/// Whitespace and ASCII punctuation end a word and are dropped; danda and
/// double danda end a word and are kept as tokens of their own.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        let danda = is_danda(c);
        if c.is_whitespace() || danda || WORD_BREAK_PUNCT.contains(&c) {
            if let Some(s) = start.take() {
                tokens.push(&text[s..i]);
            }
            if danda {
                tokens.push(&text[i..i + c.len_utf8()]);
            }
        } else {
            start.get_or_insert(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }

    tokens
}

/// A loaded morphological segmentation model, e.g. a Morfessor-style
/// unsupervised segmenter. Loading and training live outside this crate.
pub trait MorphModel: Send + Sync {
    /// Split one word into morphemes. Returning the word whole is valid.
    fn segment_word(&self, word: &str) -> Vec<String>;
}

/// Word segmenter that either holds a morphological model or does not.
#[derive(Default)]
pub struct WordSegmenter {
    model: Option<Box<dyn MorphModel>>,
}

impl WordSegmenter {
    pub fn new(model: Option<Box<dyn MorphModel>>) -> Self {
        Self { model }
    }

    pub fn with_model(model: Box<dyn MorphModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Words of `text`, split into morphemes when a model is present.
    /// Danda tokens are never passed to the model.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let words = word_tokenize(text);
        let Some(model) = &self.model else {
            return words.into_iter().map(str::to_string).collect();
        };

        let mut out = Vec::with_capacity(words.len());
        for word in words {
            if word.chars().all(is_danda) {
                out.push(word.to_string());
            } else {
                out.extend(model.segment_word(word));
            }
        }
        out
    }
}

impl std::fmt::Debug for WordSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordSegmenter")
            .field("has_model", &self.has_model())
            .finish()
    }
}
