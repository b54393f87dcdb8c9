//! Phonetic romanization and matching for Hindi / Hinglish text.
//!
//! Informally romanized words ("thand", "namaste") are transliterated to
//! Devanagari, expanded into plausible alternative spellings and ranked by a
//! phonology-aware similarity against the query. [`Engine`] bundles the
//! operations; the modules can also be used on their own.

pub mod backtranslit;
pub mod candidates;
pub mod distance;
mod engine;
pub mod grapheme;
pub mod normalize;
pub mod phonetic;
pub mod script;
pub mod settings;
pub mod trace_init;
pub mod translit;
pub mod unicode;
pub mod words;

pub use candidates::{Candidate, ScoredCandidate};
pub use engine::Engine;
pub use phonetic::{PhoneticTable, Place, PropertyRecord};
pub use script::ScriptTag;
pub use settings::Settings;
pub use translit::Transliterator;
