//! Rule-driven morphological stemmer for Amharic.
//!
//! Words written in the Ethiopic (Ge'ez) syllabary carry their affixes
//! inside syllables: the plural `-oc` of `ልጆች` (`ljoc`) is half of `ጆ` and
//! all of `ች`. The stemmer therefore works on a romanized copy of each word
//! and keeps a per-grapheme length list alongside it, so that cuts made in
//! Latin can be mapped back onto the syllabary.
//!
//! Pipeline, leaves first:
//!
//! - **Lexicon**: static tables (abbreviations, stop-words, transliteration,
//!   affix lists)
//! - **Script**: grapheme <-> Latin transcoding with alignment
//! - **Analyzer**: text normalization and tokenization
//! - **Morphology**: suffix, prefix and infix stripping
//! - **Stemmer**: the orchestrator, exception lexicon and statistics
//!
//! ```
//! use fidel_core::Stemmer;
//!
//! let stemmer = Stemmer::standard().unwrap();
//! assert_eq!(stemmer.stem_text("ልጆች እና ወንድሞቻችን"), "ልጅ ወንድም");
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod lexicon;
pub mod morphology;
pub mod script;
pub mod stemmer;

pub use fidel_types::{Affix, LexiconError, StemmerConfig, TableError};
pub use stemmer::{
    ExceptionLexicon, MapLexicon, NoExceptions, StemStats, StemTrace, Stemmer, StemmerTables,
};
