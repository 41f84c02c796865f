//! Core types shared by the fidel stemmer crates.
//!
//! This crate holds the plain data that crosses crate boundaries:
//!
//! - **Configuration**: [`StemmerConfig`] controls which stripping stages run
//! - **Errors**: [`TableError`] for malformed lexical tables, [`LexiconError`]
//!   for exception lexicons that fail to load
//! - **Vocabulary**: [`Affix`] names the two morpheme lists
//!
//! Nothing here knows about the Ge'ez script itself; the tables and the
//! algorithm live in `fidel-core`.

#![warn(missing_docs)]

use core::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Longest Latin encoding a single grapheme may carry.
///
/// Alignment entries are stored as `u8`, and the built-in table never goes
/// past four characters (`SSSe`), so five leaves headroom for custom tables.
pub const MAX_ENCODING_LEN: usize = 5;

/// Which end of a word a morpheme attaches to.
///
/// `#[repr(u8)]` keeps the tag one byte wide inside trace records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Affix {
    /// Morpheme stripped from the end of a word.
    Suffix = 0,
    /// Morpheme stripped from the start of a word.
    Prefix = 1,
}

impl fmt::Display for Affix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affix::Suffix => f.pad("suffix"),
            Affix::Prefix => f.pad("prefix"),
        }
    }
}

/// Stemming pipeline configuration.
///
/// The grapheme thresholds count entries of the alignment vector, i.e. the
/// graphemes still left in the word when the stage runs. Words shorter than
/// the threshold are treated as bare roots and pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Run the suffix stripper.
    pub strip_suffixes: bool,
    /// Run the prefix stripper.
    pub strip_prefixes: bool,
    /// Run the infix / reduplication rewriter.
    pub strip_infixes: bool,
    /// Minimum graphemes before a suffix may be removed. Default: 3
    pub suffix_min_graphemes: usize,
    /// Minimum graphemes before a prefix may be removed. Default: 3
    pub prefix_min_graphemes: usize,
    /// Minimum graphemes before infix rules are tried. Default: 4
    pub infix_min_graphemes: usize,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            strip_suffixes: true,
            strip_prefixes: true,
            strip_infixes: true,
            suffix_min_graphemes: 3,
            prefix_min_graphemes: 3,
            infix_min_graphemes: 4,
        }
    }
}

impl StemmerConfig {
    /// Suffix and prefix stripping only; words keep their internal shape.
    pub const fn affixes_only() -> Self {
        Self {
            strip_suffixes: true,
            strip_prefixes: true,
            strip_infixes: false,
            suffix_min_graphemes: 3,
            prefix_min_graphemes: 3,
            infix_min_graphemes: 4,
        }
    }

    /// No stripping at all: text is normalized and round-tripped through
    /// the transliteration table.
    pub const fn normalize_only() -> Self {
        Self {
            strip_suffixes: false,
            strip_prefixes: false,
            strip_infixes: false,
            suffix_min_graphemes: 3,
            prefix_min_graphemes: 3,
            infix_min_graphemes: 4,
        }
    }
}

/// Malformed lexical tables, detected while building the stemmer tables.
///
/// These are the only hard failures of the stemmer: once tables build,
/// stemming itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A grapheme maps to the empty string.
    #[error("grapheme {grapheme:?} has an empty Latin encoding")]
    EmptyEncoding {
        /// The offending grapheme.
        grapheme: char,
    },
    /// A Latin encoding contains non-ASCII characters.
    #[error("grapheme {grapheme:?} has non-ASCII encoding {encoding:?}")]
    NonAsciiEncoding {
        /// The offending grapheme.
        grapheme: char,
        /// Its encoding.
        encoding: String,
    },
    /// A Latin encoding is longer than [`MAX_ENCODING_LEN`].
    #[error("grapheme {grapheme:?} encoding {encoding:?} exceeds {max} characters")]
    EncodingTooLong {
        /// The offending grapheme.
        grapheme: char,
        /// Its encoding.
        encoding: String,
        /// The limit.
        max: usize,
    },
    /// The same grapheme appears twice in the table.
    #[error("grapheme {grapheme:?} is listed more than once")]
    DuplicateGrapheme {
        /// The repeated grapheme.
        grapheme: char,
    },
    /// The placeholder encoding is empty, non-ASCII or collides with a grapheme encoding.
    #[error("placeholder encoding {encoding:?} is unusable")]
    InvalidPlaceholder {
        /// The placeholder encoding.
        encoding: String,
    },
    /// A morpheme list is empty.
    #[error("{affix} list is empty")]
    EmptyMorphemeList {
        /// Which list.
        affix: Affix,
    },
    /// A morpheme contains no grapheme known to the transliteration table.
    #[error("{affix} {morpheme:?} has no Latin form")]
    UntransliterableMorpheme {
        /// Which list.
        affix: Affix,
        /// The morpheme in source script.
        morpheme: String,
    },
    /// An abbreviation key is empty.
    #[error("abbreviation expanding to {expansion:?} has an empty key")]
    EmptyAbbreviation {
        /// The expansion of the empty key.
        expansion: String,
    },
}

/// Errors raised while loading an exception lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon source could not be read.
    #[error("failed to read exception lexicon: {0}")]
    Io(#[from] std::io::Error),
    /// The lexicon is not a flat JSON object of strings.
    #[error("exception lexicon is not a JSON object of word -> stem strings: {0}")]
    Json(#[from] serde_json::Error),
}
