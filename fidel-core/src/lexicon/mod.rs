//! Static lexical data for Amharic.
//!
//! Everything the stemmer knows about the language lives here as plain
//! `const` slices: abbreviations, punctuation, stop-words, the syllable
//! table and the affix lists. [`LexicalResources`] bundles borrowed views of
//! them so that alternate sets (test fixtures, other Ethiopic languages) can
//! be fed to [`StemmerTables::build`](crate::stemmer::StemmerTables::build)
//! through the same door.

pub mod abbreviations;
pub mod morphemes;
pub mod punctuation;
pub mod stopwords;
pub mod transliteration;

pub use abbreviations::ABBREVIATIONS;
pub use morphemes::{PREFIXES, SUFFIXES};
pub use punctuation::{PUNCTUATION, WORD_JOINER};
pub use stopwords::STOP_WORDS;
pub use transliteration::{EPENTHETIC_FILLER, NUMERALS, PLACEHOLDER, SYLLABLES};

/// Borrowed view of one complete set of lexical tables.
///
/// Ordering is significant for `abbreviations`, `syllables`, `suffixes` and
/// `prefixes`; see the individual table modules.
#[derive(Debug, Clone, Copy)]
pub struct LexicalResources<'a> {
    /// `(abbreviation, expansion)` pairs in lookup order.
    pub abbreviations: &'a [(&'a str, &'a str)],
    /// Characters removed by the normalizer.
    pub punctuation: &'a [char],
    /// Character replaced by a space instead of removed.
    pub word_joiner: char,
    /// Whole words dropped by the normalizer.
    pub stop_words: &'a [&'a str],
    /// Grapheme to Latin pairs, first entry wins on reverse lookup.
    pub syllables: &'a [(char, &'a str)],
    /// Numeral to Latin pairs, looked up after `syllables`.
    pub numerals: &'a [(char, &'a str)],
    /// Latin string that decodes to no grapheme.
    pub placeholder: &'a str,
    /// Grapheme suppressed when it is only a decoding leftover.
    pub epenthetic_filler: char,
    /// Suffixes in priority order.
    pub suffixes: &'a [&'a str],
    /// Prefixes in priority order.
    pub prefixes: &'a [&'a str],
}

impl LexicalResources<'static> {
    /// The built-in Amharic tables.
    pub const fn standard() -> Self {
        Self {
            abbreviations: ABBREVIATIONS,
            punctuation: PUNCTUATION,
            word_joiner: WORD_JOINER,
            stop_words: STOP_WORDS,
            syllables: SYLLABLES,
            numerals: NUMERALS,
            placeholder: PLACEHOLDER,
            epenthetic_filler: EPENTHETIC_FILLER,
            suffixes: SUFFIXES,
            prefixes: PREFIXES,
        }
    }
}

impl Default for LexicalResources<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_are_populated() {
        let res = LexicalResources::standard();
        assert!(res.abbreviations.len() > 30);
        assert!(res.stop_words.len() > 250);
        assert!(res.syllables.len() > 200);
        assert_eq!(res.numerals.len(), 19);
        assert!(res.suffixes.len() > 100);
        assert!(res.prefixes.len() > 30);
        assert_eq!(res.placeholder, "X");
    }

    #[test]
    fn default_is_standard() {
        let a = LexicalResources::default();
        let b = LexicalResources::standard();
        assert_eq!(a.suffixes.len(), b.suffixes.len());
        assert_eq!(a.word_joiner, '-');
    }
}
