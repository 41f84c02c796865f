//! Text normalization ahead of stemming.
//!
//! Three passes, always in this order:
//!
//! 1. **Abbreviations**: expand `ት/ቤት`-style abbreviations, first
//!    occurrence of each key only
//! 2. **Punctuation**: drop punctuation, turn hyphens into spaces
//! 3. **Stop-words**: drop function words and collapse whitespace
//!
//! Abbreviation keys contain `/` and `.`, so the order is load-bearing:
//! stripping punctuation first would destroy the keys before they are seen.
//!
//! The output honours the tokenizer contract: words separated by exactly
//! one ASCII space, no leading or trailing whitespace. That holds whenever
//! the stop-word pass runs; with it switched off the text is only trimmed
//! and whitespace-collapsed.

use rustc_hash::FxHashSet;

use fidel_types::TableError;

use crate::lexicon::LexicalResources;

/// Which normalization passes run. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Expand known abbreviations.
    pub expand_abbreviations: bool,
    /// Remove punctuation characters.
    pub strip_punctuation: bool,
    /// Remove stop-words.
    pub remove_stopwords: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            expand_abbreviations: true,
            strip_punctuation: true,
            remove_stopwords: true,
        }
    }
}

/// Abbreviation, punctuation and stop-word normalizer.
///
/// Owns its tables; built once alongside the rest of the stemmer tables.
///
/// # Examples
///
/// ```
/// use fidel_core::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
/// use fidel_core::lexicon::LexicalResources;
///
/// let normalizer =
///     TextNormalizer::new(&LexicalResources::standard(), NormalizerConfig::default()).unwrap();
/// assert_eq!(normalizer.normalize("ት/ቤት እና ሰላም።"), "ትምህርት ቤት ሰላም");
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    abbreviations: Vec<(Box<str>, Box<str>)>,
    punctuation: FxHashSet<char>,
    word_joiner: char,
    stop_words: FxHashSet<Box<str>>,
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a normalizer over the given tables.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyAbbreviation`] if an abbreviation key is
    /// empty.
    pub fn new(resources: &LexicalResources<'_>, config: NormalizerConfig) -> Result<Self, TableError> {
        let mut abbreviations = Vec::with_capacity(resources.abbreviations.len());
        for &(key, expansion) in resources.abbreviations {
            if key.is_empty() {
                return Err(TableError::EmptyAbbreviation {
                    expansion: expansion.to_string(),
                });
            }
            abbreviations.push((Box::from(key), Box::from(expansion)));
        }

        Ok(Self {
            abbreviations,
            punctuation: resources.punctuation.iter().copied().collect(),
            word_joiner: resources.word_joiner,
            stop_words: resources.stop_words.iter().map(|&w| Box::from(w)).collect(),
            config,
        })
    }

    /// Returns the same tables with a different pass selection.
    pub fn with_config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Active pass selection.
    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// `true` if `word` is a stop-word.
    #[inline]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Replaces the first occurrence of every abbreviation, in table order.
    ///
    /// An expansion may itself contain a later key; it is expanded in turn.
    pub fn expand_abbreviations(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (key, expansion) in &self.abbreviations {
            if let Some(at) = out.find(&**key) {
                out.replace_range(at..at + key.len(), expansion);
            }
        }
        out
    }

    /// Drops punctuation. The word joiner (`-`) becomes a single space.
    pub fn strip_punctuation(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c == self.word_joiner {
                out.push(' ');
            } else if !self.punctuation.contains(&c) {
                out.push(c);
            }
        }
        out
    }

    /// Drops stop-words and rejoins the survivors with single spaces.
    pub fn remove_stopwords(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.push_words(text, true, &mut out);
        out
    }

    fn push_words(&self, text: &str, filter: bool, out: &mut String) {
        for word in text.split_whitespace() {
            if filter && self.is_stop_word(word) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }

    /// Normalizes text into an existing buffer, clearing it first.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        let expanded;
        let mut text = input;
        if self.config.expand_abbreviations {
            expanded = self.expand_abbreviations(text);
            text = &expanded;
        }

        let stripped;
        if self.config.strip_punctuation {
            stripped = self.strip_punctuation(text);
            text = &stripped;
        }

        out.reserve(text.len());
        self.push_words(text, self.config.remove_stopwords, out);
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new(&LexicalResources::standard(), NormalizerConfig::default()).unwrap()
    }

    fn norm(input: &str) -> String {
        normalizer().normalize(input)
    }

    #[test]
    fn expands_school_abbreviation() {
        assert_eq!(normalizer().expand_abbreviations("ት/ቤት"), "ትምህርት ቤት");
    }

    #[test]
    fn expands_first_occurrence_only() {
        assert_eq!(
            normalizer().expand_abbreviations("ት/ቤት ና ት/ቤት"),
            "ትምህርት ቤት ና ት/ቤት"
        );
    }

    #[test]
    fn text_without_abbreviations_unchanged() {
        assert_eq!(normalizer().expand_abbreviations("ሰላም ዓለም"), "ሰላም ዓለም");
    }

    #[test]
    fn strips_ascii_and_ethiopic_punctuation() {
        let n = normalizer();
        assert_eq!(n.strip_punctuation("ሰላም፣ ዓለም።"), "ሰላም ዓለም");
        assert_eq!(n.strip_punctuation("«ሰላም»!?"), "ሰላም");
        assert_eq!(n.strip_punctuation("ገጽ 12"), "ገጽ ");
    }

    #[test]
    fn hyphen_becomes_space() {
        assert_eq!(normalizer().strip_punctuation("ሰላም-ዓለም"), "ሰላም ዓለም");
    }

    #[test]
    fn removes_stop_word() {
        assert_eq!(normalizer().remove_stopwords("እና ሰላም"), "ሰላም");
    }

    #[test]
    fn stop_word_removal_collapses_whitespace() {
        let n = normalizer();
        assert_eq!(n.remove_stopwords("  ሰላም \t እና\n\n ዓለም  "), "ሰላም ዓለም");
        assert_eq!(n.remove_stopwords("እና ነው"), "");
        assert_eq!(n.remove_stopwords(""), "");
    }

    #[test]
    fn stop_words_match_whole_words_only() {
        assert_eq!(normalizer().remove_stopwords("እናት"), "እናት");
    }

    #[test]
    fn full_pipeline() {
        assert_eq!(norm("ት/ቤት እና ሰላም።"), "ትምህርት ቤት ሰላም");
        assert_eq!(norm("ሰላም-ዓለም"), "ሰላም ዓለም");
    }

    #[test]
    fn abbreviations_must_be_expanded_before_punctuation() {
        let n = normalizer();
        assert_eq!(n.normalize("ት/ቤት"), "ትምህርት ቤት");

        // Reversing the first two passes loses the abbreviation.
        let reversed = n.expand_abbreviations(&n.strip_punctuation("ት/ቤት"));
        assert_eq!(n.remove_stopwords(&reversed), "ትቤት");
    }

    #[test]
    fn output_meets_tokenizer_contract() {
        let out = norm("  ሰላም፣   እና  -ዓለም- ");
        assert!(!out.starts_with(' '));
        assert!(!out.ends_with(' '));
        assert!(!out.contains("  "));
        assert_eq!(out, "ሰላም ዓለም");
    }

    #[test]
    fn empty_and_punctuation_only_input() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("።፣!"), "");
        assert_eq!(norm("   "), "");
    }

    #[test]
    fn passes_can_be_disabled() {
        let n = normalizer().with_config(NormalizerConfig {
            expand_abbreviations: false,
            strip_punctuation: false,
            remove_stopwords: false,
        });
        assert_eq!(n.normalize("ት/ቤት  እና"), "ት/ቤት እና");

        let n = n.with_config(NormalizerConfig {
            remove_stopwords: true,
            ..NormalizerConfig::default()
        });
        assert!(n.config().expand_abbreviations);
        assert_eq!(n.normalize("ት/ቤት  እና"), "ትምህርት ቤት");
    }

    #[test]
    fn normalize_into_reuses_buffer() {
        let n = normalizer();
        let mut buf = String::from("stale");
        n.normalize_into("ሰላም", &mut buf);
        assert_eq!(buf, "ሰላም");
        n.normalize_into("", &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn rejects_empty_abbreviation_key() {
        let resources = LexicalResources {
            abbreviations: &[("", "ባዶ")],
            ..LexicalResources::standard()
        };
        let err = TextNormalizer::new(&resources, NormalizerConfig::default()).unwrap_err();
        assert_eq!(
            err,
            TableError::EmptyAbbreviation {
                expansion: "ባዶ".to_string()
            }
        );
    }
}
