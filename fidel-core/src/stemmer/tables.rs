//! Prepared, validated lexical tables.

use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use fidel_types::{Affix, TableError};

use crate::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
use crate::lexicon::LexicalResources;
use crate::morphology::{transliterate_all, Morpheme};
use crate::script::TransliterationTable;

/// Built-in tables, prepared on first use and shared afterwards.
static STANDARD: OnceLock<Result<Arc<StemmerTables>, TableError>> = OnceLock::new();

/// Everything the stemmer reads, prepared once.
///
/// Building validates the transliteration table and romanizes every affix,
/// so the per-word path never has to fail. The value is immutable and meant
/// to be shared through an [`Arc`] between any number of stemmers and threads.
#[derive(Debug)]
pub struct StemmerTables {
    transliteration: TransliterationTable,
    normalizer: TextNormalizer,
    suffixes: Vec<Morpheme>,
    prefixes: Vec<Morpheme>,
}

impl StemmerTables {
    /// Validates and prepares a set of lexical resources.
    ///
    /// # Errors
    ///
    /// Returns the first [`TableError`] found: a bad transliteration entry
    /// or placeholder, an empty affix list, an affix with no Latin form, or
    /// an empty abbreviation key.
    pub fn build(resources: &LexicalResources<'_>) -> Result<Self, TableError> {
        let transliteration = TransliterationTable::build(
            resources.syllables,
            resources.numerals,
            resources.placeholder,
            resources.epenthetic_filler,
        )?;
        let normalizer = TextNormalizer::new(resources, NormalizerConfig::default())?;
        let suffixes = transliterate_all(&transliteration, Affix::Suffix, resources.suffixes)?;
        let prefixes = transliterate_all(&transliteration, Affix::Prefix, resources.prefixes)?;

        debug!(
            graphemes = transliteration.len(),
            suffixes = suffixes.len(),
            prefixes = prefixes.len(),
            "stemmer tables built"
        );

        Ok(Self {
            transliteration,
            normalizer,
            suffixes,
            prefixes,
        })
    }

    /// The built-in Amharic tables.
    ///
    /// Built on the first call; later calls return the same `Arc`.
    ///
    /// # Errors
    ///
    /// Only if the built-in tables are malformed, which the test suite rules
    /// out. The error is cached like the tables would be.
    pub fn standard() -> Result<Arc<Self>, TableError> {
        STANDARD
            .get_or_init(|| {
                let tables = Self::build(&LexicalResources::standard())?;
                info!(
                    graphemes = tables.transliteration.len(),
                    suffixes = tables.suffixes.len(),
                    prefixes = tables.prefixes.len(),
                    "loaded standard Amharic tables"
                );
                Ok(Arc::new(tables))
            })
            .clone()
    }

    /// Grapheme <-> Latin table.
    #[inline]
    pub fn transliteration(&self) -> &TransliterationTable {
        &self.transliteration
    }

    /// Text normalizer over these tables.
    #[inline]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Suffixes in priority order.
    #[inline]
    pub fn suffixes(&self) -> &[Morpheme] {
        &self.suffixes
    }

    /// Prefixes in priority order.
    #[inline]
    pub fn prefixes(&self) -> &[Morpheme] {
        &self.prefixes
    }
}
