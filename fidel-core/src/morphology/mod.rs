//! Affix and infix stripping on romanized words.
//!
//! All strippers work on a [`WordForm`](crate::script::WordForm) in place:
//!
//! - **Suffix**: cuts the first matching suffix off the end
//! - **Prefix**: cuts the first matching prefix off the start, grapheme-exact
//! - **Infix**: rewrites reduplicated stems and splits initial clusters
//! - **Alignment**: restores the alignment invariant after a cut

pub mod alignment;
pub mod infix;
pub mod prefix;
pub mod suffix;

pub use alignment::{repair_alignment, Side};
pub use infix::{strip_infix, InfixRule};
pub use prefix::strip_prefix;
pub use suffix::strip_suffix;

use fidel_types::{Affix, TableError};

use crate::script::TransliterationTable;

/// An affix in source script together with its Latin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    source: Box<str>,
    latin: Box<str>,
}

impl Morpheme {
    /// Romanizes `source` with `table`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UntransliterableMorpheme`] when no grapheme of
    /// `source` is in the table.
    pub fn transliterate(
        table: &TransliterationTable,
        affix: Affix,
        source: &str,
    ) -> Result<Self, TableError> {
        let form = table.forward(source);
        if form.latin.is_empty() {
            return Err(TableError::UntransliterableMorpheme {
                affix,
                morpheme: source.to_string(),
            });
        }
        Ok(Self {
            source: Box::from(source),
            latin: form.latin.into_boxed_str(),
        })
    }

    /// Morpheme as written in Ge'ez.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Romanized morpheme, matched against the word.
    #[inline]
    pub fn latin(&self) -> &str {
        &self.latin
    }
}

/// Romanizes a whole morpheme list, keeping its order.
///
/// # Errors
///
/// Fails on an empty list or on the first untransliterable entry.
pub fn transliterate_all(
    table: &TransliterationTable,
    affix: Affix,
    sources: &[&str],
) -> Result<Vec<Morpheme>, TableError> {
    if sources.is_empty() {
        return Err(TableError::EmptyMorphemeList { affix });
    }
    sources
        .iter()
        .map(|source| Morpheme::transliterate(table, affix, source))
        .collect()
}

/// One change made to a word by the stripping pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied<'m> {
    /// A suffix was removed.
    Suffix(&'m Morpheme),
    /// A prefix was removed.
    Prefix(&'m Morpheme),
    /// An infix rule rewrote the word.
    Infix(InfixRule),
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn morpheme_latin_forms() {
        let table = table();
        let plural = Morpheme::transliterate(&table, Affix::Suffix, "ኦች").unwrap();
        assert_eq!(plural.source(), "ኦች");
        assert_eq!(plural.latin(), "oc");

        let suffixes = suffixes(&table);
        assert_eq!(suffixes.len(), crate::lexicon::SUFFIXES.len());
        assert_eq!(suffixes[0].source(), crate::lexicon::SUFFIXES[0]);
    }

    #[test]
    fn rejects_untransliterable_morpheme() {
        let err = Morpheme::transliterate(&table(), Affix::Prefix, "ab").unwrap_err();
        assert_eq!(
            err,
            TableError::UntransliterableMorpheme {
                affix: Affix::Prefix,
                morpheme: "ab".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_list() {
        let err = transliterate_all(&table(), Affix::Suffix, &[]).unwrap_err();
        assert_eq!(err, TableError::EmptyMorphemeList { affix: Affix::Suffix });
    }
}
