//! Exception lexicon: words whose stem is known up front.
//!
//! Irregular forms defeat rule-based stripping, so the stemmer consults an
//! [`ExceptionLexicon`] before running the rules and returns a hit verbatim.

use std::collections::HashMap;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;

use fidel_types::LexiconError;

/// Word -> stem overrides.
pub trait ExceptionLexicon {
    /// Stem for `word`, if the lexicon overrides it.
    ///
    /// The stemmer treats an empty stem as a miss and runs the rules.
    fn lookup(&self, word: &str) -> Option<&str>;
}

/// Lexicon with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExceptions;

impl ExceptionLexicon for NoExceptions {
    #[inline]
    fn lookup(&self, _word: &str) -> Option<&str> {
        None
    }
}

impl<S: BuildHasher> ExceptionLexicon for HashMap<String, String, S> {
    #[inline]
    fn lookup(&self, word: &str) -> Option<&str> {
        self.get(word).map(String::as_str)
    }
}

impl<T: ExceptionLexicon + ?Sized> ExceptionLexicon for &T {
    #[inline]
    fn lookup(&self, word: &str) -> Option<&str> {
        (**self).lookup(word)
    }
}

/// Owned in-memory lexicon, loadable from a flat JSON object.
///
/// ```
/// use fidel_core::stemmer::{ExceptionLexicon, MapLexicon};
///
/// let lexicon = MapLexicon::from_json_str(r#"{ "ሰዎች": "ሰው" }"#).unwrap();
/// assert_eq!(lexicon.lookup("ሰዎች"), Some("ሰው"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapLexicon {
    entries: FxHashMap<String, String>,
}

impl MapLexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an override, returning the previous stem.
    pub fn insert(&mut self, word: impl Into<String>, stem: impl Into<String>) -> Option<String> {
        self.entries.insert(word.into(), stem.into())
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses `{ "word": "stem", ... }`.
    ///
    /// # Errors
    ///
    /// [`LexiconError::Json`] if the text is not a JSON object of strings.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Reads `{ "word": "stem", ... }` from a reader.
    ///
    /// # Errors
    ///
    /// [`LexiconError::Json`] on malformed input or a failing reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let entries = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }

    /// Loads a JSON lexicon file.
    ///
    /// # Errors
    ///
    /// [`LexiconError::Io`] if the file cannot be opened, otherwise as
    /// [`from_json_reader`](Self::from_json_reader).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}

impl ExceptionLexicon for MapLexicon {
    #[inline]
    fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }
}

impl<W: Into<String>, S: Into<String>> FromIterator<(W, S)> for MapLexicon {
    fn from_iter<I: IntoIterator<Item = (W, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(w, s)| (w.into(), s.into())).collect(),
        }
    }
}
