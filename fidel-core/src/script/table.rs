//! Bidirectional grapheme <-> Latin map.

use rustc_hash::FxHashMap;
use tracing::debug;

use fidel_types::{TableError, MAX_ENCODING_LEN};

/// Transliteration table, indexed both ways.
///
/// Forward lookup is by grapheme. Reverse lookup is by exact Latin string;
/// when several graphemes share an encoding the one listed first keeps it.
/// The placeholder encoding reverse-maps to `None` (no grapheme).
#[derive(Debug, Clone)]
pub struct TransliterationTable {
    pub(crate) forward: FxHashMap<char, Box<str>>,
    pub(crate) reverse: FxHashMap<Box<str>, Option<char>>,
    placeholder: Box<str>,
    filler: char,
}

impl TransliterationTable {
    /// Builds the table from syllable and numeral pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] for empty, non-ASCII or over-long encodings,
    /// for a grapheme listed twice, and for a placeholder that is empty,
    /// non-ASCII or already used by a grapheme.
    pub fn build(
        syllables: &[(char, &str)],
        numerals: &[(char, &str)],
        placeholder: &str,
        filler: char,
    ) -> Result<Self, TableError> {
        let capacity = syllables.len() + numerals.len();
        let mut forward = FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        let mut reverse = FxHashMap::with_capacity_and_hasher(capacity + 1, Default::default());
        let mut shared = 0usize;

        for &(grapheme, latin) in syllables.iter().chain(numerals) {
            if latin.is_empty() {
                return Err(TableError::EmptyEncoding { grapheme });
            }
            if !latin.is_ascii() {
                return Err(TableError::NonAsciiEncoding {
                    grapheme,
                    encoding: latin.to_string(),
                });
            }
            if latin.len() > MAX_ENCODING_LEN {
                return Err(TableError::EncodingTooLong {
                    grapheme,
                    encoding: latin.to_string(),
                    max: MAX_ENCODING_LEN,
                });
            }
            if forward.insert(grapheme, Box::from(latin)).is_some() {
                return Err(TableError::DuplicateGrapheme { grapheme });
            }
            if reverse.contains_key(latin) {
                shared += 1;
                debug!(%grapheme, latin, "encoding already taken, reverse lookup keeps the first entry");
            } else {
                reverse.insert(Box::from(latin), Some(grapheme));
            }
        }

        if placeholder.is_empty() || !placeholder.is_ascii() || reverse.contains_key(placeholder) {
            return Err(TableError::InvalidPlaceholder {
                encoding: placeholder.to_string(),
            });
        }
        reverse.insert(Box::from(placeholder), None);

        debug!(
            graphemes = forward.len(),
            encodings = reverse.len(),
            shared,
            "transliteration table built"
        );

        Ok(Self {
            forward,
            reverse,
            placeholder: Box::from(placeholder),
            filler,
        })
    }

    /// Latin encoding of `grapheme`, if the table knows it.
    #[inline]
    pub fn encode(&self, grapheme: char) -> Option<&str> {
        self.forward.get(&grapheme).map(|latin| &**latin)
    }

    /// Exact reverse lookup.
    ///
    /// `Some(None)` means `latin` is the placeholder: a known encoding that
    /// decodes to nothing.
    #[inline]
    pub fn decode(&self, latin: &str) -> Option<Option<char>> {
        self.reverse.get(latin).copied()
    }

    /// The placeholder encoding.
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Grapheme suppressed when it comes out of per-character decoding.
    #[inline]
    pub fn filler(&self) -> char {
        self.filler
    }

    /// Number of graphemes in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// `true` if the table holds no graphemes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
