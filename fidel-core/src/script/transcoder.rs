//! Forward and reverse transcoding between Ge'ez and Latin.
//!
//! Forward transcoding replaces every grapheme by its Latin encoding and
//! records how many Latin bytes each grapheme produced. That per-grapheme
//! length list, the *alignment*, is what lets the affix strippers cut the
//! Latin string on grapheme boundaries and lets [`reverse`] cut it back
//! into decodable chunks.
//!
//! ```text
//! እሰብኦች  ->  I  se  b  o  c   ->  ("Iseboc", [1, 2, 1, 1, 1])
//! ```
//!
//! [`reverse`]: TransliterationTable::reverse

use smallvec::SmallVec;
use tracing::trace;

use super::table::TransliterationTable;

/// Latin byte length of each remaining grapheme, in order.
///
/// Sixteen inline slots cover every realistic Amharic word without touching
/// the heap.
pub type Alignment = SmallVec<[u8; 16]>;

/// A word in transit through the stemmer.
///
/// When `alignment` is non-empty its entries sum to `latin.len()`. It is
/// empty for the empty word and after an infix rewrite, in which case
/// reverse transcoding falls back to two-byte windows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordForm {
    /// Romanized word.
    pub latin: String,
    /// Latin length of each grapheme.
    pub alignment: Alignment,
}

impl WordForm {
    /// Creates a word form from its parts.
    pub fn new(latin: impl Into<String>, alignment: &[u8]) -> Self {
        Self {
            latin: latin.into(),
            alignment: SmallVec::from_slice(alignment),
        }
    }

    /// Number of graphemes the alignment still accounts for.
    #[inline]
    pub fn graphemes(&self) -> usize {
        self.alignment.len()
    }

    /// `true` when the alignment is empty or sums to the Latin length.
    pub fn is_aligned(&self) -> bool {
        self.alignment.is_empty() || alignment_sum(&self.alignment) == self.latin.len()
    }
}

impl core::fmt::Display for WordForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?} {:?}", self.latin, self.alignment.as_slice())
    }
}

/// Sum of alignment entries, widened so it cannot overflow.
#[inline]
pub fn alignment_sum(alignment: &[u8]) -> usize {
    alignment.iter().map(|&n| n as usize).sum()
}

impl TransliterationTable {
    /// Romanizes `word`. Graphemes missing from the table are skipped.
    pub fn forward(&self, word: &str) -> WordForm {
        let mut form = WordForm {
            latin: String::with_capacity(word.len()),
            alignment: Alignment::new(),
        };

        for grapheme in word.chars() {
            match self.forward.get(&grapheme) {
                Some(latin) => {
                    form.latin.push_str(latin);
                    // Encodings are at most MAX_ENCODING_LEN bytes.
                    form.alignment.push(latin.len() as u8);
                }
                None => trace!(%grapheme, "no encoding, skipped"),
            }
        }

        form
    }

    /// Converts a word form back into graphemes.
    pub fn reverse(&self, form: &WordForm) -> String {
        let mut out = String::with_capacity(form.latin.len() * 2);
        self.reverse_into(form, &mut out);
        out
    }

    /// Appends the graphemes of `form` to `out`.
    ///
    /// With an alignment the Latin string is cut into chunks of the recorded
    /// lengths (chunks running past the end are clipped, Latin beyond the
    /// alignment is ignored). Without one it is cut into two-character
    /// windows. Each chunk is decoded by exact lookup, falling back to
    /// decoding its characters one at a time and dropping the misses.
    pub fn reverse_into(&self, form: &WordForm, out: &mut String) {
        let latin = form.latin.as_str();

        if form.alignment.is_empty() {
            let mut bounds = latin.char_indices().map(|(i, _)| i).step_by(2).peekable();
            while let Some(start) = bounds.next() {
                let end = bounds.peek().copied().unwrap_or(latin.len());
                self.decode_chunk(&latin[start..end], out);
            }
            return;
        }

        let mut start = 0usize;
        for &len in &form.alignment {
            if start >= latin.len() {
                break;
            }
            let end = (start + len as usize).min(latin.len());
            match latin.get(start..end) {
                Some(chunk) => self.decode_chunk(chunk, out),
                None => trace!(start, end, "chunk splits a character, dropped"),
            }
            start = end;
        }
    }

    fn decode_chunk(&self, chunk: &str, out: &mut String) {
        if let Some(hit) = self.reverse.get(chunk) {
            out.extend(*hit);
            return;
        }

        let mark = out.len();
        let mut buf = [0u8; 4];
        for c in chunk.chars() {
            if let Some(Some(grapheme)) = self.reverse.get(&*c.encode_utf8(&mut buf)) {
                out.push(*grapheme);
            }
        }

        let mut decoded = out[mark..].chars();
        if decoded.next() == Some(self.filler()) && decoded.next().is_none() {
            out.truncate(mark);
        }
    }
}
