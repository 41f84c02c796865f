//! Streaming whitespace tokenizer.
//!
//! Splits normalizer output into words without allocating: every token is a
//! slice of the input, handed to a callback together with its position.
//!
//! ```ignore
//! "ትምህርት ቤት ሰላም"  ->  ("ትምህርት", 0) ("ቤት", 1) ("ሰላም", 2)
//! ```
//!
//! ## The Input Contract
//!
//! The tokenizer expects **normalized** input:
//! - words separated by exactly one ASCII space (0x20)
//! - no leading or trailing space
//!
//! [`TextNormalizer`](super::normalizer::TextNormalizer) guarantees this.
//! Violations panic in debug builds.

use core::str;
use memchr::memchr_iter;

/// Splits normalized text on ASCII space.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace, normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace, normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces, normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8. We split only on ASCII space (0x20),
                // which is never a continuation byte, so `bytes[start..i]` is always a
                // valid UTF-8 subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text, pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above, `start` follows an ASCII space byte.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text, pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("ሰላም"), vec![("ሰላም", 0)]);
    }

    #[test]
    fn multibyte_words() {
        assert_eq!(
            collect("ትምህርት ቤት ሰላም"),
            vec![("ትምህርት", 0), ("ቤት", 1), ("ሰላም", 2)]
        );
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn single_grapheme_token() {
        assert_eq!(collect("ል"), vec![("ል", 0)]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("ሰላም ዓለም");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        let mut n = 0usize;
        t.tokenize("ሰላም ዓለም", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("አንድ ሁለት ሶስት", |_, _| n += 1);
        assert_eq!(n, 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "consecutive spaces")]
    fn contract_violation_panics_in_debug() {
        Tokenizer::new().tokenize("ሰላም  ዓለም", |_, _| {});
    }
}
