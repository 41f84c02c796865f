//! Characters treated as noise between words.
//!
//! Mixed scripts: ASCII punctuation, Ethiopic punctuation and numerals,
//! typographic quotes and the Arabic digits. The hyphen is listed here but
//! the normalizer turns it into a space instead of dropping it.

/// Hyphen, replaced by a space rather than removed.
pub const WORD_JOINER: char = '-';

/// Every character the normalizer strips.
#[rustfmt::skip]
pub const PUNCTUATION: &[char] = &[
    '!', '"', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_',
    '`', '{', '|', '}', '~', '፣', '።', '፤', '፥', '÷', '፦', '፨',
    '“', '”', '–', '—', '፩', '፪', '፫', '፬', '፭', '፮', '፯', '፰',
    '፱', '፲', '፳', '፴', '፵', '፶', '፷', '፸', '፹', '፺', '፻', '«',
    '»', '›', '‹', '‘', '’', '‚', '‛', '፡', '…', '0', '1', '2',
    '3', '4', '5', '6', '7', '8', '9',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphen_is_listed() {
        assert!(PUNCTUATION.contains(&WORD_JOINER));
    }

    #[test]
    fn ethiopic_marks_and_digits_listed() {
        for c in ['።', '፣', '፡', '፩', '0', '9', '/'] {
            assert!(PUNCTUATION.contains(&c), "{c} missing");
        }
    }

    #[test]
    fn no_syllables_listed() {
        assert!(!PUNCTUATION.contains(&'ሀ'));
        assert!(!PUNCTUATION.contains(&'a'));
    }
}
