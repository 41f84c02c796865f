//! Suffix stripping.

use core::mem;

use super::alignment::{repair_alignment, Side};
use super::Morpheme;
use crate::script::WordForm;

/// Removes the first suffix (in list order) whose Latin form ends the word.
///
/// A suffix may end inside a grapheme: trailing alignment entries are
/// dropped until they cover the removed bytes, and the overshoot is put back
/// as a new last entry. Returns the suffix removed, if any.
pub fn strip_suffix<'m>(form: &mut WordForm, suffixes: &'m [Morpheme]) -> Option<&'m Morpheme> {
    let suffix = suffixes.iter().find(|s| form.latin.ends_with(s.latin()))?;

    let removed = suffix.latin().len();
    let keep = form.latin.len() - removed;
    form.latin.truncate(keep);

    let mut covered = 0usize;
    while covered < removed {
        match form.alignment.pop() {
            Some(len) => covered += len as usize,
            None => break,
        }
    }

    let alignment = mem::take(&mut form.alignment);
    form.alignment = repair_alignment(keep, alignment, Side::End);

    Some(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::fixtures::*;

    #[test]
    fn strips_plural_suffix() {
        let table = table();
        let suffixes = suffixes(&table);

        let mut form = table.forward("እሰብኦች");
        let suffix = strip_suffix(&mut form, &suffixes).unwrap();

        assert_eq!(suffix.source(), "ኦች");
        assert_eq!(form, WordForm::new("Iseb", &[1, 2, 1]));
    }

    #[test]
    fn first_listed_suffix_wins() {
        let table = table();
        let suffixes = vec![
            Morpheme::transliterate(&table, fidel_types::Affix::Suffix, "ች").unwrap(),
            Morpheme::transliterate(&table, fidel_types::Affix::Suffix, "ኦች").unwrap(),
        ];
        let mut form = table.forward("እሰብኦች");
        assert_eq!(strip_suffix(&mut form, &suffixes).unwrap().latin(), "c");
        assert_eq!(form, WordForm::new("Isebo", &[1, 2, 1, 1]));
    }

    #[test]
    fn suffix_splitting_a_grapheme_leaves_remainder_entry() {
        let table = table();
        // "e" is the vowel of በ ("be"); cutting it leaves "b" as its own entry.
        let suffixes = vec![Morpheme::transliterate(&table, fidel_types::Affix::Suffix, "አ").unwrap()];
        let mut form = table.forward("ሰበበ");
        assert_eq!(form.latin, "sebebe");

        strip_suffix(&mut form, &suffixes).unwrap();
        assert_eq!(form, WordForm::new("sebeb", &[2, 2, 1]));
        assert!(form.is_aligned());
        assert_eq!(table.reverse(&form), "ሰበብ");
    }

    #[test]
    fn no_match_leaves_word_alone() {
        let table = table();
        let suffixes = vec![Morpheme::transliterate(&table, fidel_types::Affix::Suffix, "ኦች").unwrap()];
        let mut form = table.forward("ሰበረ");
        let before = form.clone();
        assert!(strip_suffix(&mut form, &suffixes).is_none());
        assert_eq!(form, before);
    }

    #[test]
    fn suffix_consuming_whole_word() {
        let table = table();
        let suffixes = vec![Morpheme::transliterate(&table, fidel_types::Affix::Suffix, "ኦች").unwrap()];
        let mut form = table.forward("ኦች");
        strip_suffix(&mut form, &suffixes).unwrap();
        assert!(form.latin.is_empty());
        assert!(form.alignment.is_empty());
    }

    #[test]
    fn alignment_invariant_holds_on_random_words() {
        let table = table();
        let suffixes = suffixes(&table);
        let mut rng = Lcg(0x5eed);

        for _ in 0..2_000 {
            let word = random_word(&mut rng);
            let mut form = table.forward(&word);
            strip_suffix(&mut form, &suffixes);
            assert!(form.is_aligned(), "{word}: {form}");
            assert!(form.alignment.iter().all(|&n| n > 0), "{word}: {form}");
        }
    }
}
