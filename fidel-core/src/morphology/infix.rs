//! Infix and reduplication rewriting.
//!
//! Amharic marks frequentative and intensive stems by repeating a syllable
//! (`sebabere` for `sebere`). The rules below undo the common shapes on the
//! romanized word. They are tried in order and the first one that changes
//! the word wins; the last rule instead splits an initial consonant cluster
//! with the placeholder encoding so it decodes as two graphemes.
//!
//! Matching is ASCII case-insensitive throughout, both for the vowel class
//! and for repeated segments, so `b` and `B` count as the same consonant
//! even though they romanize different graphemes. A "consonant" below is
//! any byte that is not one of `aeiou`.
//!
//! Rewritten words lose their alignment.

use core::fmt;

use crate::script::WordForm;

/// One reduplication or cluster rule, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InfixRule {
    /// `C a C` after the first character: drop the first `C a` of the word.
    RepeatedSyllable = 0,
    /// `G V G V`: keep the second `G V`.
    VowelReduplication = 1,
    /// Word starts `G a G`: cut at the first `a` that is not final.
    InitialReduplication = 2,
    /// Word starts `V G V G`: drop the second `V G`.
    VowelInitialReduplication = 3,
    /// `X C a X` after the first character: cut at the first non-final `C a`.
    ConsonantReduplication = 4,
    /// Word starts with two consonant letters and `e`: insert the placeholder
    /// between them.
    ClusterSeparator = 5,
}

impl InfixRule {
    /// Every rule, in the order they are tried.
    pub const ALL: [InfixRule; 6] = [
        InfixRule::RepeatedSyllable,
        InfixRule::VowelReduplication,
        InfixRule::InitialReduplication,
        InfixRule::VowelInitialReduplication,
        InfixRule::ConsonantReduplication,
        InfixRule::ClusterSeparator,
    ];

    /// Short name used in traces.
    pub const fn name(self) -> &'static str {
        match self {
            InfixRule::RepeatedSyllable => "repeated-syllable",
            InfixRule::VowelReduplication => "vowel-reduplication",
            InfixRule::InitialReduplication => "initial-reduplication",
            InfixRule::VowelInitialReduplication => "vowel-initial-reduplication",
            InfixRule::ConsonantReduplication => "consonant-reduplication",
            InfixRule::ClusterSeparator => "cluster-separator",
        }
    }

    /// Rewrites `latin` if the rule matches. Non-ASCII input never matches.
    pub fn apply(self, latin: &str, placeholder: &str) -> Option<String> {
        if !latin.is_ascii() {
            return None;
        }
        let s = latin.as_bytes();
        match self {
            InfixRule::RepeatedSyllable => {
                has_repeated_syllable(s)?;
                let at = first_consonant_a(s, 0)?;
                Some(splice(latin, at, at + 2, ""))
            }
            InfixRule::VowelReduplication => {
                let (start, g) = find_vowel_reduplication(s)?;
                Some(splice(latin, start, start + g + 1, ""))
            }
            InfixRule::InitialReduplication => {
                has_initial_reduplication(s)?;
                let at = (0..s.len().saturating_sub(1)).find(|&i| is_a(s[i]))?;
                Some(latin[..at].to_string())
            }
            InfixRule::VowelInitialReduplication => {
                let g = find_vowel_initial_reduplication(s)?;
                Some(splice(latin, 1 + g, 2 + 2 * g, ""))
            }
            InfixRule::ConsonantReduplication => {
                has_consonant_reduplication(s)?;
                let at = first_consonant_a(s, 1)?;
                Some(latin[..at].to_string())
            }
            InfixRule::ClusterSeparator => {
                let cluster = s.len() >= 3
                    && is_consonant_letter(s[0])
                    && is_consonant_letter(s[1])
                    && s[2].eq_ignore_ascii_case(&b'e');
                cluster.then(|| splice(latin, 1, 1, placeholder))
            }
        }
    }
}

impl fmt::Display for InfixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies the first infix rule that changes the word.
///
/// On a change the alignment is cleared, since rewritten bytes no longer
/// line up with the original graphemes. Non-ASCII words are left alone.
pub fn strip_infix(form: &mut WordForm, placeholder: &str) -> Option<InfixRule> {
    if !form.latin.is_ascii() {
        return None;
    }

    for rule in InfixRule::ALL {
        let Some(rewritten) = rule.apply(&form.latin, placeholder) else {
            continue;
        };
        if rewritten != form.latin {
            form.latin = rewritten;
            form.alignment.clear();
            return Some(rule);
        }
    }

    None
}

#[inline(always)]
fn is_vowel(b: u8) -> bool {
    matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u')
}

#[inline(always)]
fn is_a(b: u8) -> bool {
    b == b'a' || b == b'A'
}

#[inline(always)]
fn is_consonant_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() && !is_vowel(b)
}

#[inline(always)]
fn same(a: &[u8], b: &[u8]) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn splice(latin: &str, from: usize, to: usize, with: &str) -> String {
    let mut out = String::with_capacity(latin.len() + with.len());
    out.push_str(&latin[..from]);
    out.push_str(with);
    out.push_str(&latin[to..]);
    out
}

/// Leftmost `C a` followed by at least `tail` more bytes.
fn first_consonant_a(s: &[u8], tail: usize) -> Option<usize> {
    (0..s.len().saturating_sub(1 + tail)).find(|&i| !is_vowel(s[i]) && is_a(s[i + 1]))
}

/// `C a C` starting at index 1 or later.
fn has_repeated_syllable(s: &[u8]) -> Option<()> {
    (1..s.len().saturating_sub(2))
        .any(|k| !is_vowel(s[k]) && is_a(s[k + 1]) && same(&s[k + 2..k + 3], &s[k..k + 1]))
        .then_some(())
}

/// `(start, g)` of the leftmost `G V G V`, longest `G` at that start.
fn find_vowel_reduplication(s: &[u8]) -> Option<(usize, usize)> {
    let n = s.len();
    for start in 0..n {
        let room = n - start;
        if room < 4 {
            break;
        }
        for g in (1..=(room - 2) / 2).rev() {
            let first = &s[start..start + g];
            let second = &s[start + g + 1..start + 2 * g + 1];
            if is_vowel(s[start + g]) && same(first, second) && is_vowel(s[start + 2 * g + 1]) {
                return Some((start, g));
            }
        }
    }
    None
}

/// Word starts with `G a G`.
fn has_initial_reduplication(s: &[u8]) -> Option<()> {
    let n = s.len();
    (1..=n.saturating_sub(1) / 2)
        .any(|g| is_a(s[g]) && same(&s[..g], &s[g + 1..2 * g + 1]))
        .then_some(())
}

/// Length of the shortest `G` for a word starting `V G V G`.
fn find_vowel_initial_reduplication(s: &[u8]) -> Option<usize> {
    let n = s.len();
    if n < 4 || !is_vowel(s[0]) {
        return None;
    }
    (1..=(n - 2) / 2).find(|&g| is_vowel(s[1 + g]) && same(&s[1..1 + g], &s[2 + g..2 + 2 * g]))
}

/// `X C a X` starting at index 1 or later.
fn has_consonant_reduplication(s: &[u8]) -> Option<()> {
    (1..s.len().saturating_sub(3))
        .any(|k| {
            !is_vowel(s[k])
                && !is_vowel(s[k + 1])
                && is_a(s[k + 2])
                && same(&s[k + 3..k + 4], &s[k..k + 1])
        })
        .then_some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(latin: &str) -> Option<(InfixRule, String)> {
        let mut form = WordForm::new(latin, &[]);
        strip_infix(&mut form, "X").map(|rule| (rule, form.latin))
    }

    #[test]
    fn repeated_syllable() {
        assert_eq!(
            rewrite("sebab"),
            Some((InfixRule::RepeatedSyllable, "seb".to_string()))
        );
    }

    #[test]
    fn frequentative_stem() {
        assert_eq!(
            rewrite("sebabere"),
            Some((InfixRule::RepeatedSyllable, "sebere".to_string()))
        );
    }

    #[test]
    fn repeated_syllable_ignores_case() {
        assert_eq!(
            rewrite("SebaB"),
            Some((InfixRule::RepeatedSyllable, "SeB".to_string()))
        );
    }

    #[test]
    fn repeated_syllable_needs_a_leading_character() {
        // "bab" at the very start is not the medial pattern.
        assert_ne!(rewrite("babe").map(|(r, _)| r), Some(InfixRule::RepeatedSyllable));
    }

    #[test]
    fn vowel_reduplication_keeps_second_copy() {
        assert_eq!(
            rewrite("bekebeke"),
            Some((InfixRule::VowelReduplication, "beke".to_string()))
        );
    }

    #[test]
    fn initial_reduplication_truncates() {
        assert_eq!(
            rewrite("tatb"),
            Some((InfixRule::InitialReduplication, "t".to_string()))
        );
    }

    #[test]
    fn vowel_initial_reduplication() {
        assert_eq!(
            rewrite("ebebc"),
            Some((InfixRule::VowelInitialReduplication, "ebc".to_string()))
        );
    }

    #[test]
    fn consonant_reduplication_truncates() {
        assert_eq!(
            rewrite("mbtab"),
            Some((InfixRule::ConsonantReduplication, "mb".to_string()))
        );
    }

    #[test]
    fn cluster_separator_inserts_placeholder() {
        assert_eq!(
            rewrite("sbera"),
            Some((InfixRule::ClusterSeparator, "sXbera".to_string()))
        );
    }

    #[test]
    fn cluster_needs_letters() {
        assert_eq!(rewrite("1be"), None);
        assert_eq!(InfixRule::ClusterSeparator.apply("sbo", "X"), None);
    }

    #[test]
    fn plain_word_untouched() {
        let mut form = WordForm::new("seber", &[2, 2, 1]);
        assert_eq!(strip_infix(&mut form, "X"), None);
        assert_eq!(form.alignment.as_slice(), &[2, 2, 1]);
    }

    #[test]
    fn rewrite_clears_alignment() {
        let mut form = WordForm::new("sebab", &[2, 2, 1]);
        assert_eq!(strip_infix(&mut form, "X"), Some(InfixRule::RepeatedSyllable));
        assert!(form.alignment.is_empty());
    }

    #[test]
    fn non_ascii_left_alone() {
        let mut form = WordForm::new("sébab", &[]);
        assert_eq!(strip_infix(&mut form, "X"), None);
    }

    #[test]
    fn rule_names() {
        assert_eq!(InfixRule::ClusterSeparator.to_string(), "cluster-separator");
        assert_eq!(InfixRule::ALL.len(), 6);
        assert_eq!(InfixRule::ALL[0], InfixRule::RepeatedSyllable);
    }

    #[test]
    fn short_words_never_panic() {
        for word in ["", "a", "ab", "aba", "bab", "xXe", "AAAA", "eaea"] {
            let _ = rewrite(word);
        }
    }
}
