//! Prefix stripping.

use smallvec::SmallVec;

use super::alignment::{repair_alignment, Side};
use super::Morpheme;
use crate::script::WordForm;

/// Removes the first prefix (in list order) whose Latin form starts the word
/// and ends exactly on a grapheme boundary.
///
/// Unlike suffixes, a prefix that would cut through a grapheme is rejected
/// and the next candidate tried. Returns the prefix removed, if any.
pub fn strip_prefix<'m>(form: &mut WordForm, prefixes: &'m [Morpheme]) -> Option<&'m Morpheme> {
    for prefix in prefixes {
        if !form.latin.starts_with(prefix.latin()) {
            continue;
        }

        let len = prefix.latin().len();
        let mut covered = 0usize;
        let mut consumed = 0usize;
        for &n in &form.alignment {
            covered += n as usize;
            consumed += 1;
            if covered >= len {
                break;
            }
        }
        if covered != len {
            continue;
        }

        form.latin.drain(..len);
        let rest = SmallVec::from_slice(&form.alignment[consumed..]);
        form.alignment = repair_alignment(form.latin.len(), rest, Side::Start);
        return Some(prefix);
    }

    None
}
