//! Restoring the alignment invariant after a cut.

use crate::script::{alignment_sum, Alignment};

/// End of the word an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first graphemes.
    Start,
    /// The last graphemes.
    End,
}

/// Makes `alignment` sum to `latin_len` by editing it at `side`.
///
/// A shortfall is inserted as a new entry at that side (split into
/// `u8`-sized pieces if it ever exceeds 255). An excess is taken off the
/// entries at that side, removing those it consumes entirely. An empty
/// alignment for an empty word is left alone.
pub fn repair_alignment(latin_len: usize, mut alignment: Alignment, side: Side) -> Alignment {
    let sum = alignment_sum(&alignment);

    if sum < latin_len {
        let mut missing = latin_len - sum;
        while missing > 0 {
            let piece = missing.min(u8::MAX as usize);
            match side {
                Side::Start => alignment.insert(0, piece as u8),
                Side::End => alignment.push(piece as u8),
            }
            missing -= piece;
        }
    } else if sum > latin_len {
        let mut excess = sum - latin_len;
        while excess > 0 {
            let idx = match side {
                Side::Start => 0,
                Side::End => alignment.len() - 1,
            };
            let entry = alignment[idx] as usize;
            if entry <= excess {
                alignment.remove(idx);
                excess -= entry;
            } else {
                alignment[idx] = (entry - excess) as u8;
                excess = 0;
            }
        }
    }

    alignment
}
