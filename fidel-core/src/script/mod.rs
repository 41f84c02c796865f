//! Ge'ez script handling.
//!
//! - **Table**: the bidirectional grapheme <-> Latin map
//! - **Transcoder**: word-level forward/reverse conversion with alignment

pub mod table;
pub mod transcoder;

pub use table::TransliterationTable;
pub use transcoder::{alignment_sum, Alignment, WordForm};
