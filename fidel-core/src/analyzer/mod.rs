//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Expands abbreviations, strips punctuation and stop-words
//! - **Tokenizer**: Splits normalized text into words

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{NormalizerConfig, TextNormalizer};
pub use tokenizer::Tokenizer;
