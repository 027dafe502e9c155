//! Word analysis pipeline.
//!
//! This module provides the per-token processing components:
//! - **Alphabet**: The permitted Kabyle letters and the vowel subset
//! - **Tokenizer**: Splits raw corpus text into word and punctuation tokens
//! - **Normalizer**: Cleans a raw token into a canonical word
//! - **Encoder**: Maps a canonical word to its CV pattern

pub mod alphabet;
pub mod encoder;
pub mod normalizer;
pub mod tokenizer;

pub use encoder::encode;
pub use normalizer::{normalize, WordNormalizer};
pub use tokenizer::WordTokenizer;
