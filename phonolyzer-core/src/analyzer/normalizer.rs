//! Word Normalization
//!
//! Turns a raw token into the canonical form that gets encoded and counted.
//! Normalization is total: a token made only of punctuation, digits or
//! foreign script comes out empty rather than failing.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::analyzer::alphabet;

/// Punctuation removed from either end of a token before filtering.
const BOUNDARY_PUNCTUATION: [char; 20] = [
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}', '«', '»', '‘', '’',
    '“', '”',
];

#[inline(always)]
fn is_boundary_punct(c: char) -> bool {
    BOUNDARY_PUNCTUATION.contains(&c)
}

#[inline(always)]
const fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}')
}

/// Cleans a raw token into a canonical Kabyle word.
///
/// Performs the following operations, in order:
/// - Unicode NFC composition, so `d` + U+0323 becomes `ḍ`
/// - Lowercasing (Unicode-aware)
/// - Trimming boundary punctuation from both ends
/// - Removing every hyphen, merging compound fragments
/// - Dropping every character outside the Kabyle alphabet
///
/// The result may be empty; callers treat an empty word as "not a word".
/// Normalization never fails.
///
/// # Examples
///
/// ```
/// use phonolyzer_core::analyzer::normalizer::WordNormalizer;
///
/// let normalizer = WordNormalizer::default();
/// assert_eq!(normalizer.normalize("Axxam-nni."), "axxamnni");
/// assert_eq!(normalizer.normalize("«Ḍḍunit»"), "ḍḍunit");
/// assert_eq!(normalizer.normalize("1984"), "");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes a token into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();

        // ASCII needs neither composition nor Unicode case mapping.
        let lowered: Cow<'_, str> = if input.is_ascii() {
            if input.bytes().any(|b| b.is_ascii_uppercase()) {
                Cow::Owned(input.to_ascii_lowercase())
            } else {
                Cow::Borrowed(input)
            }
        } else {
            Cow::Owned(input.nfc().flat_map(char::to_lowercase).collect())
        };

        out.extend(
            lowered
                .trim_matches(is_boundary_punct)
                .chars()
                .filter(|&c| !is_hyphen(c))
                .filter(|&c| alphabet::is_letter(c)),
        );
    }

    /// Normalizes a token and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Normalizes a single token.
#[inline]
pub fn normalize(raw: &str) -> String {
    WordNormalizer::default().normalize(raw)
}
