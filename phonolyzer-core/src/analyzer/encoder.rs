//! CV pattern encoding.
//!
//! Maps each letter of a normalized word to `V` (vowel) or `C` (everything
//! else). The output always has one symbol per input character.

use phonolyzer_types::{CvPattern, Symbol};

use crate::analyzer::alphabet;

/// Symbol for a single character of a normalized word.
#[inline(always)]
fn symbol_of(c: char) -> Symbol {
    if alphabet::is_vowel(c) {
        Symbol::Vowel
    } else {
        Symbol::Consonant
    }
}

/// Streams the symbols of `word` in order.
///
/// # Example
///
/// ```
/// use phonolyzer_core::analyzer::encoder::encode_symbols;
/// use phonolyzer_types::Symbol;
///
/// let mut vowels = 0;
/// encode_symbols("tamurt", |s| {
///     if s == Symbol::Vowel {
///         vowels += 1;
///     }
/// });
/// assert_eq!(vowels, 2);
/// ```
#[inline(always)]
pub fn encode_symbols<F>(word: &str, mut emit: F)
where
    F: FnMut(Symbol),
{
    for c in word.chars() {
        emit(symbol_of(c));
    }
}

/// Writes the pattern of `word` into `out`, clearing it first.
#[inline]
pub fn encode_into(word: &str, out: &mut String) {
    out.clear();
    out.reserve(word.len());
    encode_symbols(word, |s| out.push(s.as_char()));
}

/// Encodes a normalized word into its CV pattern.
///
/// ```
/// use phonolyzer_core::analyzer::encoder::encode;
///
/// assert_eq!(encode("taqbaylit").as_str(), "CVCCVCCVC");
/// ```
#[inline]
pub fn encode(word: &str) -> CvPattern {
    let mut symbols = Vec::with_capacity(word.len());
    encode_symbols(word, |s| symbols.push(s));
    CvPattern::from_symbols(symbols)
}
