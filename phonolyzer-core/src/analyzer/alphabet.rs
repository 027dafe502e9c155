//! Kabyle letter alphabet.
//!
//! The permitted letters are the official Latin-script Kabyle alphabet plus
//! `o` and `v`, which only appear in borrowed words. Everything the analyzer
//! counts is built from these 36 letters; any other character is noise.
//!
//! All entries are stored in NFC composed form (`ḍ` is U+1E0D, not `d` +
//! U+0323), so lookups must happen after composition.

use phonolyzer_types::Symbol;

/// Permitted letters, in alphabet order with the borrowed letters last.
pub const LETTERS: [char; 36] = [
    'a', 'b', 'c', 'č', 'd', 'ḍ', 'e', 'ɛ', 'f', 'g', 'ǧ', 'ɣ', 'h', 'ḥ', 'i', 'j', 'k', 'l', 'm',
    'n', 'p', 'q', 'r', 'ṛ', 's', 'ṣ', 't', 'ṭ', 'u', 'w', 'x', 'y', 'z', 'ẓ', 'o', 'v',
];

/// The vowel subset. Official vowels are `a e i u`; `o` comes from loanwords.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'u', 'o'];

#[inline(always)]
fn lookup(c: char) -> Option<Symbol> {
    if VOWELS.contains(&c) {
        Some(Symbol::Vowel)
    } else if LETTERS.contains(&c) {
        Some(Symbol::Consonant)
    } else {
        None
    }
}

/// Classifies a character against the alphabet.
///
/// Upper-case input is folded first, so `'Ḍ'` classifies like `'ḍ'`.
/// Returns `None` for anything outside the alphabet, including letters whose
/// lowercase form expands to more than one character.
#[inline]
pub fn classify(c: char) -> Option<Symbol> {
    if let Some(symbol) = lookup(c) {
        return Some(symbol);
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l != c => lookup(l),
        _ => None,
    }
}

/// Returns `true` if `c` is one of the permitted letters.
#[inline]
pub fn is_letter(c: char) -> bool {
    classify(c).is_some()
}

/// Returns `true` if `c` is one of the five vowels.
#[inline]
pub fn is_vowel(c: char) -> bool {
    classify(c) == Some(Symbol::Vowel)
}
