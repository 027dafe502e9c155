//! Streaming Word Tokenizer
//!
//! Splits free text into word and punctuation tokens before normalization.
//! It is the first stage of the pipeline: raw corpus text goes in, slices of
//! that text come out through a callback.
//!
//! ## Rules
//!
//! - Whitespace separates tokens and is never part of one.
//! - A **word** is a run of alphanumeric characters and combining marks.
//! - A hyphen, apostrophe, period or slash sitting *between* two word
//!   characters joins them, so `axxam-nni`, `d'argaz` and `ayen/ayen` each
//!   stay a single token. A period only splits off where it ends a word.
//! - Every other non-whitespace character is a token on its own.
//!
//! ```ignore
//! "Axxam-nni, d tameqqrant.Tamurt."
//!   -> "Axxam-nni" "," "d" "tameqqrant.Tamurt" "."
//! ```
//!
//! Because tokens never span whitespace, splitting a corpus at line breaks
//! cannot change the token stream.
//!
//! ## Usage
//!
//! ```rust
//! use phonolyzer_core::analyzer::tokenizer::WordTokenizer;
//!
//! let mut tokens = Vec::new();
//! WordTokenizer::new().tokenize("Tamurt, taqbaylit!", |text, _pos| {
//!     tokens.push(text);
//! });
//!
//! assert_eq!(tokens, ["Tamurt", ",", "taqbaylit", "!"]);
//! ```

use unicode_normalization::char::is_combining_mark;

#[inline(always)]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

#[inline(always)]
const fn is_joiner(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}' | '\u{2011}' | '\'' | '\u{2019}' | '.' | '/'
    )
}

/// Streaming tokenizer over raw text.
///
/// Tokens are slices (`&str`) of the input, so tokenizing does not allocate.
#[derive(Debug, Copy, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(token, position)` left to right.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str, u32),
    {
        let mut chars = text.char_indices().peekable();
        let mut pos = 0u32;

        while let Some((start, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }

            let mut end = start + c.len_utf8();

            if is_word_char(c) {
                while let Some(&(i, next)) = chars.peek() {
                    let next_end = i + next.len_utf8();
                    let joins = is_word_char(next)
                        || (is_joiner(next)
                            && text[next_end..].chars().next().is_some_and(is_word_char));
                    if !joins {
                        break;
                    }
                    end = next_end;
                    chars.next();
                }
            }

            emit(&text[start..end], pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<&str> {
        let mut out = Vec::new();
        WordTokenizer::new().tokenize(input, |text, _| out.push(text));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("tamurt"), ["tamurt"]);
    }

    #[test]
    fn whitespace_variants_split() {
        assert_eq!(collect("a b\tc\nd\r\ne"), ["a", "b", "c", "d", "e"]);
        assert_eq!(collect("  awal   "), ["awal"]);
    }

    #[test]
    fn punctuation_is_split_off() {
        assert_eq!(
            collect("Tamurt, taqbaylit!"),
            ["Tamurt", ",", "taqbaylit", "!"]
        );
        assert_eq!(collect("«awal»"), ["«", "awal", "»"]);
        assert_eq!(collect("(axxam)."), ["(", "axxam", ")", "."]);
    }

    #[test]
    fn internal_hyphen_joins() {
        assert_eq!(collect("Axxam-nni."), ["Axxam-nni", "."]);
        assert_eq!(collect("a-b-c"), ["a-b-c"]);
    }

    #[test]
    fn dangling_hyphen_is_separate() {
        assert_eq!(collect("nni- awal"), ["nni", "-", "awal"]);
        assert_eq!(collect("-nni"), ["-", "nni"]);
        assert_eq!(collect("a--b"), ["a", "-", "-", "b"]);
    }

    #[test]
    fn internal_apostrophe_joins() {
        assert_eq!(collect("d'argaz"), ["d'argaz"]);
        assert_eq!(collect("d’argaz"), ["d’argaz"]);
        assert_eq!(collect("'awal'"), ["'", "awal", "'"]);
    }

    #[test]
    fn combining_marks_stay_in_word() {
        assert_eq!(collect("d\u{0323}unit"), ["d\u{0323}unit"]);
    }

    #[test]
    fn diacritic_letters_are_word_chars() {
        assert_eq!(collect("ɣer ḍḍunit ččina"), ["ɣer", "ḍḍunit", "ččina"]);
    }

    #[test]
    fn digits_are_word_chars() {
        assert_eq!(collect("2024 aseggas"), ["2024", "aseggas"]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert!(collect(" \n\t ").is_empty());
    }

    #[test]
    fn positions_are_sequential() {
        let mut positions = Vec::new();
        WordTokenizer::new().tokenize("a, b. c", |_, pos| positions.push(pos));
        assert_eq!(positions, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("axxam-nni, tamurt");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        WordTokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn internal_period_and_slash_join() {
        assert_eq!(collect("tamurt.taqbaylit"), ["tamurt.taqbaylit"]);
        assert_eq!(collect("ayen/ayen"), ["ayen/ayen"]);
        assert_eq!(collect("3.14 a/b/c"), ["3.14", "a/b/c"]);
    }

    #[test]
    fn trailing_period_and_slash_split() {
        assert_eq!(collect("tamurt.taqbaylit."), ["tamurt.taqbaylit", "."]);
        assert_eq!(collect("ayen/ awal"), ["ayen", "/", "awal"]);
        assert_eq!(collect("a. b"), ["a", ".", "b"]);
        assert_eq!(collect("a./b"), ["a", ".", "/", "b"]);
    }

    #[test]
    fn splitting_on_line_breaks_is_invisible() {
        let lines = ["Axxam-nni.", "Tamurt, taqbaylit!", "«Ḍḍunit»"];
        let joined = lines.join("\n");

        let whole = collect(&joined);
        let pieces: Vec<&str> = lines.iter().flat_map(|l| collect(l)).collect();
        assert_eq!(whole, pieces);
    }
}
