//! Core types shared by the phonotactic analyzer crates.
//!
//! Keeping these separate from the pipeline means the CLI and the core agree on
//! one representation of a CV pattern and a report row, without the CLI
//! having to pull in the analysis internals.

#![warn(missing_docs)]

use core::borrow::Borrow;
use core::fmt;
use core::num::NonZeroUsize;

/// Default number of patterns shown in a report.
pub const DEFAULT_TOP_N: usize = 22;

/// Default seed for example selection.
pub const DEFAULT_SEED: u64 = 42;

/// Phonological class of a single letter.
///
/// `#[repr(u8)]` keeps the symbol one byte wide; the discriminant is the ASCII
/// code of its pattern character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Any permitted letter that is not a vowel.
    Consonant = b'C',
    /// One of the five vowels.
    Vowel = b'V',
}

impl Symbol {
    /// Character emitted for this symbol in a CV pattern.
    #[must_use]
    #[inline(always)]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Parses a pattern character back into a symbol.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Symbol::Consonant),
            'V' => Some(Symbol::Vowel),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A consonant/vowel shape such as `"CVCCVC"`.
///
/// Holds exactly one `C` or `V` per letter of the word it was derived from.
/// Many words share one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct CvPattern(String);

impl CvPattern {
    /// Builds a pattern from a sequence of symbols.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        Self(symbols.into_iter().map(Symbol::as_char).collect())
    }

    /// Wraps a string that is already made of `C`/`V` characters.
    ///
    /// Returns `None` if any other character is present.
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().all(|c| Symbol::from_char(c).is_some()) {
            Some(Self(s.to_owned()))
        } else {
            None
        }
    }

    /// Returns the pattern as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (equals the letter count of the source word).
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        // C and V are ASCII, so bytes == symbols.
        self.0.len()
    }

    /// Returns `true` for the pattern of an empty word.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for CvPattern {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CvPattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CvPattern> for String {
    #[inline(always)]
    fn from(p: CvPattern) -> Self {
        p.0
    }
}

impl fmt::Display for CvPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of a ranked report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// The CV pattern.
    pub pattern: CvPattern,
    /// How many words in the corpus had this pattern.
    pub frequency: u64,
    /// One word drawn from the pattern's examples.
    pub example: String,
}

impl ReportRow {
    /// Creates a new report row.
    pub fn new(pattern: CvPattern, frequency: u64, example: impl Into<String>) -> Self {
        Self {
            pattern,
            frequency,
            example: example.into(),
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (e.g., '{}')",
            self.pattern, self.frequency, self.example
        )
    }
}

/// Analysis configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Maximum number of patterns in the report.
    /// Default: 22
    pub top_n: NonZeroUsize,
    /// Number of non-blank lines aggregated per batch.
    /// `None` reads the whole corpus as a single batch.
    pub batch_size: Option<NonZeroUsize>,
    /// Seed for the example-selection generator.
    /// Default: 42
    pub seed: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: NonZeroUsize::new(DEFAULT_TOP_N).unwrap_or(NonZeroUsize::MIN),
            batch_size: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl AnalyzerConfig {
    /// Returns a copy with a different report size.
    pub const fn with_top_n(mut self, top_n: NonZeroUsize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Returns a copy with line batching enabled.
    pub const fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Returns a copy with a different seed.
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_size_is_1_byte() {
        assert_eq!(size_of::<Symbol>(), 1);
    }

    #[test]
    fn symbol_chars() {
        assert_eq!(Symbol::Consonant.as_char(), 'C');
        assert_eq!(Symbol::Vowel.as_char(), 'V');
        assert_eq!(Symbol::from_char('V'), Some(Symbol::Vowel));
        assert_eq!(Symbol::from_char('x'), None);
    }

    #[test]
    fn pattern_from_symbols() {
        let p = CvPattern::from_symbols([Symbol::Consonant, Symbol::Vowel, Symbol::Consonant]);
        assert_eq!(p.as_str(), "CVC");
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn pattern_parse_rejects_other_chars() {
        assert!(CvPattern::parse("CVCV").is_some());
        assert!(CvPattern::parse("CVX").is_none());
        assert!(CvPattern::parse("cv").is_none());
    }

    #[test]
    fn pattern_borrows_as_str() {
        use std::collections::HashMap;
        let mut m = HashMap::new();
        m.insert(CvPattern::parse("CV").unwrap(), 1);
        assert_eq!(m.get("CV"), Some(&1));
    }

    #[test]
    fn report_row_display() {
        let row = ReportRow::new(CvPattern::parse("CVCVCC").unwrap(), 7, "tamurt");
        assert_eq!(row.to_string(), "CVCVCC: 7 (e.g., 'tamurt')");
    }

    #[test]
    fn config_defaults() {
        let c = AnalyzerConfig::default();
        assert_eq!(c.top_n.get(), 22);
        assert_eq!(c.batch_size, None);
        assert_eq!(c.seed, 42);
    }

    #[test]
    fn config_builders() {
        let c = AnalyzerConfig::default()
            .with_top_n(NonZeroUsize::new(5).unwrap())
            .with_batch_size(NonZeroUsize::new(100).unwrap())
            .with_seed(7);
        assert_eq!(c.top_n.get(), 5);
        assert_eq!(c.batch_size.map(NonZeroUsize::get), Some(100));
        assert_eq!(c.seed, 7);
    }
}
