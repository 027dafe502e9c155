//! Pattern frequency table.

use indexmap::IndexMap;
use phonolyzer_types::{CvPattern, Symbol};
use rustc_hash::FxBuildHasher;

/// Occurrences of one CV pattern.
///
/// `count` always equals `examples.len()`: both grow together in
/// [`PatternTable::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternEntry {
    count: u64,
    examples: Vec<String>,
}

impl PatternEntry {
    #[inline(always)]
    fn push(&mut self, word: String) {
        self.count += 1;
        self.examples.push(word);
    }

    /// Number of words observed with this pattern.
    #[inline(always)]
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Every word observed with this pattern, in corpus order.
    #[inline(always)]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}

/// Mapping from CV pattern to its count and example words.
///
/// Iteration order is first-seen order of each pattern, which the report
/// stage relies on to break frequency ties deterministically.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    entries: IndexMap<CvPattern, PatternEntry, FxBuildHasher>,
    total_words: u64,
}

impl PatternTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one word under its already-encoded pattern.
    ///
    /// `pattern` must consist of `C`/`V` characters only.
    pub fn record(&mut self, pattern: &str, word: String) {
        debug_assert!(
            pattern.chars().all(|c| Symbol::from_char(c).is_some()),
            "table: pattern {pattern:?} is not a CV string"
        );

        if let Some(entry) = self.entries.get_mut(pattern) {
            entry.push(word);
        } else {
            let key = CvPattern::from_symbols(pattern.chars().filter_map(Symbol::from_char));
            self.entries.entry(key).or_default().push(word);
        }
        self.total_words += 1;
    }

    /// Looks up a pattern.
    #[inline]
    pub fn get(&self, pattern: &str) -> Option<&PatternEntry> {
        self.entries.get(pattern)
    }

    /// Frequency of a pattern, `0` if never seen.
    #[inline]
    pub fn count(&self, pattern: &str) -> u64 {
        self.get(pattern).map_or(0, PatternEntry::count)
    }

    /// Number of distinct patterns.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no word has been recorded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of words recorded across all patterns.
    #[inline(always)]
    #[must_use]
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Iterates patterns in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&CvPattern, &PatternEntry)> + '_ {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PatternTable {
    type Item = (&'a CvPattern, &'a PatternEntry);
    type IntoIter = indexmap::map::Iter<'a, CvPattern, PatternEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
