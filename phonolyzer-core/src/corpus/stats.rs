//! Statistics and CorpusStats.

/// A snapshot of one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Physical lines read from the source, blank ones included.
    pub lines_read: u64,
    /// Lines skipped because they were blank after trimming.
    pub blank_lines: u64,
    /// Number of batches aggregated.
    pub batches: u64,
    /// Tokens produced by the tokenizer.
    pub tokens: u64,
    /// Tokens that normalized to a non-empty word.
    pub words: u64,
    /// Tokens that normalized to nothing (punctuation, digits, foreign script).
    pub discarded: u64,
    /// Distinct CV patterns.
    pub distinct_patterns: usize,
}

impl CorpusStats {
    /// Share of tokens that survived normalization, in `0.0..=1.0`.
    pub fn word_ratio(&self) -> f64 {
        if self.tokens == 0 {
            0.0
        } else {
            self.words as f64 / self.tokens as f64
        }
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} lines ({} blank) in {} batches, {} tokens, {} words, {} discarded, {} patterns",
            self.lines_read,
            self.blank_lines,
            self.batches,
            self.tokens,
            self.words,
            self.discarded,
            self.distinct_patterns
        )
    }
}
