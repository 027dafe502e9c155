//! Frequency ranking and example selection.

use std::num::NonZeroUsize;

use phonolyzer_types::{AnalyzerConfig, CvPattern, ReportRow};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::corpus::{PatternEntry, PatternTable};

/// Placeholder for a pattern with no recorded words. The table never
/// produces one, since every entry is created by recording a word.
pub const NO_EXAMPLE: &str = "No example";

/// Orders patterns by descending frequency, keeping at most `top_n`.
///
/// The sort is stable over the table's first-seen order, so patterns with
/// equal counts appear in the order they were first encountered.
pub fn rank(table: &PatternTable, top_n: NonZeroUsize) -> Vec<(&CvPattern, &PatternEntry)> {
    let mut ranked: Vec<_> = table.iter().collect();
    ranked.sort_by(|a, b| b.1.count().cmp(&a.1.count()));
    ranked.truncate(top_n.get());
    ranked
}

/// Builds report rows, drawing one example per pattern.
///
/// Owns a seeded generator: two generators with the same seed produce the
/// same rows for the same table and `top_n`. Draws happen in rank order, so
/// the sequence of rows also determines which random values each row gets.
pub struct ReportGenerator {
    rng: ChaCha8Rng,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(phonolyzer_types::DEFAULT_SEED)
    }
}

impl ReportGenerator {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator from the analysis configuration.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.seed)
    }

    /// Picks one example uniformly from `examples`.
    pub fn pick<'e>(&mut self, examples: &'e [String]) -> &'e str {
        examples
            .choose(&mut self.rng)
            .map_or(NO_EXAMPLE, String::as_str)
    }

    /// Ranks `table` and selects an example for each of the top rows.
    pub fn build(&mut self, table: &PatternTable, top_n: NonZeroUsize) -> Vec<ReportRow> {
        rank(table, top_n)
            .into_iter()
            .map(|(pattern, entry)| {
                let example = self.pick(entry.examples());
                ReportRow::new(pattern.clone(), entry.count(), example)
            })
            .collect()
    }
}
