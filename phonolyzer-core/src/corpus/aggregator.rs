//! Token-to-table aggregation.

use crate::analyzer::encoder::encode_into;
use crate::analyzer::normalizer::WordNormalizer;
use crate::analyzer::tokenizer::WordTokenizer;
use crate::corpus::stats::CorpusStats;
use crate::corpus::table::PatternTable;

/// Accumulates CV pattern frequencies from raw text.
///
/// Owns the [`PatternTable`] until [`finish`](Self::finish) hands it over.
/// Scratch buffers are reused across tokens, so steady-state aggregation only
/// allocates for the example words it keeps.
pub struct CorpusAggregator {
    table: PatternTable,
    normalizer: WordNormalizer,
    tokenizer: WordTokenizer,
    word_buf: String,
    pattern_buf: String,
    batch_buf: String,
    tokens: u64,
    discarded: u64,
    batches: u64,
}

impl Default for CorpusAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self {
            table: PatternTable::new(),
            normalizer: WordNormalizer::new(),
            tokenizer: WordTokenizer::new(),
            word_buf: String::with_capacity(64),
            pattern_buf: String::with_capacity(64),
            batch_buf: String::new(),
            tokens: 0,
            discarded: 0,
            batches: 0,
        }
    }

    /// Tokenizes `text` and records every token that survives normalization.
    pub fn add_text(&mut self, text: &str) {
        let tokenizer = self.tokenizer;
        tokenizer.tokenize(text, |token, _| {
            self.add_word(token);
        });
    }

    /// Records a single raw token.
    ///
    /// Returns `false` if the token normalized to nothing.
    pub fn add_word(&mut self, raw: &str) -> bool {
        self.tokens += 1;
        self.normalizer.normalize_into(raw, &mut self.word_buf);
        if self.word_buf.is_empty() {
            self.discarded += 1;
            return false;
        }
        encode_into(&self.word_buf, &mut self.pattern_buf);
        self.table.record(&self.pattern_buf, self.word_buf.clone());
        true
    }

    /// Aggregates one batch of lines.
    ///
    /// Lines are joined with line breaks, so no token spans two lines.
    pub fn add_batch<S: AsRef<str>>(&mut self, lines: &[S]) {
        let mut text = std::mem::take(&mut self.batch_buf);
        text.clear();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }

        self.add_text(&text);
        self.batches += 1;
        self.batch_buf = text;
    }

    /// Read-only view of the table built so far.
    #[inline(always)]
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Returns aggregation statistics. Line counts are left at zero; they
    /// belong to whoever reads the source.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            batches: self.batches,
            tokens: self.tokens,
            words: self.table.total_words(),
            discarded: self.discarded,
            distinct_patterns: self.table.len(),
            ..CorpusStats::default()
        }
    }

    /// Consumes the aggregator and returns the finished table.
    pub fn finish(self) -> PatternTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_two_lines() {
        let mut agg = CorpusAggregator::new();
        agg.add_batch(&["Axxam-nni.", "Tamurt, taqbaylit!"]);

        let stats = agg.stats();
        assert_eq!(stats.tokens, 6);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.discarded, 3);
        assert_eq!(stats.batches, 1);

        let table = agg.finish();
        assert_eq!(table.get("VCCVCCCV").unwrap().examples(), ["axxamnni"]);
        assert_eq!(table.get("CVCVCC").unwrap().examples(), ["tamurt"]);
        assert_eq!(table.get("CVCCVCCVC").unwrap().examples(), ["taqbaylit"]);
        assert_eq!(table.total_words(), 3);
    }

    #[test]
    fn interior_period_and_slash_stay_in_one_word() {
        let mut agg = CorpusAggregator::new();
        agg.add_text("tamurt.taqbaylit ayen/ayen");

        let stats = agg.stats();
        assert_eq!(stats.tokens, 2);
        assert_eq!(stats.words, 2);

        let words: Vec<&str> = agg
            .table()
            .iter()
            .flat_map(|(_, e)| e.examples().iter().map(String::as_str))
            .collect();
        assert_eq!(words, ["tamurttaqbaylit", "ayenayen"]);
    }

    #[test]
    fn same_pattern_accumulates() {
        let mut agg = CorpusAggregator::new();
        agg.add_text("ma ta ka");
        let table = agg.finish();
        assert_eq!(table.len(), 1);
        assert_eq!(table.count("CV"), 3);
        assert_eq!(table.get("CV").unwrap().examples(), ["ma", "ta", "ka"]);
    }

    #[test]
    fn non_words_are_excluded() {
        let mut agg = CorpusAggregator::new();
        agg.add_text("... 2024 -- ⵜⴰⵎⵓⵔⵜ «»");
        assert!(agg.table().is_empty());
        assert_eq!(agg.stats().words, 0);
        assert_eq!(agg.stats().discarded, agg.stats().tokens);
    }

    #[test]
    fn add_word_reports_outcome() {
        let mut agg = CorpusAggregator::new();
        assert!(agg.add_word("Awal,"));
        assert!(!agg.add_word("!!"));
        assert_eq!(agg.table().count("VCVC"), 1);
        assert_eq!(agg.stats().tokens, 2);
    }

    #[test]
    fn batch_split_is_invisible() {
        let lines = ["Axxam-nni d ameqqran.", "Tamurt, taqbaylit!", "ma ta ka"];

        let mut whole = CorpusAggregator::new();
        whole.add_batch(&lines);

        let mut split = CorpusAggregator::new();
        for line in &lines {
            split.add_batch(std::slice::from_ref(line));
        }

        let a = whole.finish();
        let b = split.finish();
        assert_eq!(a.len(), b.len());
        for ((pa, ea), (pb, eb)) in a.iter().zip(b.iter()) {
            assert_eq!(pa, pb);
            assert_eq!(ea, eb);
        }
    }

    #[test]
    fn counts_match_example_lengths() {
        let mut agg = CorpusAggregator::new();
        agg.add_text("Azul fell-awen! Ansuf yis-wen deg tmurt n leqbayel.");
        for (_, entry) in agg.table() {
            assert_eq!(entry.count(), entry.examples().len() as u64);
        }
    }
}
