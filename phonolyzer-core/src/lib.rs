//! CV syllable-shape analysis for Kabyle text corpora.
//!
//! The pipeline runs strictly left to right:
//!
//! ```text
//! raw text → tokens → normalized words → CV patterns → frequency table → ranked report
//! ```
//!
//! - [`analyzer`]: alphabet, tokenizer, normalizer, encoder
//! - [`corpus`]: batched reading and frequency aggregation
//! - [`report`]: ranking, example selection, console/CSV output
//!
//! Everything is single-threaded. The aggregator owns the table until it is
//! handed to the report stage by value.

pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod report;

use std::path::Path;

use phonolyzer_types::{AnalyzerConfig, ReportRow};

pub use corpus::{aggregate, CorpusStats, PatternTable};
pub use error::{CorpusReadError, ReportWriteError};
pub use report::ReportGenerator;

/// Outcome of a full analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Ranked rows, at most `top_n` of them.
    pub rows: Vec<ReportRow>,
    /// Aggregation statistics.
    pub stats: CorpusStats,
}

/// Aggregates the corpus at `path` and builds its ranked report.
///
/// # Errors
///
/// Returns [`CorpusReadError`] if the corpus cannot be read.
pub fn analyze(path: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<Analysis, CorpusReadError> {
    let (table, stats) = aggregate(path, config.batch_size)?;
    let rows = ReportGenerator::from_config(config).build(&table, config.top_n);
    Ok(Analysis { rows, stats })
}
