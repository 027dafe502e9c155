//! Corpus aggregation.
//!
//! Reads a corpus in line batches and builds the pattern frequency table:
//!
//! ```text
//! source ──BatchReader──▶ lines ──CorpusAggregator──▶ PatternTable
//!                                   tokenize → normalize → encode → record
//! ```
//!
//! Batching bounds how much raw text is held at once. It never changes the
//! result: lines are trimmed and joined with line breaks, and no token spans
//! a line break, so every batch size yields the same counts, the same
//! example order, and the same first-seen pattern order.

mod aggregator;
mod reader;
mod stats;
mod table;

pub use aggregator::CorpusAggregator;
pub use reader::BatchReader;
pub use stats::CorpusStats;
pub use table::{PatternEntry, PatternTable};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;

use log::{debug, info};

use crate::error::CorpusReadError;

/// Aggregates any buffered source.
///
/// Returns the finished table and its statistics.
///
/// # Errors
///
/// Returns the first read or decoding failure; no partial table is returned.
pub fn aggregate_reader<R: BufRead>(
    reader: R,
    batch_size: Option<NonZeroUsize>,
) -> io::Result<(PatternTable, CorpusStats)> {
    let mut batches = BatchReader::new(reader, batch_size);
    let mut aggregator = CorpusAggregator::new();

    while let Some(batch) = batches.next_batch()? {
        aggregator.add_batch(&batch);
        debug!(
            "batch {}: {} lines, {} patterns so far",
            aggregator.stats().batches,
            batch.len(),
            aggregator.table().len()
        );
    }

    let mut stats = aggregator.stats();
    stats.lines_read = batches.lines_read();
    stats.blank_lines = batches.blank_lines();

    Ok((aggregator.finish(), stats))
}

/// Aggregates the UTF-8 text file at `path`.
///
/// # Errors
///
/// Returns [`CorpusReadError`] if the file cannot be opened, read, or decoded.
pub fn aggregate(
    path: impl AsRef<Path>,
    batch_size: Option<NonZeroUsize>,
) -> Result<(PatternTable, CorpusStats), CorpusReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CorpusReadError::new(path, e))?;

    let (table, stats) = aggregate_reader(BufReader::new(file), batch_size)
        .map_err(|e| CorpusReadError::new(path, e))?;

    info!(
        "{}: {} ({:.1}% of tokens kept)",
        path.display(),
        stats,
        stats.word_ratio() * 100.0
    );
    Ok((table, stats))
}
