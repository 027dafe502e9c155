//! Corpus Throughput Benchmark
//!
//! Measures the analysis pipeline on a large text file, such as a dump of
//! Kabyle Wikipedia or a news corpus, to get realistic throughput numbers.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: Tokenize, then clean every token into a canonical word
//! 2. **Encode**: Normalize plus CV encoding of every surviving word
//! 3. **Aggregate**: The full batched pass that builds the pattern table
//!
//! ## Usage
//!
//! ```bash
//! # Whole file as one batch
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # 10_000-line batches
//! ./target/release/corpus_bench /path/to/corpus.txt 10000
//! ```
//!
//! ## Example Output
//!
//! ```text
//! aggregate   1.204 s    83.1 MiB/s    18402117 words   15.28 M words/s
//! ```
//!
//! Build in release mode and use an input of at least a few tens of MB for
//! stable numbers.

use std::env;
use std::fs;
use std::io::{self, Cursor};
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use phonolyzer_core::analyzer::encoder::encode_into;
use phonolyzer_core::analyzer::normalizer::WordNormalizer;
use phonolyzer_core::analyzer::tokenizer::WordTokenizer;
use phonolyzer_core::corpus::aggregate_reader;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [batch-size]");
        std::process::exit(1);
    }

    let path = &args[1];
    let batch_size = args
        .get(2)
        .and_then(|s| s.parse::<usize>().ok())
        .and_then(NonZeroUsize::new);

    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    println!(
        "{}: {:.1} MiB, batch size {}",
        path,
        mib(input.len()),
        batch_size.map_or_else(|| "whole file".to_owned(), |n| n.to_string())
    );

    let tokenizer = WordTokenizer::new();
    let normalizer = WordNormalizer::new();
    let mut word = String::with_capacity(64);
    let mut pattern = String::with_capacity(64);

    let (elapsed, words) = time_runs(|| {
        let mut words = 0u64;
        tokenizer.tokenize(input, |token, _| {
            normalizer.normalize_into(token, &mut word);
            words += u64::from(!word.is_empty());
        });
        Ok(words)
    })?;
    report("normalize", input.len(), elapsed, words);

    let (elapsed, words) = time_runs(|| {
        let mut words = 0u64;
        tokenizer.tokenize(input, |token, _| {
            normalizer.normalize_into(token, &mut word);
            if !word.is_empty() {
                encode_into(&word, &mut pattern);
                words += 1;
            }
        });
        std::hint::black_box(&pattern);
        Ok(words)
    })?;
    report("encode", input.len(), elapsed, words);

    let (elapsed, words) = time_runs(|| {
        let (table, stats) = aggregate_reader(Cursor::new(input), batch_size)?;
        std::hint::black_box(table);
        Ok(stats.words)
    })?;
    report("aggregate", input.len(), elapsed, words);

    Ok(())
}

/// Runs `pass` once untimed, then returns its mean time over the measured
/// runs together with the word count of the last run.
fn time_runs<F>(mut pass: F) -> io::Result<(Duration, u64)>
where
    F: FnMut() -> io::Result<u64>,
{
    for _ in 0..WARMUP_RUNS {
        std::hint::black_box(pass()?);
    }

    let mut total = Duration::ZERO;
    let mut words = 0;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        words = std::hint::black_box(pass()?);
        total += start.elapsed();
    }

    Ok((total / MEASURE_RUNS as u32, words))
}

fn report(stage: &str, input_bytes: usize, elapsed: Duration, words: u64) {
    let secs = elapsed.as_secs_f64();
    println!(
        "{:<10} {:>6.3} s  {:>7.1} MiB/s  {:>10} words  {:>6.2} M words/s",
        stage,
        secs,
        mib(input_bytes) / secs,
        words,
        words as f64 / secs / 1e6
    );
}

fn mib(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
