//! Kabyle Phonotactic Analyzer
//!
//! Computes the consonant/vowel patterns of the words in a text corpus and
//! prints the most frequent ones, or saves them as CSV.

use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use phonolyzer_core::report::{export_csv, render_console};
use phonolyzer_types::{AnalyzerConfig, DEFAULT_SEED};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "kab-phonolyzer",
    version,
    about = "Kabyle Phonotactic Analyzer: computes CV patterns from a text corpus."
)]
struct Args {
    /// Path to the UTF-8 text file to analyze
    file: PathBuf,

    /// Number of top patterns to display
    #[arg(short = 'n', default_value = "22")]
    n: NonZeroUsize,

    /// Number of lines per batch (default: whole file)
    #[arg(long = "batch-size")]
    batch_size: Option<NonZeroUsize>,

    /// Path to save results as CSV
    #[arg(long = "output")]
    output: Option<PathBuf>,

    /// Seed for picking example words
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Set logging level (default: RUST_LOG, else warn)
    #[arg(long = "log-level")]
    log_level: Option<LevelFilter>,
}

impl Args {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            top_n: self.n,
            batch_size: self.batch_size,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level);
    run(&args)
}

/// Set up stderr logging with timestamps
fn setup_logging(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // A logger may already be installed when embedded; keep going without ours.
    let _ = builder.try_init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.config();
    info!("analyzing {} with {:?}", args.file.display(), config);

    let analysis = phonolyzer_core::analyze(&args.file, &config)?;

    match &args.output {
        Some(path) => {
            export_csv(path, &analysis.rows)?;
            println!("Results saved to: {}", path.display());
        }
        None => {
            let source = args.file.display().to_string();
            render_console(&source, &analysis.rows, io::stdout().lock())
                .context("Failed to write results to stdout")?;
        }
    }

    Ok(())
}
