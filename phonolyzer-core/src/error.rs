//! Error types for corpus reading and report export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The corpus could not be opened, read, or decoded as UTF-8.
#[derive(Debug, Error)]
#[error("failed to read corpus '{}': {source}", .path.display())]
pub struct CorpusReadError {
    /// Path of the corpus file.
    pub path: PathBuf,
    /// Underlying I/O failure.
    #[source]
    pub source: io::Error,
}

impl CorpusReadError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// The CSV report could not be created or written.
#[derive(Debug, Error)]
#[error("failed to write report '{}': {source}", .path.display())]
pub struct ReportWriteError {
    /// Destination path of the report.
    pub path: PathBuf,
    /// Underlying CSV or I/O failure.
    #[source]
    pub source: csv::Error,
}

impl ReportWriteError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn corpus_error_names_path_and_cause() {
        let err = CorpusReadError::new(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("no such file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn report_error_wraps_io() {
        let err = ReportWriteError::new(
            "/nope/out.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/nope/out.csv"));
        assert!(err.source().is_some());
    }
}
