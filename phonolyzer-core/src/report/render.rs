//! Console and CSV rendering of report rows.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use phonolyzer_types::ReportRow;

use crate::error::ReportWriteError;

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 3] = ["Pattern", "Frequency", "Example"];

/// Writes the human-readable listing.
///
/// ```text
///
/// Analysis of file: corpus.txt
///
/// CVCVC: 812 (e.g., 'tamurt')
/// CVC: 640 (e.g., 'ass')
/// ```
pub fn render_console<W: Write>(source: &str, rows: &[ReportRow], mut out: W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Analysis of file: {source}")?;
    writeln!(out)?;
    for row in rows {
        writeln!(out, "{row}")?;
    }
    out.flush()
}

/// Writes rows as CSV with a `Pattern,Frequency,Example` header.
pub fn write_csv<W: Write>(rows: &[ReportRow], out: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record([
            row.pattern.as_str(),
            row.frequency.to_string().as_str(),
            row.example.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates `path` and writes the CSV export to it.
///
/// # Errors
///
/// Returns [`ReportWriteError`] if the file cannot be created or written.
pub fn export_csv(path: impl AsRef<Path>, rows: &[ReportRow]) -> Result<(), ReportWriteError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ReportWriteError::new(path, e))?;
    write_csv(rows, file).map_err(|e| ReportWriteError::new(path, e))
}
