//! Ranked report generation.
//!
//! - **Rank**: Orders patterns by frequency, ties by first-seen order
//! - **Generator**: Draws one example per ranked pattern from a seeded generator
//! - **Render**: Console listing or CSV export

mod rank;
mod render;

pub use rank::{rank, ReportGenerator, NO_EXAMPLE};
pub use render::{export_csv, render_console, write_csv, CSV_HEADER};
