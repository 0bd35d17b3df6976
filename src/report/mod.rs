//! Run summary rendering.
mod json;
mod lines;
mod summary;


pub use json::render_json;
pub use lines::summary_lines;
pub use summary::RunSummary;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::ResultAccumulator;

/// Renders the text report for a finished run.
///
/// Pure over the accumulator: the same input always yields the same text.
#[must_use]
pub fn summarize(accumulator: &ResultAccumulator) -> String {
    summary_lines(&RunSummary::from_accumulator(accumulator)).join("\n")
}

/// Renders `summary` in the requested output format.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn render_report(summary: &RunSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(summary_lines(summary).join("\n")),
        OutputFormat::Json => render_json(summary),
    }
}
