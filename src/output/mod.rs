//! Output formatting module
//!
//! Provides text and JSON rendering of seed runs and fixture plans, plus
//! the progress lines printed while seeding.

mod formatter;
mod progress;

pub use formatter::{format_plan, OutputFormat, SummaryFormatter};
pub use progress::{progress, progress_to_stderr};
