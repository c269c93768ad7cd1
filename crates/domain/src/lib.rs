#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod numeric;
pub mod stats;
pub mod table;

pub use model::{Column, ColumnReport, ReportOutcome, TableReport};
pub use stats::{LinearSummarizer, Summarizer, Summary, summarize};
pub use table::Table;
