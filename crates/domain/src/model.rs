pub mod column;
pub mod report;

pub use column::Column;
pub use report::{ColumnReport, ReportOutcome, TableReport};
