use csvstats_shared_kernel::{ColumnCount, ColumnName, RowCount};
use serde::Serialize;

use crate::stats::Summary;

/// Statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub name: ColumnName,
    pub summary: Summary,
}

impl ColumnReport {
    pub fn new(name: ColumnName, summary: Summary) -> Self {
        Self { name, summary }
    }
}

/// What the run found once the table was read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "columns", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// No data rows or no header fields.
    Empty,
    /// Rows exist but no column held a single number.
    NoNumericColumns,
    /// Numeric columns in header order.
    Columns(Vec<ColumnReport>),
}

/// Full result for one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub file: String,
    pub rows: RowCount,
    pub columns: ColumnCount,
    pub outcome: ReportOutcome,
}

impl TableReport {
    /// Numeric column reports, empty unless the outcome is `Columns`.
    pub fn column_reports(&self) -> &[ColumnReport] {
        match &self.outcome {
            ReportOutcome::Columns(reports) => reports,
            ReportOutcome::Empty | ReportOutcome::NoNumericColumns => &[],
        }
    }
}
