use csvstats_shared_kernel::{ColumnCount, ColumnName, RowCount};

use crate::model::Column;

/// A delimited file held in memory: one header record plus data rows.
///
/// Rows may be ragged; see [`Table::columns`] for how that is reconciled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> RowCount {
        RowCount::new(self.rows.len())
    }

    pub fn column_count(&self) -> ColumnCount {
        ColumnCount::new(self.headers.len())
    }

    /// Nothing to summarise: no data rows or no header fields.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }

    /// Transpose rows into header-ordered columns.
    ///
    /// Short rows are padded with blank cells; fields past the last header
    /// are dropped.
    pub fn columns(&self) -> Vec<Column> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let cells = self
                    .rows
                    .iter()
                    .map(|row| row.get(idx).cloned().unwrap_or_default())
                    .collect();
                Column::new(ColumnName::from_header(idx, Some(header)), cells)
            })
            .collect()
    }
}
