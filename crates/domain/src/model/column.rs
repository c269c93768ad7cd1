use csvstats_shared_kernel::ColumnName;

use crate::numeric;

/// One vertical slice of a table: a name and the raw cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: ColumnName,
    cells: Vec<String>,
}

impl Column {
    pub fn new(name: ColumnName, cells: Vec<String>) -> Self {
        Self { name, cells }
    }

    pub fn name(&self) -> &ColumnName {
        &self.name
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Parsed numbers of this column, non-numeric and NaN cells skipped.
    pub fn numeric_values(&self) -> impl Iterator<Item = f64> + '_ {
        numeric::numeric_values(self.cells.iter().map(String::as_str))
    }
}
