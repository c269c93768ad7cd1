// crates/shared-kernel/src/value_objects/column_name.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name of a column.
///
/// Blank headers are replaced by a positional `col_<index>` label so that
/// every reported column has something to print.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnName(String);

impl ColumnName {
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Header text if it is non-empty, otherwise `col_<index>`.
    pub fn from_header(index: usize, header: Option<&str>) -> Self {
        match header {
            Some(h) if !h.is_empty() => Self::new(h),
            _ => Self(format!("col_{index}")),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width in characters, used to align report lines.
    #[inline]
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
