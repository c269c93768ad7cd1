// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of data rows in a table, header excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowCount(usize);

impl RowCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for RowCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of columns, taken from the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnCount(usize);

impl ColumnCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for ColumnCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(RowCount::default().value(), 0);
        assert_eq!(ColumnCount::default().value(), 0);
    }

    #[test]
    fn counts_serialize_transparently() {
        let json = serde_json::to_string(&RowCount::new(12)).unwrap();
        assert_eq!(json, "12");
        assert_eq!(ColumnCount::from(3).to_string(), "3");
    }
}
