// crates/shared-kernel/src/value_objects/mod.rs
pub mod column_name;
pub mod counts;

pub use column_name::ColumnName;
pub use counts::{ColumnCount, RowCount};
