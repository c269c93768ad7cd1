// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dialect;
pub mod persistence;
pub mod table_source;

pub use dialect::{Dialect, DialectSniffer};
pub use table_source::CsvTableSource;
