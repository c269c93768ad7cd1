//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`table_source`]: loading a delimited file into a [`Table`](csvstats_domain::Table)
//!
//! The use case depends on these traits only, never on the adapters in
//! `csvstats_infra`.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod table_source;

pub use table_source::{DEFAULT_SAMPLE_SIZE, ReadPlan, TableSource};
