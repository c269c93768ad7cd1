//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: load a table through a [`TableSource`](csvstats_ports::TableSource)
//!   and summarise each numeric column with a [`Summarizer`](csvstats_domain::Summarizer)
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::SummarizeTable;
