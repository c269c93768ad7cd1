// crates/ports/src/table_source.rs
use std::path::PathBuf;

use csvstats_domain::Table;
use csvstats_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Bytes read from the head of a file when guessing its dialect.
pub const DEFAULT_SAMPLE_SIZE: usize = 4096;

/// Input parameters controlling how a file is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadPlan {
    pub path: PathBuf,
    /// Forced field separator; `None` means sniff it from the sample.
    pub delimiter: Option<u8>,
    pub sample_size: usize,
    /// Abort on the first undecodable record instead of skipping it.
    pub strict: bool,
}

impl ReadPlan {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
            strict: false,
        }
    }
}

/// Port for loading a delimited text file.
pub trait TableSource: Send + Sync {
    fn load(&self, plan: &ReadPlan) -> Result<Table>;
}
