// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use csvstats_ports::{DEFAULT_SAMPLE_SIZE, ReadPlan};
use csvstats_shared_kernel::PresentationError;
use derive_builder::Builder;
use std::path::PathBuf;

/// Resolved run settings, independent of how they were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub path: PathBuf,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub delimiter: Option<u8>,
    #[builder(default = "DEFAULT_SAMPLE_SIZE")]
    pub sample_size: usize,
    #[builder(default)]
    pub strict: bool,
}

impl Config {
    pub fn read_plan(&self) -> ReadPlan {
        ReadPlan {
            path: self.path.clone(),
            delimiter: self.delimiter,
            sample_size: self.sample_size,
            strict: self.strict,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .path(args.path)
            .format(args.output.format)
            .delimiter(args.input.delimiter)
            .sample_size(args.input.sample_size)
            .strict(args.input.strict)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
