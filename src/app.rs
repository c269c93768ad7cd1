use crate::config::Config;
use crate::presentation;
use anyhow::{Context, Result, bail};
use csvstats_domain::LinearSummarizer;
use csvstats_infra::CsvTableSource;
use csvstats_usecase::SummarizeTable;
use std::io::Write;

/// Summarise the configured file and write the report to stdout.
pub fn run(config: &Config) -> Result<()> {
    if !config.path.is_file() {
        bail!("file not found: {}", config.path.display());
    }

    let source = CsvTableSource::default();
    let summarizer = LinearSummarizer;
    let report = SummarizeTable::new(&source, &summarizer)
        .run(&config.read_plan())
        .with_context(|| format!("failed to summarize {}", config.path.display()))?;

    log::info!("{} numeric column(s) reported", report.column_reports().len());

    let rendered = presentation::render(&report, config.format).context("failed to render report")?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes()).context("failed to write report")?;
    stdout.flush().context("failed to write report")?;
    Ok(())
}
