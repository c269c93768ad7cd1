// src/presentation.rs
use crate::options::OutputFormat;
use csvstats_domain::{ColumnReport, ReportOutcome, TableReport};
use csvstats_shared_kernel::Result;
use std::fmt::Write;

const RULE_WIDTH: usize = 33;

/// Render `report` in the requested format. The result ends with a newline.
pub fn render(report: &TableReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}

pub fn render_table(report: &TableReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File: {}", report.file);
    let _ = writeln!(out, "Rows: {}", report.rows);
    let _ = writeln!(out, "Columns: {}", report.columns);
    out.push('\n');

    match &report.outcome {
        ReportOutcome::Empty => out.push_str("(Empty file)\n"),
        ReportOutcome::NoNumericColumns => out.push_str("No numeric columns detected.\n"),
        ReportOutcome::Columns(columns) => {
            out.push_str("Column summaries:\n");
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
            write_column_lines(&mut out, columns);
        }
    }
    out
}

fn write_column_lines(out: &mut String, columns: &[ColumnReport]) {
    let name_width = columns.iter().map(|c| c.name.width()).max().unwrap_or(0);
    for column in columns {
        let pad = " ".repeat(name_width - column.name.width() + 2);
        let (min, max, mean) = column.summary.as_tuple();
        let _ = writeln!(
            out,
            "{}{pad}min={}, max={}, mean={}",
            column.name,
            format_value(min),
            format_value(max),
            format_value(mean)
        );
    }
}

/// Up to six decimals with trailing zeros and a dangling `.` removed; `NA` when not finite.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "NA".to_string();
    }
    let text = format!("{value:.6}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
