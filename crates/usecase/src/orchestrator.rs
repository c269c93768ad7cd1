use csvstats_domain::{Column, ColumnReport, ReportOutcome, Summarizer, Table, TableReport};
use csvstats_ports::{ReadPlan, TableSource};
use csvstats_shared_kernel::{ErrorContext, Result, path::display_name};

pub struct SummarizeTable<'a> {
    source: &'a dyn TableSource,
    summarizer: &'a dyn Summarizer,
}

impl<'a> SummarizeTable<'a> {
    pub fn new(source: &'a dyn TableSource, summarizer: &'a dyn Summarizer) -> Self {
        Self { source, summarizer }
    }

    pub fn run(&self, plan: &ReadPlan) -> Result<TableReport> {
        let table = self.source.load(plan)?;
        log::info!(
            "loaded {}: {} rows, {} columns",
            plan.path.display(),
            table.row_count(),
            table.column_count()
        );

        let outcome = if table.is_empty() { ReportOutcome::Empty } else { self.summarize_columns(&table)? };

        Ok(TableReport {
            file: display_name(&plan.path),
            rows: table.row_count(),
            columns: table.column_count(),
            outcome,
        })
    }

    fn summarize_columns(&self, table: &Table) -> Result<ReportOutcome> {
        let mut reports = Vec::new();
        for column in table.columns() {
            if let Some(report) = self.summarize_column(&column)? {
                reports.push(report);
            }
        }
        Ok(if reports.is_empty() { ReportOutcome::NoNumericColumns } else { ReportOutcome::Columns(reports) })
    }

    /// `None` for columns without a single number; those are left out of the report.
    fn summarize_column(&self, column: &Column) -> Result<Option<ColumnReport>> {
        let summary = self
            .summarizer
            .summarize(&mut column.numeric_values())
            .with_context(|| format!("summarizing column '{}'", column.name()));
        match summary {
            Ok(summary) => Ok(Some(ColumnReport::new(column.name().clone(), summary))),
            Err(err) if err.is_empty_input() => {
                log::debug!("skipping column '{}': no numeric values", column.name());
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
