use std::{
    io::{self, Read},
    path::Path,
};

use csv::{ByteRecord, ReaderBuilder, Terminator};
use csvstats_domain::Table;
use csvstats_ports::{ReadPlan, TableSource};
use csvstats_shared_kernel::{InfraResult, InfrastructureError, Result};

use crate::{
    dialect::{Dialect, DialectSniffer},
    persistence::FileReader,
};

/// [`TableSource`] backed by the `csv` crate with dialect sniffing.
///
/// The first non-blank record is the header. Record lengths may vary;
/// fields are trimmed. Blank lines after the header become empty rows.
#[derive(Debug, Clone, Default)]
pub struct CsvTableSource {
    sniffer: DialectSniffer,
}

impl CsvTableSource {
    pub fn new(sniffer: DialectSniffer) -> Self {
        Self { sniffer }
    }

    /// Dialect to read `plan.path` with: the forced delimiter, or one sniffed from `sample`.
    pub fn resolve_dialect(&self, plan: &ReadPlan, sample: &[u8]) -> Dialect {
        if let Some(delimiter) = plan.delimiter {
            return Dialect::with_delimiter(delimiter);
        }
        let truncated = sample.len() >= plan.sample_size;
        let dialect = self.sniffer.sniff_or_default(sample, truncated);
        log::debug!(
            "sniffed dialect for {}: delimiter={:?} quote={:?}",
            plan.path.display(),
            char::from(dialect.delimiter),
            char::from(dialect.quote)
        );
        dialect
    }

    fn read_table(&self, path: &Path, dialect: Dialect, line_feed: bool, strict: bool) -> InfraResult<Table> {
        let input = LastByte::new(FileReader::open_buffered(path)?);
        // Ending records on `\n` alone keeps each record's newline inside the
        // read that returns it, which the blank line recovery below relies on.
        // The `\r` of a CRLF pair is trimmed with the field.
        let terminator = if line_feed { Terminator::Any(b'\n') } else { Terminator::CRLF };
        let mut reader = ReaderBuilder::new()
            .delimiter(dialect.delimiter)
            .quote(dialect.quote)
            .terminator(terminator)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        let mut raw = ByteRecord::new();
        let mut record_no = 0_u64;
        // `csv` drops empty lines silently; they are recovered from the line
        // numbers the reader reports after each record.
        let mut line = reader.position().line();
        let mut last_gap = 0_u64;
        let mut last_was_row = false;
        while reader.read_byte_record(&mut raw).map_err(|err| parse_error(path, record_no + 1, &err))? {
            record_no += 1;
            let end = reader.position().line();
            let embedded = bytecount::count(raw.as_slice(), b'\n') as u64;
            last_gap = (end - line).saturating_sub(embedded);
            line = end;

            last_was_row = headers.is_some();
            if last_was_row {
                push_blank_rows(&mut rows, last_gap.saturating_sub(1));
            } else if is_blank(&raw) {
                continue;
            }
            let fields = match decode(&raw) {
                Ok(fields) => fields,
                Err(err) => {
                    let details = format!("invalid UTF-8: {err}");
                    if strict {
                        return Err(InfrastructureError::CsvParse { path: path.to_path_buf(), record: record_no, details });
                    }
                    log::warn!("skipping record {record_no} of {}: {details}", path.display());
                    continue;
                }
            };
            if headers.is_none() {
                headers = Some(fields);
            } else {
                rows.push(fields);
            }
        }

        if headers.is_some() {
            // An unterminated last record does not advance the line count, so
            // the empty line right before it is still owed.
            if last_was_row && last_gap > 0 && reader.get_ref().last != Some(b'\n') {
                push_blank_rows(&mut rows, 1);
            }
            push_blank_rows(&mut rows, reader.position().line() - line);
        }

        Ok(Table::new(headers.unwrap_or_default(), rows))
    }
}

impl TableSource for CsvTableSource {
    fn load(&self, plan: &ReadPlan) -> Result<Table> {
        let sample = FileReader::read_prefix(&plan.path, plan.sample_size)?;
        let dialect = self.resolve_dialect(plan, &sample);
        // Files with bare `\r` line endings keep the reader's own terminator handling.
        let line_feed = sample.contains(&b'\n') || !sample.contains(&b'\r');
        Ok(self.read_table(&plan.path, dialect, line_feed, plan.strict)?)
    }
}

/// Remembers the last byte handed to the CSV reader.
struct LastByte<R> {
    inner: R,
    last: Option<u8>,
}

impl<R> LastByte<R> {
    fn new(inner: R) -> Self {
        Self { inner, last: None }
    }
}

impl<R: Read> Read for LastByte<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.last = Some(buf[n - 1]);
        }
        Ok(n)
    }
}

fn decode(raw: &ByteRecord) -> std::result::Result<Vec<String>, std::str::Utf8Error> {
    raw.iter()
        .map(|field| std::str::from_utf8(field).map(|s| s.trim().to_owned()))
        .collect()
}

/// An empty line that reached the reader as a record (a lone `\r`).
fn is_blank(raw: &ByteRecord) -> bool {
    raw.len() == 1 && raw[0].iter().all(|&b| b == b'\r')
}

fn push_blank_rows(rows: &mut Vec<Vec<String>>, count: u64) {
    rows.extend((0..count).map(|_| Vec::new()));
}

fn parse_error(path: &Path, record: u64, err: &csv::Error) -> InfrastructureError {
    InfrastructureError::CsvParse {
        path: path.to_path_buf(),
        record: err.position().map_or(record, |p| p.record() + 1),
        details: err.to_string(),
    }
}
