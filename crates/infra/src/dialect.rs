//! Delimiter and quote detection for delimited text.
//!
//! Two heuristics run over a sample taken from the head of the file:
//!
//! 1. **Quoted fields**: a regex per (quote, delimiter) pair looks for
//!    fields fully wrapped in quotes and bounded by the delimiter or a line
//!    edge. The best pair fixes the quote character and gives a fallback
//!    delimiter.
//! 2. **Frequency consistency**: each candidate delimiter is counted on
//!    every line (outside quotes); the one whose non-zero count repeats on
//!    the largest share of lines wins.
//!
//! When neither heuristic finds anything the comma dialect is used.

use std::{collections::HashMap, sync::OnceLock};

use regex::bytes::Regex;

/// Delimiters considered, in tie-break order. Space comes after the
/// stronger separators so it only wins when nothing else is consistent.
pub const CANDIDATE_DELIMITERS: &[u8] = b",\t; :|";

const CANDIDATE_QUOTES: &[u8] = b"\"'";

/// Share of sample lines that must agree on a delimiter count.
const MIN_CONSISTENCY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
}

impl Dialect {
    pub const fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter, quote: b'"' }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::with_delimiter(b',')
    }
}

#[derive(Debug, Clone)]
pub struct DialectSniffer {
    delimiters: Vec<u8>,
}

impl Default for DialectSniffer {
    fn default() -> Self {
        Self { delimiters: CANDIDATE_DELIMITERS.to_vec() }
    }
}

impl DialectSniffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict detection to the given delimiters (tried in order).
    pub fn with_delimiters(delimiters: impl Into<Vec<u8>>) -> Self {
        Self { delimiters: delimiters.into() }
    }

    /// Guess the dialect of `sample`, or `None` if no candidate fits.
    ///
    /// Set `truncated` when the sample was cut short so its last, likely
    /// partial, line is ignored.
    pub fn sniff(&self, sample: &[u8], truncated: bool) -> Option<Dialect> {
        let sample = complete_lines(sample, truncated);
        let quoted = self.guess_quote_and_delimiter(sample);
        let quote = quoted.map_or(b'"', |(q, _)| q);

        self.guess_delimiter(sample, quote)
            .or_else(|| quoted.map(|(_, d)| d))
            .map(|delimiter| Dialect { delimiter, quote })
    }

    /// Like [`sniff`](Self::sniff) but falls back to the comma dialect.
    pub fn sniff_or_default(&self, sample: &[u8], truncated: bool) -> Dialect {
        self.sniff(sample, truncated).unwrap_or_else(|| {
            log::debug!("dialect sniffing inconclusive, falling back to comma");
            Dialect::default()
        })
    }

    fn guess_quote_and_delimiter(&self, sample: &[u8]) -> Option<(u8, u8)> {
        let mut best: Option<((u8, u8), usize)> = None;
        for (quote, delim, re) in quoted_field_patterns() {
            if !self.delimiters.contains(delim) {
                continue;
            }
            let hits = re.find_iter(sample).count();
            if hits > best.map_or(0, |(_, n)| n) {
                best = Some(((*quote, *delim), hits));
            }
        }
        best.map(|(pair, _)| pair)
    }

    fn guess_delimiter(&self, sample: &[u8], quote: u8) -> Option<u8> {
        let lines: Vec<&[u8]> = sample
            .split(|&b| b == b'\n')
            .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return None;
        }

        let mut best: Option<(u8, f64)> = None;
        for &delim in &self.delimiters {
            let Some(score) = consistency(&lines, delim, quote) else {
                continue;
            };
            if score >= MIN_CONSISTENCY && best.is_none_or(|(_, c)| score > c) {
                best = Some((delim, score));
            }
        }
        best.map(|(d, _)| d)
    }
}

/// Share of lines carrying the most common non-zero count of `delim`.
#[allow(clippy::cast_precision_loss)]
fn consistency(lines: &[&[u8]], delim: u8, quote: u8) -> Option<f64> {
    let mut freq: HashMap<usize, usize> = HashMap::new();
    for line in lines {
        *freq.entry(count_unquoted(line, delim, quote)).or_insert(0) += 1;
    }
    let (_, agreeing) = freq
        .into_iter()
        .filter(|&(count, _)| count > 0)
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))?;
    Some(agreeing as f64 / lines.len() as f64)
}

fn count_unquoted(line: &[u8], delim: u8, quote: u8) -> usize {
    if !line.contains(&quote) {
        return bytecount::count(line, delim);
    }
    let mut in_quotes = false;
    let mut count = 0;
    for &b in line {
        if b == quote {
            in_quotes = !in_quotes;
        } else if b == delim && !in_quotes {
            count += 1;
        }
    }
    count
}

/// Quoted-field patterns for every candidate (quote, delimiter) pair.
///
/// Delimiters outside [`CANDIDATE_DELIMITERS`] only take part in the
/// frequency heuristic.
fn quoted_field_patterns() -> &'static [(u8, u8, Regex)] {
    static PATTERNS: OnceLock<Vec<(u8, u8, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CANDIDATE_QUOTES
            .iter()
            .flat_map(|&quote| {
                CANDIDATE_DELIMITERS
                    .iter()
                    .map(move |&delim| (quote, delim, quoted_field_pattern(quote, delim)))
            })
            .collect()
    })
}

/// A field fully wrapped in `quote` sitting between `delim`s or line edges.
fn quoted_field_pattern(quote: u8, delim: u8) -> Regex {
    let q = regex::escape(&char::from(quote).to_string());
    let d = regex::escape(&char::from(delim).to_string());
    Regex::new(&format!(r"(?m)(?:^|{d}) ?{q}[^{q}\n]*{q}(?:{d}|\r?$)"))
        .expect("quoted field pattern must compile")
}

fn complete_lines(sample: &[u8], truncated: bool) -> &[u8] {
    if !truncated {
        return sample;
    }
    match sample.iter().rposition(|&b| b == b'\n') {
        Some(pos) => &sample[..=pos],
        None => sample,
    }
}
