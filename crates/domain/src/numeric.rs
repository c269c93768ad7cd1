//! Cell → number detection.
//!
//! A cell counts as numeric when, after trimming and dropping thousands
//! separators, it parses as an `f64`. Underscores are accepted between
//! digits (`1_000`). Locale-specific formats (decimal commas, grouping with
//! dots or spaces) are not recognised.

/// Thousands separator removed before parsing.
const GROUP_SEPARATOR: char = ',';

/// Digit separator allowed only with a digit on both sides.
const DIGIT_SEPARATOR: char = '_';

/// Parse a single cell. Blank or unparseable cells yield `None`.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut text = if trimmed.contains(GROUP_SEPARATOR) {
        trimmed.replace(GROUP_SEPARATOR, "")
    } else {
        trimmed.to_owned()
    };
    if text.contains(DIGIT_SEPARATOR) {
        text = strip_digit_separators(&text)?;
    }
    text.parse().ok()
}

/// `None` when an underscore is not surrounded by ASCII digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != DIGIT_SEPARATOR {
            out.push(ch);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        if !(before.is_some_and(u8::is_ascii_digit) && after.is_some_and(u8::is_ascii_digit)) {
            return None;
        }
    }
    Some(out)
}

/// Numbers of a column in cell order, with non-numeric cells and NaN dropped.
pub fn numeric_values<'a, I>(cells: I) -> impl Iterator<Item = f64> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    cells
        .into_iter()
        .filter_map(parse_numeric)
        .filter(|v| !v.is_nan())
}
