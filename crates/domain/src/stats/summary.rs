use csvstats_shared_kernel::{DomainError, DomainResult};
use serde::{Serialize, Serializer};

/// Minimum, maximum and arithmetic mean of a non-empty run of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    #[serde(serialize_with = "finite_or_null")]
    pub min: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub max: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub mean: f64,
}

impl Summary {
    #[inline]
    pub const fn new(min: f64, max: f64, mean: f64) -> Self {
        Self { min, max, mean }
    }

    /// The `(min, max, mean)` triple.
    #[inline]
    pub const fn as_tuple(self) -> (f64, f64, f64) {
        (self.min, self.max, self.mean)
    }
}

/// Computes min, max and mean in a single pass over `values`.
///
/// The input is read exactly once, in order. Comparisons are plain IEEE-754
/// `<` / `>`: a leading NaN stays as min and max, a later NaN never replaces
/// them but does turn the mean into NaN. Callers that do not want this have
/// to filter NaN out first.
///
/// # Errors
///
/// Returns [`DomainError::EmptyInput`] if `values` yields no element.
pub fn summarize<I>(values: I) -> DomainResult<Summary>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or(DomainError::EmptyInput)?;

    let mut min = first;
    let mut max = first;
    let mut sum = first;
    let mut count: u64 = 1;

    for v in iter {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum += v;
        count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = sum / count as f64;
    Ok(Summary { min, max, mean })
}

fn finite_or_null<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}
