use csvstats_shared_kernel::Result;

use super::summary::{Summary, summarize};

/// Capability to reduce a stream of numbers to a [`Summary`].
///
/// The use case receives one of these instead of calling [`summarize`]
/// directly so alternative reducers can be swapped in.
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Fails with `DomainError::EmptyInput` when `values` is empty. Other
    /// reducers may fail with any workspace error.
    fn summarize(&self, values: &mut dyn Iterator<Item = f64>) -> Result<Summary>;
}

/// Single-pass min/max/mean reducer backed by [`summarize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSummarizer;

impl Summarizer for LinearSummarizer {
    fn summarize(&self, values: &mut dyn Iterator<Item = f64>) -> Result<Summary> {
        Ok(summarize(values)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_summarizer_matches_free_function() {
        let values = [7.0, -1.0, 3.0];
        let via_trait = LinearSummarizer.summarize(&mut values.iter().copied()).unwrap();
        assert_eq!(via_trait, summarize(values).unwrap());
    }

    #[test]
    fn linear_summarizer_is_usable_as_trait_object() {
        let summarizer: Box<dyn Summarizer> = Box::new(LinearSummarizer);
        let err = summarizer.summarize(&mut std::iter::empty()).unwrap_err();
        assert!(err.is_empty_input());
    }
}
