mod summarizer;
mod summary;

pub use summarizer::{LinearSummarizer, Summarizer};
pub use summary::{Summary, summarize};
