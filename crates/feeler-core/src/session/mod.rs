//! End-of-session summarization.

pub mod summarizer;

pub use summarizer::{SessionEndStatus, SessionSummarizer, SummarizeError};
