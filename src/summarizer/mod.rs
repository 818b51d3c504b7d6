//! Text summarization via LLM chat completion.

mod openai;

pub use openai::OpenAISummarizer;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for summarization services.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize text with the given model, or the configured default when `None`.
    ///
    /// An empty string means the provider produced no content.
    async fn summarize(&self, text: &str, model: Option<&str>) -> Result<String>;
}

/// Return at most the first `max_chars` characters of `text`.
///
/// The cut is silent; callers are not told that input was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
