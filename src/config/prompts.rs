//! Summary prompt templates.

use serde::{Deserialize, Serialize};

/// Placeholder in the user template that receives the input text.
pub const TRANSCRIPT_PLACEHOLDER: &str = "{{transcript}}";

/// System instruction and user message template for summarization.
///
/// Both can be overridden from the `[prompts]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    pub system: String,
    /// User message template. `{{transcript}}` is replaced with the input text.
    pub user: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            system: "You are a helpful assistant that summarizes YouTube transcripts. \
                Produce a clear, concise summary capturing the main points, structure, and key takeaways. \
                Return this as a bulletted list."
                .to_string(),
            user: format!("Summarize the following transcript:\n\n{}", TRANSCRIPT_PLACEHOLDER),
        }
    }
}

impl SummaryPrompts {
    /// Insert `input` into the user template.
    ///
    /// Only the first placeholder in the template is replaced and the input
    /// itself is never scanned, so braces in caller text survive verbatim.
    pub fn render_user(&self, input: &str) -> String {
        self.user.replacen(TRANSCRIPT_PLACEHOLDER, input, 1)
    }
}
