//! Configuration module for tubesum.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{SummaryPrompts, TRANSCRIPT_PLACEHOLDER};
pub use settings::{
    GeneralSettings, OpenAISettings, ServerSettings, Settings,
    TranscriptSettings, OPENAI_API_KEY_ENV,
};
