//! CLI command implementations.

mod config;
mod serve;
mod summary;
mod transcript;

pub use config::run_config;
pub use serve::run_serve;
pub use summary::{run_summarize_text, run_summary};
pub use transcript::run_transcript;
