//! tubesum - YouTube transcripts and LLM summaries
//!
//! A small HTTP service (and CLI) that fetches the transcript of a YouTube
//! video and summarizes it, or any other text, through the OpenAI
//! chat-completion API.
//!
//! # Architecture
//!
//! - `transcript` - Transcript provider abstraction (YouTube captions)
//! - `summarizer` - LLM summarization
//! - `orchestrator` - Transcript → summary pipeline
//! - `api` - HTTP routes, input validation and error mapping
//! - `config` - Settings and prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use tubesum::config::Settings;
//! use tubesum::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(&settings)?;
//!
//!     let summary = orchestrator.summarize_video("dQw4w9WgXcQ", None).await?;
//!     println!("{}", summary);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod summarizer;
pub mod transcript;

pub use error::{Result, TubesumError};
