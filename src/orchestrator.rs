//! Pipeline orchestrator for tubesum.
//!
//! Composes transcript retrieval and summarization.

use crate::config::Settings;
use crate::error::Result;
use crate::summarizer::{OpenAISummarizer, Summarizer};
use crate::transcript::{TranscriptFetcher, YoutubeTranscriptFetcher};
use std::sync::Arc;
use tracing::{info, instrument};

/// Fetches transcripts and hands them to the summarizer.
pub struct Orchestrator {
    fetcher: Arc<dyn TranscriptFetcher>,
    summarizer: Arc<dyn Summarizer>,
}

impl Orchestrator {
    /// Build the production pipeline from settings.
    ///
    /// Fails immediately when no OpenAI API key is available.
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings.resolve_api_key()?;

        let fetcher = Arc::new(YoutubeTranscriptFetcher::with_config(&settings.transcript)?);
        let summarizer = Arc::new(OpenAISummarizer::with_prompts(
            &settings.openai,
            &api_key,
            settings.prompts.clone(),
        )?);

        info!(
            "Summaries default to {} (input capped at {} chars)",
            settings.openai.default_model, settings.openai.max_input_chars
        );

        Ok(Self::with_components(fetcher, summarizer))
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        fetcher: Arc<dyn TranscriptFetcher>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            fetcher,
            summarizer,
        }
    }

    /// Get a reference to the transcript fetcher.
    pub fn fetcher(&self) -> Arc<dyn TranscriptFetcher> {
        self.fetcher.clone()
    }

    /// Get a reference to the summarizer.
    pub fn summarizer(&self) -> Arc<dyn Summarizer> {
        self.summarizer.clone()
    }

    /// Fetch a video's transcript and summarize it.
    ///
    /// Returns an empty string without calling the summarizer when the video
    /// has no transcript text.
    #[instrument(skip(self))]
    pub async fn summarize_video(&self, video_id: &str, model: Option<&str>) -> Result<String> {
        let transcript = self.fetcher.fetch_transcript(video_id).await?;
        if transcript.is_empty() {
            info!("Empty transcript for {}, skipping summary", video_id);
            return Ok(String::new());
        }

        self.summarizer.summarize(&transcript, model).await
    }
}
