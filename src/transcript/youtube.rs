//! YouTube caption provider.

use super::{TranscriptFetcher, TranscriptSegment};
use crate::config::TranscriptSettings;
use crate::error::{Result, TubesumError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches captions through the YouTube transcript API.
pub struct YoutubeTranscriptFetcher {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscriptFetcher {
    /// Create a fetcher with default settings (English captions, no formatting).
    pub fn new() -> Result<Self> {
        Self::with_config(&TranscriptSettings::default())
    }

    /// Create a fetcher with custom language preferences.
    pub fn with_config(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TubesumError::Transcript(e.to_string()))?;

        Ok(Self {
            api,
            languages: settings.languages.clone(),
            preserve_formatting: settings.preserve_formatting,
        })
    }

    /// Languages requested from the provider, in preference order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    #[instrument(skip(self))]
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| TubesumError::Transcript(e.to_string()))?;

        let segments: Vec<TranscriptSegment> = fetched
            .parts()
            .iter()
            .map(|part| TranscriptSegment::new(part.text.clone(), part.start, part.duration))
            .collect();

        debug!("Fetched {} caption segments", segments.len());
        Ok(segments)
    }
}
