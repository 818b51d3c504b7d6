//! Transcript retrieval for tubesum.
//!
//! Provides a trait-based interface over caption providers so the HTTP layer
//! and the orchestrator can be exercised without network access.

mod youtube;

pub use youtube::YoutubeTranscriptFetcher;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A unit of timed caption text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Caption text.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the ordered caption segments for a video.
    ///
    /// Provider failures are returned as-is; callers decide how to report them.
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>>;

    /// Fetch the transcript as a single string.
    async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
        let segments = self.fetch_segments(video_id).await?;
        Ok(join_segments(&segments))
    }
}

/// Join segment texts with single spaces and trim the result.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFetcher(Vec<TranscriptSegment>);

    #[async_trait]
    impl TranscriptFetcher for FixedFetcher {
        async fn fetch_segments(&self, _video_id: &str) -> Result<Vec<TranscriptSegment>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_join_segments() {
        let segments = vec![
            TranscriptSegment::new("Hello", 0.0, 1.2),
            TranscriptSegment::new("world", 1.2, 0.8),
        ];
        assert_eq!(join_segments(&segments), "Hello world");
    }

    #[test]
    fn test_join_segments_trims_ends_only() {
        let segments = vec![
            TranscriptSegment::new("  first", 0.0, 1.0),
            TranscriptSegment::new("second ", 1.0, 1.0),
            TranscriptSegment::new("third  ", 2.0, 1.0),
        ];
        // Inner whitespace from the provider is kept; only the ends are trimmed.
        assert_eq!(join_segments(&segments), "first second  third");
    }

    #[test]
    fn test_join_no_segments_is_empty() {
        assert_eq!(join_segments(&[]), "");
    }

    #[tokio::test]
    async fn test_fetch_transcript_joins_segments() {
        let fetcher = FixedFetcher(vec![
            TranscriptSegment::new("one", 0.0, 1.0),
            TranscriptSegment::new("two", 1.0, 1.0),
            TranscriptSegment::new("three", 2.0, 1.0),
        ]);
        let transcript = tokio_test::assert_ok!(fetcher.fetch_transcript("abc12").await);
        assert_eq!(transcript, "one two three");
    }
}
