//! Transcript command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcript::{TranscriptFetcher, YoutubeTranscriptFetcher};
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(video_id: &str, settings: Settings) -> Result<()> {
    let fetcher = YoutubeTranscriptFetcher::with_config(&settings.transcript)?;

    let spinner = Output::spinner(&format!("Fetching transcript for {}...", video_id));
    let result = fetcher.fetch_transcript(video_id).await;
    spinner.finish_and_clear();

    match result {
        Ok(transcript) if transcript.is_empty() => {
            Output::warning("Transcript not found or empty");
        }
        Ok(transcript) => println!("{}", transcript),
        Err(e) => {
            Output::error(&format!("Failed to fetch transcript: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
