use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tubesum::transcript::{TranscriptFetcher, TranscriptSegment};
use tubesum::{Result, TubesumError};

#[derive(Clone)]
pub struct MockFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockFetcher {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment::new(*text, i as f64 * 2.0, 2.0))
            .collect();
        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranscriptFetcher for MockFetcher {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TubesumError::Transcript(msg.clone()));
        }
        Ok(self.segments.clone())
    }
}
