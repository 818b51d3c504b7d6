use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tubesum::summarizer::Summarizer;
use tubesum::{Result, TubesumError};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, text: &str, model: Option<&str>) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), model.map(str::to_string)));
        if let Some(ref msg) = self.fail_with {
            return Err(TubesumError::OpenAI(msg.clone()));
        }
        Ok(self.summary.clone())
    }
}
