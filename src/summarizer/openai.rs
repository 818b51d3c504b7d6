//! OpenAI chat-completion summarizer.

use super::{truncate_chars, Summarizer};
use crate::config::{OpenAISettings, SummaryPrompts};
use crate::error::{Result, TubesumError};
use crate::openai::create_client_with_timeout;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Summarizer backed by the OpenAI chat-completion API.
pub struct OpenAISummarizer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    default_model: String,
    temperature: f32,
    max_input_chars: usize,
    prompts: SummaryPrompts,
}

impl OpenAISummarizer {
    /// Create a summarizer with default prompts.
    pub fn new(settings: &OpenAISettings, api_key: &str) -> Result<Self> {
        Self::with_prompts(settings, api_key, SummaryPrompts::default())
    }

    /// Create a summarizer with custom prompts.
    pub fn with_prompts(settings: &OpenAISettings, api_key: &str, prompts: SummaryPrompts) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(TubesumError::Config("OpenAI API key is empty".to_string()));
        }

        let client = create_client_with_timeout(
            api_key,
            Duration::from_secs(settings.request_timeout_secs),
        )?;

        Ok(Self {
            client,
            default_model: settings.default_model.clone(),
            temperature: settings.temperature,
            max_input_chars: settings.max_input_chars,
            prompts,
        })
    }

    /// Render the user message for the given text, truncating it first.
    pub fn user_message(&self, text: &str) -> String {
        self.prompts
            .render_user(truncate_chars(text, self.max_input_chars))
    }

    /// Build the chat-completion request sent to the provider.
    pub fn build_request(&self, text: &str, model: Option<&str>) -> Result<CreateChatCompletionRequest> {
        let model = model.unwrap_or(&self.default_model);
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.prompts.system.clone())
                .build()
                .map_err(|e| TubesumError::OpenAI(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(self.user_message(text))
                .build()
                .map_err(|e| TubesumError::OpenAI(e.to_string()))?
                .into(),
        ];

        CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| TubesumError::OpenAI(e.to_string()))
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn summarize(&self, text: &str, model: Option<&str>) -> Result<String> {
        let request = self.build_request(text, model)?;
        debug!("Requesting summary from {}", request.model);

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| TubesumError::OpenAI(e.to_string()))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        debug!("Generated summary of {} characters", summary.len());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer() -> OpenAISummarizer {
        OpenAISummarizer::new(&OpenAISettings::default(), "sk-test").unwrap()
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = OpenAISummarizer::new(&OpenAISettings::default(), "  ");
        assert!(matches!(result, Err(TubesumError::Config(_))));
    }

    #[test]
    fn test_user_message_embeds_text() {
        let message = summarizer().user_message("Hello world");
        assert_eq!(message, "Summarize the following transcript:\n\nHello world");
    }

    #[test]
    fn test_user_message_truncates_long_input() {
        let head = "x".repeat(20_000);
        let text = format!("{}{}", head, "TAIL".repeat(100));

        let message = summarizer().user_message(&text);
        let prefix = "Summarize the following transcript:\n\n";
        assert!(message.starts_with(prefix));
        assert_eq!(&message[prefix.len()..], head);
        assert!(!message.contains("TAIL"));
    }

    #[test]
    fn test_truncation_limit_is_configurable() {
        let settings = OpenAISettings {
            max_input_chars: 5,
            ..OpenAISettings::default()
        };
        let summarizer = OpenAISummarizer::new(&settings, "sk-test").unwrap();
        assert!(summarizer.user_message("abcdefgh").ends_with("abcde"));
    }

    #[test]
    fn test_build_request_uses_default_model() {
        let request = summarizer().build_request("some transcript", None).unwrap();
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.messages.len(), 2);
        assert!(matches!(
            request.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            request.messages[1],
            ChatCompletionRequestMessage::User(_)
        ));
    }

    #[test]
    fn test_user_text_with_braces_passes_through() {
        let text = "Template syntax looks like {{name}} in Handlebars, and {{transcript}} too.";
        let message = summarizer().user_message(text);
        assert_eq!(
            message,
            format!("Summarize the following transcript:\n\n{}", text)
        );
    }

    #[test]
    fn test_configured_prompts_reach_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[prompts]\nsystem = \"Be brief.\"\nuser = \"TL;DR: {{transcript}}\"\n",
        )
        .unwrap();
        let settings = crate::config::Settings::load_from(Some(&path)).unwrap();

        let summarizer =
            OpenAISummarizer::with_prompts(&settings.openai, "sk-test", settings.prompts).unwrap();
        let text = "Notes on {{name}} placeholders";
        assert_eq!(summarizer.user_message(text), format!("TL;DR: {}", text));

        let request = summarizer.build_request(text, None).unwrap();
        let messages = serde_json::to_value(&request.messages).unwrap();
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "Be brief.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], format!("TL;DR: {}", text));
    }

    #[test]
    fn test_build_request_model_override() {
        let request = summarizer()
            .build_request("some transcript", Some("gpt-4o"))
            .unwrap();
        assert_eq!(request.model, "gpt-4o");
    }
}
