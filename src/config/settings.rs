//! Configuration settings for tubesum.

use super::SummaryPrompts;
use crate::error::{Result, TubesumError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted when no API key is configured.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub openai: OpenAISettings,
    pub transcript: TranscriptSettings,
    pub prompts: SummaryPrompts,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Allow cross-origin requests from any origin.
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors: true,
        }
    }
}

/// OpenAI chat-completion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAISettings {
    /// API key. Falls back to `OPENAI_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Model used when a request does not name one.
    pub default_model: String,
    pub temperature: f32,
    /// Input longer than this many characters is cut before it is sent.
    pub max_input_chars: usize,
    pub request_timeout_secs: u64,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            api_key: None,
            default_model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            max_input_chars: 20_000,
            request_timeout_secs: crate::openai::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Transcript provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Preferred caption languages, in order.
    pub languages: Vec<String>,
    /// Keep HTML formatting tags in caption text.
    pub preserve_formatting: bool,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            preserve_formatting: false,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubesum")
            .join("config.toml")
    }

    /// Resolve the OpenAI API key from the config file or the environment.
    pub fn resolve_api_key(&self) -> Result<String> {
        pick_api_key(
            self.openai.api_key.as_deref(),
            std::env::var(OPENAI_API_KEY_ENV).ok().as_deref(),
        )
    }
}

/// Configured key wins over the environment; blank values count as missing.
fn pick_api_key(configured: Option<&str>, from_env: Option<&str>) -> Result<String> {
    configured
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .or_else(|| from_env.map(str::trim).filter(|k| !k.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| {
            TubesumError::Config(format!(
                "{} not set. Set it with: export {}='sk-...' or add openai.api_key to {}",
                OPENAI_API_KEY_ENV,
                OPENAI_API_KEY_ENV,
                Settings::default_config_path().display()
            ))
        })
}
