use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, GenerationError};

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Secrets file consulted when the environment has no key
pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A text-generation backend: prompt in, generated text out
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Short identifier for logs (e.g. "gemini")
    fn provider_id(&self) -> &str;
}

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model to use (e.g., "gemini-1.5-flash")
    pub model: String,
    pub base_url: String,
    /// Temperature (0-1, lower = more deterministic)
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
}

impl GeminiConfig {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.2,
            max_output_tokens: None,
        }
    }

    /// Resolve from `GOOGLE_API_KEY`, falling back to a TOML secrets file
    pub fn resolve(secrets_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_with(|name| std::env::var(name).ok(), secrets_path)
    }

    /// Resolve with `lookup` standing in for the process environment
    pub fn resolve_with(
        lookup: impl Fn(&str) -> Option<String>,
        secrets_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let path = secrets_path.unwrap_or_else(|| Path::new(DEFAULT_SECRETS_PATH));
        let api_key = non_empty(API_KEY_VAR)
            .or_else(|| secrets_api_key(path))
            .ok_or(ConfigError::MissingApiKey)?;

        let model = non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self::new(api_key, model))
    }
}

#[derive(Debug, Deserialize)]
struct Secrets {
    #[serde(rename = "GOOGLE_API_KEY")]
    google_api_key: Option<String>,
}

/// Read the key from a secrets file; unreadable or malformed files count as absent
fn secrets_api_key(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("No secrets file at {:?}: {}", path, e);
            return None;
        }
    };

    match toml::from_str::<Secrets>(&content) {
        Ok(secrets) => secrets.google_api_key.filter(|k| !k.trim().is_empty()),
        Err(e) => {
            debug!("Ignoring malformed secrets file {:?}: {}", path, e);
            None
        }
    }
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            }),
        };

        debug!("Sending {} char prompt to {}", prompt.len(), self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let response: GeminiResponse = response.json().await?;
        response.into_text()
    }

    fn provider_id(&self) -> &str {
        "gemini"
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiResponse {
    /// First text part of the first candidate, trimmed
    fn into_text(self) -> Result<String, GenerationError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenerationError::Blocked(reason));
        }

        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}
