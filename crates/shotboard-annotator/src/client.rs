//! Annotation service HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{AnnotatorError, AnnotatorResult};
use crate::prompt::{build_user_content, SEGMENTATION_INSTRUCTION};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, SegmentRequest};

/// Near-deterministic sampling for repeatable segmentation.
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Configuration for the annotator client.
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    /// Base URL of the annotation service
    pub base_url: String,
    /// API credential, sent as a bearer token
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(120),
        }
    }
}

impl AnnotatorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> AnnotatorResult<Self> {
        let api_key = std::env::var("ANNOTATOR_API_KEY")
            .map_err(|_| AnnotatorError::config("ANNOTATOR_API_KEY not set"))?;

        Ok(Self {
            base_url: std::env::var("ANNOTATOR_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            api_key,
            model: std::env::var("ANNOTATOR_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(
                std::env::var("ANNOTATOR_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
        })
    }
}

/// Client for the external annotation service.
pub struct AnnotatorClient {
    http: Client,
    config: AnnotatorConfig,
}

impl AnnotatorClient {
    /// Create a new annotator client.
    pub fn new(config: AnnotatorConfig) -> AnnotatorResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AnnotatorError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AnnotatorResult<Self> {
        Self::new(AnnotatorConfig::from_env()?)
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Request segmentation of one chunk.
    ///
    /// Returns the assistant message content verbatim. The content is
    /// expected to hold numbered shot lines, but no shape is guaranteed;
    /// the caller must normalize it.
    pub async fn annotate(&self, request: &SegmentRequest) -> AnnotatorResult<String> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SEGMENTATION_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_user_content(request),
                },
            ],
            temperature: self.config.temperature,
        };

        debug!(
            start_index = request.start_index,
            chunk_chars = request.chunk_text.chars().count(),
            "Sending segmentation request to {}",
            url
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(AnnotatorError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnnotatorError::RequestFailed(format!(
                "Annotation service returned {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnnotatorError::invalid_response(format!("Malformed response body: {}", e)))?;

        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AnnotatorError::invalid_response("No choices in response"))?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    }
}
