//! Groq provider (OpenAI-compatible Chat Completions API)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use super::{ChatRequest, CompletionProvider, ProviderError};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Groq chat-completions client
pub struct GroqProvider {
    client: HttpClient,
    api_key: String,
    api_url: String,
}

impl GroqProvider {
    /// Create a new Groq provider. The timeout bounds the single outbound
    /// call per turn; a timeout surfaces as an ordinary provider failure.
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            api_url: GROQ_API_URL.to_string(),
        })
    }

    /// Create from environment variable
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| anyhow::anyhow!("GROQ_API_KEY not set"))?;
        Ok(Self::new(api_key)?)
    }

    /// Point the provider at a different chat-completions endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, request: ChatRequest) -> Result<String, ProviderError> {
        let body = serde_json::json!({
            "model": request.model,
            "messages": request.messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let completion: ChatCompletionResponse = resp.json().await?;
        extract_content(completion)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Pull the completion text out of the first choice.
fn extract_content(completion: ChatCompletionResponse) -> Result<String, ProviderError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ProviderError::MissingContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_completion_response() {
        let raw = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "Why did the chicken..." } }
            ]
        }"#;
        let completion: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            extract_content(completion).unwrap(),
            "Why did the chicken..."
        );
    }

    #[test]
    fn empty_choices_is_missing_content() {
        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
        assert!(matches!(
            extract_content(completion),
            Err(ProviderError::MissingContent)
        ));
    }

    #[test]
    fn null_content_is_missing_content() {
        let raw = r#"{ "choices": [ { "message": { "content": null } } ] }"#;
        let completion: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            extract_content(completion),
            Err(ProviderError::MissingContent)
        ));
    }
}
