use reqwest::Client;
use serde::Deserialize;

use crate::error::RedraftError;
use crate::provider::{MAX_OUTPUT_TOKENS, REQUEST_TIMEOUT, TEMPERATURE};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const BASE_URL: &str = "https://api.openai.com/v1";

/// Adapter for OpenAI-style chat-completion endpoints: system/user message
/// split, bearer-token auth, `choices[0].message.content` response shape.
pub struct OpenAiAdapter {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Deserialize)]
pub struct Message {
    pub content: Option<String>,
}

impl Default for OpenAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAiAdapter {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn correct(
        &self,
        prompt: &str,
        text: &str,
        model: &str,
        api_key: &str,
    ) -> Result<String, RedraftError> {
        let body = serde_json::json!({
            "model": model,
            "messages": [
                {"role": "system", "content": prompt},
                {"role": "user", "content": text},
            ],
            "max_tokens": MAX_OUTPUT_TOKENS,
            "temperature": TEMPERATURE,
        });

        tracing::info!(provider = "OpenAI", model, "sending correction request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedraftError::Transport {
                message: format!("OpenAI request failed with status {}", status.as_u16()),
                status: Some(status.as_u16()),
            });
        }

        let bytes = response.bytes().await?;
        let completion: ChatCompletion = serde_json::from_slice(&bytes).map_err(|e| {
            RedraftError::InvalidResponse(format!("failed to parse OpenAI response: {e}"))
        })?;

        extract_completion(completion)
    }
}

/// Pull the corrected text out of a parsed completion. Split out from the
/// network path so response handling is testable against fixtures.
pub fn extract_completion(completion: ChatCompletion) -> Result<String, RedraftError> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| {
            RedraftError::InvalidResponse(
                "OpenAI response missing choices[0].message.content".to_string(),
            )
        })?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(RedraftError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}
