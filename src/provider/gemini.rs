use reqwest::Client;
use serde::Deserialize;

use crate::error::RedraftError;
use crate::provider::{MAX_OUTPUT_TOKENS, REQUEST_TIMEOUT, TEMPERATURE};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Finish reason for a normal completion. Anything else (SAFETY, MAX_TOKENS,
/// RECITATION, ...) means the model stopped abnormally.
const FINISH_REASON_STOP: &str = "STOP";

/// Adapter for Gemini-style generate endpoints: no system/user role split —
/// prompt and text are concatenated into one content block — and the API key
/// rides as a query parameter, not a header.
pub struct GeminiAdapter {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
pub struct GenerateResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize)]
pub struct Content {
    pub parts: Option<Vec<Part>>,
}

#[derive(Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiAdapter {
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
            "contents": [{"parts": [{"text": format!("{prompt}\n\n{text}")}]}],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            },
        });

        tracing::info!(provider = "Gemini", model, "sending correction request");

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, model
            ))
            .query(&[("key", api_key)])
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedraftError::Transport {
                message: format!("Gemini request failed with status {}", status.as_u16()),
                status: Some(status.as_u16()),
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes).map_err(|e| {
            RedraftError::InvalidResponse(format!("failed to parse Gemini response: {e}"))
        })?;

        validate_response(parsed)
    }
}

/// Staged validation of a parsed generate response. Each stage raises a
/// distinct error so a malformed payload is distinguishable from a safety
/// block or an empty completion.
pub fn validate_response(response: GenerateResponse) -> Result<String, RedraftError> {
    let candidates = response
        .candidates
        .filter(|c| !c.is_empty())
        .ok_or_else(|| {
            RedraftError::InvalidResponse("no candidates in Gemini response".to_string())
        })?;

    let candidate = candidates.into_iter().next().ok_or_else(|| {
        RedraftError::InvalidResponse("no candidates in Gemini response".to_string())
    })?;

    // Covers safety blocks (SAFETY), length truncation (MAX_TOKENS), etc.
    if let Some(reason) = candidate
        .finish_reason
        .as_deref()
        .filter(|r| *r != FINISH_REASON_STOP)
    {
        return Err(RedraftError::FinishReason(reason.to_string()));
    }

    let part = candidate
        .content
        .and_then(|c| c.parts)
        .filter(|p| !p.is_empty())
        .and_then(|p| p.into_iter().next())
        .ok_or_else(|| {
            RedraftError::InvalidResponse("Gemini candidate has no content parts".to_string())
        })?;

    let text = part.text.ok_or_else(|| {
        RedraftError::InvalidResponse("Gemini content part has no text".to_string())
    })?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RedraftError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}
