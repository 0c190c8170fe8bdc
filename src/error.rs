use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedraftError {
    #[error("no API key configured")]
    NoApiKey,

    #[error("provider returned {status:?}: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("generation stopped early: {0}")]
    FinishReason(String),

    #[error("empty response from provider")]
    EmptyResponse,

    #[error("host action failed: {0}")]
    HostAction(String),
}

/// Messages for the HTTP statuses users actually hit. Anything else falls
/// through to the raw provider message.
fn status_message(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("Invalid API key"),
        429 => Some("Rate limit exceeded"),
        404 => Some("API endpoint not found - check model name and API key"),
        _ => None,
    }
}

impl RedraftError {
    /// Normalize to the short user-facing string shown via the host's notice
    /// mechanism. Exactly one of these is displayed per failed invocation.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoApiKey => {
                "No API key configured - set an OpenAI or Gemini API key".to_string()
            }
            Self::Transport { message, status } => status
                .and_then(status_message)
                .map(str::to_string)
                .unwrap_or_else(|| message.clone()),
            Self::Request(e) => {
                if let Some(mapped) = e.status().and_then(|s| status_message(s.as_u16())) {
                    mapped.to_string()
                } else if e.is_connect() {
                    "Network connection failed".to_string()
                } else if e.is_timeout() {
                    "Request timed out".to_string()
                } else {
                    e.to_string()
                }
            }
            Self::InvalidResponse(msg) => msg.clone(),
            Self::FinishReason(reason) => format!("AI stopped before finishing ({reason})"),
            Self::EmptyResponse => "Empty response from AI".to_string(),
            Self::HostAction(msg) => msg.clone(),
        }
    }
}
