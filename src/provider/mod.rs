pub mod gemini;
pub mod openai;

use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;
use crate::error::RedraftError;

/// Low temperature favors deterministic corrections over creative rewrites.
pub(crate) const TEMPERATURE: f64 = 0.3;

/// Generous ceiling — corrections are roughly the size of the input, this
/// only guards against runaway generation.
pub(crate) const MAX_OUTPUT_TOKENS: u64 = 20_000;

/// Total per-request bound. The only limit on call duration; there is no
/// cancellation beyond it.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The two supported provider wire formats. Resolved once per invocation,
/// immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ProviderChoice {
    #[default]
    #[serde(rename = "OpenAI", alias = "openai")]
    OpenAi,
    #[serde(rename = "Gemini", alias = "gemini")]
    Gemini,
}

impl ProviderChoice {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderChoice::OpenAi => "OpenAI",
            ProviderChoice::Gemini => "Gemini",
        }
    }

    fn other(&self) -> Self {
        match self {
            ProviderChoice::OpenAi => ProviderChoice::Gemini,
            ProviderChoice::Gemini => ProviderChoice::OpenAi,
        }
    }
}

/// Outcome of provider selection: the provider to use, plus an informational
/// notice when the configured default was skipped for lack of a key.
#[derive(Debug, PartialEq, Eq)]
pub struct Selection {
    pub provider: ProviderChoice,
    pub notice: Option<String>,
}

/// Choose the provider for this invocation. Starts from the configured
/// default; single-step fallback to the other provider if the default has no
/// key. Errors with `NoApiKey` before any network activity when neither key
/// is configured.
pub fn select(config: &Config) -> Result<Selection, RedraftError> {
    let preferred = config.default_provider;
    if config.api_key(preferred).is_some() {
        return Ok(Selection {
            provider: preferred,
            notice: None,
        });
    }

    let other = preferred.other();
    if config.api_key(other).is_some() {
        tracing::warn!(
            preferred = preferred.name(),
            fallback = other.name(),
            "default provider has no API key, falling back"
        );
        return Ok(Selection {
            provider: other,
            notice: Some(format!(
                "{} key not found, using {} instead",
                preferred.name(),
                other.name()
            )),
        });
    }

    Err(RedraftError::NoApiKey)
}

/// Closed union over the two adapters. The provider set is fixed, so a tagged
/// enum at the call site beats a trait object.
pub enum Provider {
    OpenAi(openai::OpenAiAdapter),
    Gemini(gemini::GeminiAdapter),
}

impl Provider {
    pub fn new(choice: ProviderChoice) -> Self {
        match choice {
            ProviderChoice::OpenAi => Provider::OpenAi(openai::OpenAiAdapter::new()),
            ProviderChoice::Gemini => Provider::Gemini(gemini::GeminiAdapter::new()),
        }
    }

    /// Send (prompt, text) to the selected provider and return the corrected
    /// text, trimmed and guaranteed non-empty.
    pub async fn correct(
        &self,
        prompt: &str,
        text: &str,
        config: &Config,
    ) -> Result<String, RedraftError> {
        match self {
            Provider::OpenAi(adapter) => {
                let api_key = config
                    .api_key(ProviderChoice::OpenAi)
                    .ok_or(RedraftError::NoApiKey)?;
                let model = config
                    .model(ProviderChoice::OpenAi)
                    .unwrap_or(openai::DEFAULT_MODEL);
                adapter.correct(prompt, text, model, api_key).await
            }
            Provider::Gemini(adapter) => {
                let api_key = config
                    .api_key(ProviderChoice::Gemini)
                    .ok_or(RedraftError::NoApiKey)?;
                let model = config
                    .model(ProviderChoice::Gemini)
                    .unwrap_or(gemini::DEFAULT_MODEL);
                adapter.correct(prompt, text, model, api_key).await
            }
        }
    }
}
