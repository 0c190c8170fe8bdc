use std::collections::HashMap;
use std::env;

use serde::Deserialize;

use crate::provider::ProviderChoice;

/// Host-owned settings, read-only to the core. One instance per invocation;
/// nothing here is mutated or cached across runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub openai_apikey: Option<String>,
    pub openai_model: Option<String>,
    pub gemini_apikey: Option<String>,
    pub gemini_model: Option<String>,
    pub default_provider: ProviderChoice,
    /// Generic prompt override applied to every action unless a per-action
    /// entry in `prompts` shadows it.
    pub system_prompt: Option<String>,
    /// Per-action prompt overrides, keyed by action config key
    /// (e.g. "fix_grammar").
    pub prompts: HashMap<String, String>,
}

impl Config {
    /// Build a config from environment variables. Hosts that keep settings
    /// elsewhere construct `Config` directly or use `from_toml_str`.
    pub fn from_env() -> Self {
        let openai_apikey = env::var("OPENAI_API_KEY").ok();
        let gemini_apikey = env::var("GEMINI_API_KEY").ok();

        if openai_apikey.is_none() && gemini_apikey.is_none() {
            tracing::warn!("neither OPENAI_API_KEY nor GEMINI_API_KEY set — no provider usable");
        }

        let default_provider = match env::var("DEFAULT_PROVIDER").ok().as_deref() {
            Some(s) if s.eq_ignore_ascii_case("gemini") => ProviderChoice::Gemini,
            _ => ProviderChoice::OpenAi,
        };

        Config {
            openai_apikey,
            openai_model: env::var("OPENAI_MODEL").ok(),
            gemini_apikey,
            gemini_model: env::var("GEMINI_MODEL").ok(),
            default_provider,
            system_prompt: env::var("SYSTEM_PROMPT").ok(),
            prompts: HashMap::new(),
        }
    }

    /// Parse a TOML settings blob handed over by the host.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The configured API key for a provider, treating blank values as unset.
    pub fn api_key(&self, choice: ProviderChoice) -> Option<&str> {
        let raw = match choice {
            ProviderChoice::OpenAi => self.openai_apikey.as_deref(),
            ProviderChoice::Gemini => self.gemini_apikey.as_deref(),
        };
        raw.map(str::trim).filter(|k| !k.is_empty())
    }

    /// The configured model name for a provider, if any. Adapters supply
    /// their own default when this is unset.
    pub fn model(&self, choice: ProviderChoice) -> Option<&str> {
        let raw = match choice {
            ProviderChoice::OpenAi => self.openai_model.as_deref(),
            ProviderChoice::Gemini => self.gemini_model.as_deref(),
        };
        raw.map(str::trim).filter(|m| !m.is_empty())
    }
}
