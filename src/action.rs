use crate::config::Config;

/// The default persona prompt used when the host configured nothing.
const DEFAULT_FIX_GRAMMAR_PROMPT: &str = "You are a grammar correction assistant. Fix all \
    spelling, grammar and punctuation mistakes in the text the user provides. Preserve the \
    original meaning, tone and formatting. Reply with the corrected text only, without \
    explanations or quotation marks.";

const DEFAULT_IMPROVE_PROMPT: &str = "You are a writing assistant. Rewrite the text the user \
    provides so it reads clearly and naturally, keeping its meaning and tone. Reply with the \
    rewritten text only, without explanations or quotation marks.";

const DEFAULT_SUMMARIZE_PROMPT: &str = "You are a summarization assistant. Summarize the text \
    the user provides in a few concise sentences. Reply with the summary only, without \
    explanations or quotation marks.";

/// Host menu actions. Unknown action names resolve to `FixGrammar`, the
/// documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    #[default]
    FixGrammar,
    Improve,
    Summarize,
}

impl Action {
    /// Map a host action-name string (e.g. "Fix Grammar") to a variant.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "improve" | "improve writing" | "rephrase" => Action::Improve,
            "summarize" | "summary" => Action::Summarize,
            _ => Action::FixGrammar,
        }
    }

    /// Key under which `Config.prompts` stores this action's override.
    pub fn config_key(&self) -> &'static str {
        match self {
            Action::FixGrammar => "fix_grammar",
            Action::Improve => "improve",
            Action::Summarize => "summarize",
        }
    }

    fn default_prompt(&self) -> &'static str {
        match self {
            Action::FixGrammar => DEFAULT_FIX_GRAMMAR_PROMPT,
            Action::Improve => DEFAULT_IMPROVE_PROMPT,
            Action::Summarize => DEFAULT_SUMMARIZE_PROMPT,
        }
    }
}

/// Pick the instruction prompt for an action. Resolution order: the
/// per-action override, then the generic `system_prompt`, then the built-in
/// default. Blank overrides are ignored. Never fails.
pub fn resolve_prompt(action: Action, config: &Config) -> String {
    if let Some(custom) = config
        .prompts
        .get(action.config_key())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
    {
        return custom.to_string();
    }

    if let Some(generic) = config
        .system_prompt
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return generic.to_string();
    }

    action.default_prompt().to_string()
}
