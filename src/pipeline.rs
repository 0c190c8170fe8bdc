use crate::action::{self, Action};
use crate::config::Config;
use crate::error::RedraftError;
use crate::host::Host;
use crate::provider::{self, Provider};

/// Run one correction invocation end to end: guard the selection, resolve the
/// prompt, pick a provider, call it, deliver the result. Never returns an
/// error — every failure is normalized to a single `host.notify` call, so the
/// user always gets either the corrected text or exactly one notice.
pub async fn run(
    host: &dyn Host,
    action_name: &str,
    text: &str,
    copy_instead: bool,
    config: &Config,
) {
    if text.trim().is_empty() {
        host.notify("No text selected");
        return;
    }

    match correct(host, action_name, text, config).await {
        Ok(corrected) => deliver(host, &corrected, copy_instead),
        Err(e) => {
            tracing::error!(error = %e, action = action_name, "correction failed");
            host.notify(&e.user_message());
        }
    }
}

async fn correct(
    host: &dyn Host,
    action_name: &str,
    text: &str,
    config: &Config,
) -> Result<String, RedraftError> {
    let action = Action::from_name(action_name);
    let prompt = action::resolve_prompt(action, config);

    let selection = provider::select(config)?;
    if let Some(notice) = &selection.notice {
        host.notify(notice);
    }

    Provider::new(selection.provider)
        .correct(&prompt, text, config)
        .await
}

/// Hand the corrected text to the host. Exactly one of paste or copy is the
/// terminal action; copy is the universal fallback when paste fails at the
/// host level. The text passes through unmodified.
pub fn deliver(host: &dyn Host, text: &str, copy_instead: bool) {
    if copy_instead {
        host.copy(text);
        host.notify("Copied corrected text to clipboard");
        return;
    }

    if let Err(e) = host.paste(text) {
        tracing::warn!(error = %e, "paste failed, copying instead");
        host.copy(text);
        host.notify("Paste failed - corrected text copied to clipboard");
    }
}
