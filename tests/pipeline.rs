use std::sync::Mutex;

use redraft::config::Config;
use redraft::error::RedraftError;
use redraft::host::Host;
use redraft::pipeline;

/// Records every host interaction so tests can assert on the exact terminal
/// action and notice sequence.
struct RecordingHost {
    notices: Mutex<Vec<String>>,
    pasted: Mutex<Vec<String>>,
    copied: Mutex<Vec<String>>,
    fail_paste: bool,
}

impl RecordingHost {
    fn new() -> Self {
        Self {
            notices: Mutex::new(vec![]),
            pasted: Mutex::new(vec![]),
            copied: Mutex::new(vec![]),
            fail_paste: false,
        }
    }

    fn with_failing_paste() -> Self {
        Self {
            fail_paste: true,
            ..Self::new()
        }
    }

    fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    fn pasted(&self) -> Vec<String> {
        self.pasted.lock().unwrap().clone()
    }

    fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn paste(&self, text: &str) -> Result<(), RedraftError> {
        if self.fail_paste {
            return Err(RedraftError::HostAction("paste rejected".to_string()));
        }
        self.pasted.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn copy(&self, text: &str) {
        self.copied.lock().unwrap().push(text.to_string());
    }
}

#[tokio::test]
async fn empty_selection_short_circuits_with_notice() {
    let host = RecordingHost::new();
    let config = Config {
        openai_apikey: Some("sk-test".to_string()),
        ..Config::default()
    };

    pipeline::run(&host, "Fix Grammar", "   \n\t ", false, &config).await;

    assert_eq!(host.notices(), vec!["No text selected"]);
    assert!(host.pasted().is_empty());
    assert!(host.copied().is_empty());
}

#[tokio::test]
async fn no_keys_configured_shows_config_notice_without_network() {
    let host = RecordingHost::new();
    let config = Config::default();

    pipeline::run(&host, "Fix Grammar", "i has went to the store", false, &config).await;

    // Exactly one notice, nothing delivered. No network call happens because
    // selection fails before any adapter is built.
    assert_eq!(
        host.notices(),
        vec!["No API key configured - set an OpenAI or Gemini API key"]
    );
    assert!(host.pasted().is_empty());
    assert!(host.copied().is_empty());
}

#[test]
fn copy_flag_copies_exact_string_with_confirmation() {
    let host = RecordingHost::new();
    let corrected = "I went to the store yesterday.";

    pipeline::deliver(&host, corrected, true);

    assert_eq!(host.copied(), vec![corrected.to_string()]);
    assert!(host.pasted().is_empty());
    assert_eq!(host.notices(), vec!["Copied corrected text to clipboard"]);
}

#[test]
fn copy_flag_wins_even_when_paste_would_fail() {
    let host = RecordingHost::with_failing_paste();

    pipeline::deliver(&host, "text", true);

    assert_eq!(host.copied(), vec!["text".to_string()]);
    assert!(host.pasted().is_empty());
}

#[test]
fn paste_is_terminal_action_when_it_succeeds() {
    let host = RecordingHost::new();

    pipeline::deliver(&host, "I went to the store yesterday.", false);

    assert_eq!(host.pasted(), vec!["I went to the store yesterday.".to_string()]);
    assert!(host.copied().is_empty());
    assert!(host.notices().is_empty());
}

#[test]
fn paste_failure_falls_back_to_copy_with_distinct_notice() {
    let host = RecordingHost::with_failing_paste();

    pipeline::deliver(&host, "fixed text", false);

    assert!(host.pasted().is_empty());
    assert_eq!(host.copied(), vec!["fixed text".to_string()]);
    assert_eq!(
        host.notices(),
        vec!["Paste failed - corrected text copied to clipboard"]
    );
}

#[test]
fn dispatch_path_never_mutates_text() {
    let host = RecordingHost::new();
    // Whitespace and unicode survive the dispatch path untouched.
    let text = "  déjà vu —\n\ttabs and trailing spaces  ";

    pipeline::deliver(&host, text, true);

    assert_eq!(host.copied(), vec![text.to_string()]);
}
