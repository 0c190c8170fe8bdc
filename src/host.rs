use crate::error::RedraftError;

/// Capabilities the embedding host must provide. Passed explicitly into the
/// pipeline entry point so the core stays testable without a real host.
pub trait Host: Send + Sync {
    /// Show a short transient status or error message to the user.
    fn notify(&self, message: &str);

    /// Paste text into the application the selection came from. A failure
    /// here is host-level (focus lost, input blocked) and is recovered by
    /// falling back to `copy`.
    fn paste(&self, text: &str) -> Result<(), RedraftError>;

    /// Put text on the system clipboard. The universal fallback; assumed not
    /// to fail.
    fn copy(&self, text: &str);
}
