//! User-facing error notifications.
//!
//! The cart store never surfaces failures to callers as errors; it reports
//! them through a `Notifier` so the host UI can show a transient message
//! (toast, status line, ...). Fire and forget: no return value, no retry.

use tracing::error;

/// Capability for surfacing user-facing error messages.
pub trait Notifier: Send + Sync {
    fn report_error(&self, message: &str);
}

/// Default notifier that routes messages to the `tracing` error log.
///
/// Useful for headless embedders and as a stand-in until the host UI
/// wires up a real presentation layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn report_error(&self, message: &str) {
        error!(target: "cartcache::notify", "{message}");
    }
}
