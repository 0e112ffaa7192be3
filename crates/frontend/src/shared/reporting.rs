//! Failure sink and user notifications
//!
//! Failures are reported and the UI carries on; nothing here is retried.

use super::api_error::RequestError;

/// Observability sink for request failures
pub trait FailureSink: Send + Sync {
    fn report(&self, operation: &str, error: &RequestError);
}

/// Default sink: browser console via the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl FailureSink for LogSink {
    fn report(&self, operation: &str, error: &RequestError) {
        log::error!("{} failed: {}", operation, error);
    }
}

/// User-visible announcement
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Announces through `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        log::info!("{}", message);
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }
}
