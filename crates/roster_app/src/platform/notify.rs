use roster_core::{Notification, Severity};
use roster_logging::{roster_info, roster_warn};

/// Receives transient notifications. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Headless notifier: every toast becomes a log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity() {
            Severity::Success => roster_info!("[toast] {}", notification.message()),
            Severity::Error => roster_warn!("[toast] {}", notification.message()),
        }
    }
}
