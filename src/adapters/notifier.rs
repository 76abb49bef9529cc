use crate::core::Notifier;

/// Prints user-facing messages to stderr and mirrors them into the log.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn report_error(&self, message: &str) {
        tracing::warn!("Reported to user: {}", message);
        eprintln!("❌ {}", message);
    }
}
