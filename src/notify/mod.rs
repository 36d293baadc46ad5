pub mod models;
pub use models::*;

use anyhow::Result;
use notify_rust::Notification;

/// The host's notification-display capability. The relay only ever
/// talks to this seam so the operating system integration stays
/// swappable in tests.
pub trait Notifier: Send + Sync {
    fn show(&self, title: &str, options: &NotificationOptions) -> Result<()>;
}

/// Shows notifications through the operating system's notification
/// service.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn show(&self, title: &str, options: &NotificationOptions) -> Result<()> {
        let mut notification = Notification::new();
        notification.summary(title).icon(&options.icon);
        if let Some(body) = &options.body {
            notification.body(body);
        }
        notification.show()?;
        Ok(())
    }
}
