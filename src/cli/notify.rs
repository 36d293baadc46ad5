use anyhow::Result;

use crate::notify::{DesktopNotifier, NotificationOptions, Notifier};
use crate::relay::NOTIFICATION_ICON;

pub fn run(title: String, body: Option<String>) -> Result<()> {
    let options = NotificationOptions {
        body,
        icon: NOTIFICATION_ICON.to_string(),
    };
    DesktopNotifier.show(&title, &options)?;

    println!("Notification shown: {}", title);
    Ok(())
}
