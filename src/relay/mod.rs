//! Relays background push messages to the host notification service.

use std::sync::Arc;

use crate::messaging::PushPayload;
use crate::notify::{NotificationOptions, Notifier};

/// Icon shipped with the static web assets, shown on every
/// notification.
pub const NOTIFICATION_ICON: &str = "/icons/Icon-192.png";

pub struct Relay {
    notifier: Arc<dyn Notifier>,
}

impl Relay {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Handle one background message by requesting exactly one system
    /// notification with the message's title and body.
    ///
    /// Data-only messages carry no notification fields; those are
    /// logged and dropped instead of crashing the worker. Display is
    /// fire-and-forget: failures are logged and never retried.
    pub fn handle_background_message(&self, payload: PushPayload) {
        tracing::debug!("Received background message: {:?}", payload);

        let Some(notification) = payload.notification else {
            tracing::warn!("Dropping background message without notification fields");
            return;
        };

        let options = NotificationOptions {
            body: notification.body,
            icon: NOTIFICATION_ICON.to_string(),
        };

        if let Err(error) = self.notifier.show(&notification.title, &options) {
            tracing::error!("Failed to show notification: {:?}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::anyhow;

    use super::*;
    use crate::messaging::NotificationContent;

    #[derive(Default)]
    struct RecordingNotifier {
        shown: Mutex<Vec<(String, NotificationOptions)>>,
    }

    impl Notifier for RecordingNotifier {
        fn show(&self, title: &str, options: &NotificationOptions) -> anyhow::Result<()> {
            self.shown
                .lock()
                .unwrap()
                .push((title.to_string(), options.clone()));
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn show(&self, _title: &str, _options: &NotificationOptions) -> anyhow::Result<()> {
            Err(anyhow!("notification service unavailable"))
        }
    }

    fn payload(title: &str, body: Option<&str>) -> PushPayload {
        PushPayload {
            notification: Some(NotificationContent {
                title: title.to_string(),
                body: body.map(String::from),
            }),
            data: Default::default(),
        }
    }

    #[test]
    fn it_shows_one_notification_per_message() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = Relay::new(notifier.clone());

        relay.handle_background_message(payload("T", Some("B")));

        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "T");
        assert_eq!(shown[0].1.body.as_deref(), Some("B"));
        assert_eq!(shown[0].1.icon, NOTIFICATION_ICON);
    }

    #[test]
    fn it_shows_a_notification_without_a_body() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = Relay::new(notifier.clone());

        relay.handle_background_message(payload("T", None));

        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "T");
        assert!(shown[0].1.body.is_none());
    }

    #[test]
    fn it_keeps_consecutive_messages_independent() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = Relay::new(notifier.clone());

        relay.handle_background_message(payload("first", Some("one")));
        relay.handle_background_message(payload("second", Some("two")));

        let shown = notifier.shown.lock().unwrap();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].0, "first");
        assert_eq!(shown[0].1.body.as_deref(), Some("one"));
        assert_eq!(shown[1].0, "second");
        assert_eq!(shown[1].1.body.as_deref(), Some("two"));
    }

    #[test]
    fn it_drops_a_message_without_notification_fields() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = Relay::new(notifier.clone());

        relay.handle_background_message(PushPayload {
            notification: None,
            data: [(String::from("sync"), String::from("bookings"))].into(),
        });

        assert!(notifier.shown.lock().unwrap().is_empty());
    }

    #[test]
    fn it_ignores_display_failures() {
        let relay = Relay::new(Arc::new(FailingNotifier));

        // Must not panic or propagate
        relay.handle_background_message(payload("T", Some("B")));
    }
}
