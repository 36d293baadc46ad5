//! Test utilities for integration tests
use std::sync::{Arc, Mutex, RwLock};

use axum::Router;
use axum::body::Body;

use push_relay::api::AppState;
use push_relay::api::app;
use push_relay::core::AppConfig;
use push_relay::messaging::MessagingClient;
use push_relay::notify::{NotificationOptions, Notifier};
use push_relay::relay::Relay;

/// Records every display request instead of talking to the operating
/// system's notification service.
#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<(String, NotificationOptions)>>,
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

pub fn test_config() -> AppConfig {
    AppConfig {
        api_key: String::from("test-api-key"),
        auth_domain: String::from("test-project.firebaseapp.com"),
        project_id: String::from("test-project"),
        storage_bucket: String::from("test-project.firebasestorage.app"),
        messaging_sender_id: String::from("412251493918"),
        app_id: String::from("1:412251493918:web:test"),
        measurement_id: None,
    }
}

/// Creates a test application router with a recording notifier standing
/// in for the desktop notification service.
pub async fn test_app() -> (Router, Arc<RecordingNotifier>) {
    let config = test_config();
    let notifier = Arc::new(RecordingNotifier::default());

    let messaging = MessagingClient::initialize(&config)
        .expect("Failed to initialize messaging client");
    let relay = Relay::new(notifier.clone());
    messaging.on_background_message(move |payload| relay.handle_background_message(payload));

    let app_state = AppState::new(messaging, config);
    let app = app(Arc::new(RwLock::new(app_state)));

    (app, notifier)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
