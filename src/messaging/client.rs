use std::sync::RwLock;

use anyhow::{Result, anyhow};

use super::models::PushPayload;
use crate::core::AppConfig;

type BackgroundMessageCallback = Box<dyn Fn(PushPayload) + Send + Sync>;

/// Client for the push-messaging backend. Holds the single background
/// message handler and runs it once per delivered message.
pub struct MessagingClient {
    project_id: String,
    callback: RwLock<Option<BackgroundMessageCallback>>,
}

impl std::fmt::Debug for MessagingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessagingClient")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl MessagingClient {
    /// Initialize the client from the project configuration. Fails when
    /// a required project identifier is missing so that a bad config
    /// surfaces at startup instead of on first delivery.
    pub fn initialize(config: &AppConfig) -> Result<Self> {
        for (field, value) in [
            ("api_key", &config.api_key),
            ("project_id", &config.project_id),
            ("messaging_sender_id", &config.messaging_sender_id),
            ("app_id", &config.app_id),
        ] {
            if value.is_empty() {
                return Err(anyhow!("Invalid messaging config: {} is empty", field));
            }
        }

        tracing::debug!(
            "Initialized messaging client for project {}",
            config.project_id
        );

        Ok(Self {
            project_id: config.project_id.clone(),
            callback: RwLock::new(None),
        })
    }

    /// Register the handler invoked for each background message. Only
    /// one handler is held at a time; registering again replaces the
    /// previous one.
    pub fn on_background_message<F>(&self, callback: F)
    where
        F: Fn(PushPayload) + Send + Sync + 'static,
    {
        let mut slot = self
            .callback
            .write()
            .expect("Unable to write message callback");
        *slot = Some(Box::new(callback));
    }

    /// Deliver one background message. The registered handler runs to
    /// completion before this returns; messages arriving before any
    /// handler is registered are dropped.
    pub fn dispatch(&self, payload: PushPayload) {
        let callback = self
            .callback
            .read()
            .expect("Unable to read message callback");
        match callback.as_ref() {
            Some(callback) => callback(payload),
            None => tracing::warn!(
                "Dropping message for project {}: no background message handler registered",
                self.project_id
            ),
        }
    }
}
