use crate::core::AppConfig;
use crate::messaging::MessagingClient;

pub struct AppState {
    pub messaging: MessagingClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(messaging: MessagingClient, config: AppConfig) -> Self {
        Self { messaging, config }
    }
}
