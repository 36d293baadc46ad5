use std::env;

/// Project configuration for the push-messaging backend. Loaded once at
/// startup and held for the lifetime of the worker.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_key =
            env::var("PUSH_RELAY_API_KEY").expect("Missing env var PUSH_RELAY_API_KEY");
        let project_id =
            env::var("PUSH_RELAY_PROJECT_ID").expect("Missing env var PUSH_RELAY_PROJECT_ID");
        let auth_domain = env::var("PUSH_RELAY_AUTH_DOMAIN")
            .unwrap_or_else(|_| format!("{}.firebaseapp.com", project_id));
        let storage_bucket = env::var("PUSH_RELAY_STORAGE_BUCKET")
            .unwrap_or_else(|_| format!("{}.firebasestorage.app", project_id));
        let messaging_sender_id =
            env::var("PUSH_RELAY_SENDER_ID").expect("Missing env var PUSH_RELAY_SENDER_ID");
        let app_id = env::var("PUSH_RELAY_APP_ID").expect("Missing env var PUSH_RELAY_APP_ID");
        // Analytics identity for the same project. The relay never uses
        // it but deployments configure it alongside the rest.
        let measurement_id = env::var("PUSH_RELAY_MEASUREMENT_ID").ok();

        Self {
            api_key,
            auth_domain,
            project_id,
            storage_bucket,
            messaging_sender_id,
            app_id,
            measurement_id,
        }
    }
}
