use serde::Serialize;

/// Options forwarded with a display request, mirroring the options
/// record of the web notification API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub icon: String,
}
