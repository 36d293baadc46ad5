use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display fields of a push message, set by the sender when the
/// message should surface as a user-visible notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A push message as delivered by the messaging backend. Data-only
/// messages carry no `notification` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationContent>,
    // Opaque application key/value pairs. The relay does not interpret
    // these; they are carried for parity with the backend's wire shape.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}
