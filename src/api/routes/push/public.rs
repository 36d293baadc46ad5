//! Public types for the push delivery API

pub use crate::messaging::models::{NotificationContent, PushPayload};
