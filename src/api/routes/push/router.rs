//! Router for the push delivery API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};
use serde_json::Value;

use crate::api::state::AppState;
use crate::messaging::PushPayload;

type SharedState = Arc<RwLock<AppState>>;

// Deliver one background push message to the registered handler
async fn deliver_message(
    State(state): State<SharedState>,
    Json(payload): Json<PushPayload>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    {
        let state = state.read().expect("Unable to read shared state");
        state.messaging.dispatch(payload);
    }

    Ok(Json(serde_json::json!({"success": true})))
}

/// Create the push router
pub fn router() -> Router<SharedState> {
    Router::new().route("/message", axum::routing::post(deliver_message))
}
