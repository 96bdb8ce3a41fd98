//! Telegram webhook handler

mod process;
pub mod types;

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use self::types::TelegramUpdate;
use crate::api::ApiState;

/// Handle an incoming Telegram update
///
/// Always acknowledges with 200 and an empty body — the real effect is the
/// reply sent back through the Bot API, never the webhook response.
/// Processing failures are logged and still acknowledged.
pub async fn handle_update(
    State(state): State<Arc<ApiState>>,
    Json(update): Json<TelegramUpdate>,
) -> StatusCode {
    let Some(channel) = &state.channel else {
        tracing::debug!("no chat token configured, dropping update");
        return StatusCode::OK;
    };

    let Some(message) = update.message else {
        tracing::debug!(update_id = update.update_id, "update without message, dropping");
        return StatusCode::OK;
    };

    tracing::debug!(
        update_id = update.update_id,
        chat_id = message.chat.id,
        "received Telegram update"
    );

    if let Err(e) = process::dispatch(&state, channel.as_ref(), &message).await {
        tracing::error!(
            error = %e,
            update_id = update.update_id,
            "Telegram update processing failed"
        );
    }

    StatusCode::OK
}
