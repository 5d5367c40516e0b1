use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, error, warn};

use crate::shared::infrastructure::chat_transport::update::Update;
use crate::shell::state::AppState;

/// Accepts one pushed update and queues it for the dispatcher.
pub async fn handle(
    State(state): State<AppState>,
    Path(token): Path<String>,
    body: Result<Json<Update>, JsonRejection>,
) -> impl IntoResponse {
    if token != state.bot_token {
        warn!("webhook called with an unknown token");
        return StatusCode::NOT_FOUND.into_response();
    }

    let Json(update) = match body {
        Ok(b) => b,
        Err(rejection) => {
            error!(error = %rejection, "webhook payload rejected");
            return (StatusCode::INTERNAL_SERVER_ERROR, "error").into_response();
        }
    };

    let update_id = update.update_id;
    match state.inbound.send(update).await {
        Ok(()) => {
            debug!(update_id, "update queued");
            (StatusCode::OK, "ok").into_response()
        }
        Err(_) => {
            error!(update_id, "inbound queue closed");
            (StatusCode::INTERNAL_SERVER_ERROR, "error").into_response()
        }
    }
}
