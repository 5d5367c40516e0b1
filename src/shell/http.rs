use axum::{Router, http::Request, routing::post};
use tower_http::trace::TraceLayer;

use crate::modules::events::adapters::inbound::webhook;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook/{token}", post(webhook::handle))
        .layer(
            // The path carries the bot token, so spans record the method only.
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!("webhook", method = %request.method())
            }),
        )
        .with_state(state)
}
