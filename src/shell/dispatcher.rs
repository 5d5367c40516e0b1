use crate::modules::events::adapters::inbound::chat::handle_update;
use crate::shared::infrastructure::chat_transport::update::Update;
use crate::shell::state::AppState;
use chrono::{Local, NaiveDateTime};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Single consumer of the inbound queue, so updates are handled one at a time.
pub async fn run(state: AppState, mut inbound: mpsc::Receiver<Update>) {
    while let Some(update) = inbound.recv().await {
        dispatch(&state, update, Local::now().naive_local()).await;
    }
    info!("inbound queue closed, dispatcher stopped");
}

pub async fn dispatch(state: &AppState, update: Update, now: NaiveDateTime) {
    let update_id = update.update_id;
    let Some(reply) = handle_update(state, update, now).await else {
        debug!(update_id, "update ignored");
        return;
    };
    let chat_id = reply.chat_id;
    if let Err(e) = state.transport.send(reply).await {
        error!(update_id, chat_id, error = %e, "failed to send reply");
    }
}
