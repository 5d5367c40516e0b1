use crate::modules::events::use_cases::add_event::handler::AddEventHandler;
use crate::modules::events::use_cases::query_events::handler::EventQueries;
use crate::shared::infrastructure::chat_transport::ChatTransport;
use crate::shared::infrastructure::chat_transport::update::Update;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application context, built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub add_event_handler: Arc<AddEventHandler<dyn EventStore>>,
    pub event_queries: Arc<EventQueries<dyn EventStore>>,
    pub transport: Arc<dyn ChatTransport>,
    pub inbound: mpsc::Sender<Update>,
    pub webapp_url: String,
    pub bot_token: String,
}

impl AppState {
    pub fn new(
        event_store: Arc<dyn EventStore>,
        transport: Arc<dyn ChatTransport>,
        inbound: mpsc::Sender<Update>,
        webapp_url: impl Into<String>,
        bot_token: impl Into<String>,
    ) -> Self {
        Self {
            add_event_handler: Arc::new(AddEventHandler::new(event_store.clone())),
            event_queries: Arc::new(EventQueries::new(event_store)),
            transport,
            inbound,
            webapp_url: webapp_url.into(),
            bot_token: bot_token.into(),
        }
    }
}
