// Chat adapter: turns one inbound update into at most one reply.
//
// Responsibilities
// - Recognise commands, keyboard buttons and web form submissions.
// - Call the add and query use cases for the chat the update came from.
// - Convert every error into a reply text plus a server side log entry.

use crate::modules::events::adapters::inbound::replies;
use crate::modules::events::core::chat_scope::ChatScope;
use crate::modules::events::use_cases::add_event::handler::ApplicationError;
use crate::shared::infrastructure::chat_transport::OutboundMessage;
use crate::shared::infrastructure::chat_transport::update::{Message, Update};
use crate::shell::state::AppState;
use chrono::NaiveDateTime;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Start,
    List,
    Next,
    AddEvent(String),
    /// Edit, reschedule and delete have buttons but no store operation yet.
    NotAvailable,
}

impl ChatCommand {
    pub fn parse(message: &Message) -> Option<Self> {
        if let Some(web_app_data) = &message.web_app_data {
            return Some(ChatCommand::AddEvent(web_app_data.data.clone()));
        }
        let text = message.text.as_deref()?.trim();
        if let Some(command) = text.strip_prefix('/') {
            // "/list@TeatralyBot extra" addresses the bot explicitly in group chats.
            let name = command
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .split('@')
                .next()
                .unwrap_or_default();
            return match name {
                "start" => Some(ChatCommand::Start),
                "list" => Some(ChatCommand::List),
                "next" => Some(ChatCommand::Next),
                _ => None,
            };
        }
        match text {
            replies::BUTTON_LIST => Some(ChatCommand::List),
            replies::BUTTON_NEXT => Some(ChatCommand::Next),
            replies::BUTTON_EDIT | replies::BUTTON_RESCHEDULE | replies::BUTTON_DELETE => {
                Some(ChatCommand::NotAvailable)
            }
            _ => None,
        }
    }
}

pub async fn handle_update(state: &AppState, update: Update, now: NaiveDateTime) -> Option<OutboundMessage> {
    let message = update.message?;
    let chat_id = message.chat.id;
    let command = ChatCommand::parse(&message)?;
    let scope = ChatScope::from(chat_id);

    let text = match command {
        ChatCommand::Start => {
            return Some(
                OutboundMessage::text(chat_id, replies::WELCOME)
                    .with_keyboard(replies::main_keyboard(&state.webapp_url)),
            );
        }
        ChatCommand::AddEvent(payload) => match state.add_event_handler.handle(&scope, &payload).await {
            Ok(record) => {
                info!(chat_id, title = %record.title, date = %record.date_text(), "event added");
                replies::EVENT_ADDED.to_string()
            }
            Err(ApplicationError::InvalidEventFormat(e)) => {
                warn!(chat_id, error = %e, "event rejected");
                replies::INVALID_FORMAT.to_string()
            }
            Err(e) => {
                error!(chat_id, error = %e, "failed to add event");
                replies::ADD_FAILED.to_string()
            }
        },
        ChatCommand::List => match state.event_queries.list_chronological(&scope, now).await {
            Ok(chronology) => replies::render_chronology(&chronology),
            Err(e) => {
                error!(chat_id, error = %e, "failed to list events");
                replies::LOAD_FAILED.to_string()
            }
        },
        ChatCommand::Next => match state.event_queries.find_next(&scope).await {
            Ok(next) => replies::render_next(next.as_ref()),
            Err(e) => {
                error!(chat_id, error = %e, "failed to find next event");
                replies::LOAD_FAILED.to_string()
            }
        },
        ChatCommand::NotAvailable => replies::NOT_AVAILABLE.to_string(),
    };
    Some(OutboundMessage::text(chat_id, text))
}

#[cfg(test)]
mod chat_adapter_tests {
    use super::*;
    use crate::modules::events::core::store_document::StoreLayout;
    use crate::shared::infrastructure::chat_transport::in_memory::InMemoryChatTransport;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::tests::fixtures::event_record::EVENT_SUBMISSION_JSON;
    use crate::tests::fixtures::updates::{CHAT_ID, text_update, web_app_update};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn make_state(event_store: InMemoryEventStore) -> AppState {
        let (inbound, _) = mpsc::channel(1);
        AppState::new(
            Arc::new(event_store),
            Arc::new(InMemoryChatTransport::new()),
            inbound,
            "https://example.org/form",
            "123:abc",
        )
    }

    #[fixture]
    fn state() -> AppState {
        make_state(InMemoryEventStore::new(StoreLayout::Scoped))
    }

    #[fixture]
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    async fn reply_text(state: &AppState, update: Update, now: NaiveDateTime) -> String {
        handle_update(state, update, now)
            .await
            .expect("expected a reply")
            .text
    }

    #[rstest]
    #[case("/start", Some(ChatCommand::Start))]
    #[case("/list", Some(ChatCommand::List))]
    #[case("/next@TeatralyBot", Some(ChatCommand::Next))]
    #[case(" /list now ", Some(ChatCommand::List))]
    #[case(replies::BUTTON_LIST, Some(ChatCommand::List))]
    #[case(replies::BUTTON_NEXT, Some(ChatCommand::Next))]
    #[case(replies::BUTTON_DELETE, Some(ChatCommand::NotAvailable))]
    #[case("/help", None)]
    #[case("hello", None)]
    fn it_should_parse_commands_and_buttons(#[case] text: &str, #[case] expected: Option<ChatCommand>) {
        let update = text_update(CHAT_ID, text);
        assert_eq!(ChatCommand::parse(&update.message.unwrap()), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_welcome_with_the_form_keyboard(state: AppState, now: NaiveDateTime) {
        let reply = handle_update(&state, text_update(CHAT_ID, "/start"), now)
            .await
            .unwrap();
        assert_eq!(reply.chat_id, CHAT_ID);
        assert_eq!(reply.text, replies::WELCOME);
        assert_eq!(reply.keyboard, Some(replies::main_keyboard("https://example.org/form")));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_add_then_list_and_find_the_event(state: AppState, now: NaiveDateTime) {
        assert_eq!(
            reply_text(&state, web_app_update(CHAT_ID, EVENT_SUBMISSION_JSON), now).await,
            replies::EVENT_ADDED
        );
        let listing = reply_text(&state, text_update(CHAT_ID, "/list"), now).await;
        assert_eq!(listing.matches("Чайка").count(), 1);
        let next = reply_text(&state, text_update(CHAT_ID, replies::BUTTON_NEXT), now).await;
        assert!(next.contains("Чайка"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_answer_empty_listings(state: AppState, now: NaiveDateTime) {
        assert_eq!(reply_text(&state, text_update(CHAT_ID, "/list"), now).await, replies::LIST_EMPTY);
        assert_eq!(reply_text(&state, text_update(CHAT_ID, "/next"), now).await, replies::NEXT_EMPTY);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_chats_apart(state: AppState, now: NaiveDateTime) {
        reply_text(&state, web_app_update(CHAT_ID, EVENT_SUBMISSION_JSON), now).await;
        assert_eq!(
            reply_text(&state, text_update(CHAT_ID + 1, "/list"), now).await,
            replies::LIST_EMPTY
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ask_for_the_picker_on_an_invalid_date(state: AppState, now: NaiveDateTime) {
        let payload = r#"{"date":"31.02.2025","time":"19:00","title":"t","place":"p","comment":"c"}"#;
        assert_eq!(
            reply_text(&state, web_app_update(CHAT_ID, payload), now).await,
            replies::INVALID_FORMAT
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_answer_generically_on_a_malformed_payload(state: AppState, now: NaiveDateTime) {
        assert_eq!(
            reply_text(&state, web_app_update(CHAT_ID, "<html>"), now).await,
            replies::ADD_FAILED
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_answer_generically_when_storage_fails(now: NaiveDateTime) {
        let mut store = InMemoryEventStore::default();
        store.toggle_offline();
        let state = make_state(store);
        assert_eq!(
            reply_text(&state, web_app_update(CHAT_ID, EVENT_SUBMISSION_JSON), now).await,
            replies::ADD_FAILED
        );
        assert_eq!(reply_text(&state, text_update(CHAT_ID, "/list"), now).await, replies::LOAD_FAILED);
        assert_eq!(reply_text(&state, text_update(CHAT_ID, "/next"), now).await, replies::LOAD_FAILED);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reply_that_editing_is_not_available(state: AppState, now: NaiveDateTime) {
        assert_eq!(
            reply_text(&state, text_update(CHAT_ID, replies::BUTTON_EDIT), now).await,
            replies::NOT_AVAILABLE
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ignore_unrelated_updates(state: AppState, now: NaiveDateTime) {
        assert!(handle_update(&state, text_update(CHAT_ID, "спасибо"), now).await.is_none());
        let without_message = Update {
            update_id: 2,
            message: None,
        };
        assert!(handle_update(&state, without_message, now).await.is_none());
    }
}
