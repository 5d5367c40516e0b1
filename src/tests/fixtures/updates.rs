// Builders for inbound chat updates as the transport delivers them.

use crate::shared::infrastructure::chat_transport::update::{Chat, Message, Update, WebAppData};

pub const CHAT_ID: i64 = 100_200_300;

fn message(chat_id: i64) -> Message {
    Message {
        message_id: 1,
        chat: Chat { id: chat_id },
        text: None,
        web_app_data: None,
    }
}

pub fn text_update(chat_id: i64, text: &str) -> Update {
    Update {
        update_id: 1,
        message: Some(Message {
            text: Some(text.to_string()),
            ..message(chat_id)
        }),
    }
}

pub fn web_app_update(chat_id: i64, data: &str) -> Update {
    Update {
        update_id: 1,
        message: Some(Message {
            web_app_data: Some(WebAppData {
                data: data.to_string(),
                button_text: "Добавить мероприятие".to_string(),
            }),
            ..message(chat_id)
        }),
    }
}
