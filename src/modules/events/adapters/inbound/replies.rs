// User facing reply texts and their rendering.
//
// Responsibilities
// - Keep every string the bot sends in one place.
// - Render records, chronological listings and the main keyboard.

use crate::modules::events::core::event_record::EventRecord;
use crate::modules::events::use_cases::query_events::chronology::{AnnotatedEvent, Chronology};
use crate::shared::infrastructure::chat_transport::{KeyboardButton, ReplyKeyboardMarkup};

pub const WELCOME: &str = "Добро пожаловать в 'Театралы' 🎭!";
pub const EVENT_ADDED: &str = "✅ Мероприятие добавлено!";
pub const ADD_FAILED: &str = "⚠️ Ошибка при добавлении мероприятия";
pub const INVALID_FORMAT: &str =
    "⚠️ Неверный формат даты или времени. Пожалуйста, выберите дату и время с помощью календаря и часов в форме.";
pub const LOAD_FAILED: &str = "⚠️ Не удалось загрузить мероприятия";
pub const LIST_EMPTY: &str = "Список мероприятий пуст 🗓️";
pub const NEXT_EMPTY: &str = "Нет запланированных мероприятий";
pub const NOT_AVAILABLE: &str = "🚧 Эта функция пока недоступна";

pub const BUTTON_ADD: &str = "Добавить мероприятие";
pub const BUTTON_LIST: &str = "📋 Все мероприятия";
pub const BUTTON_NEXT: &str = "🎯 Ближайшее мероприятие";
pub const BUTTON_EDIT: &str = "✏️ Редактировать";
pub const BUTTON_RESCHEDULE: &str = "🔁 Перенести";
pub const BUTTON_DELETE: &str = "🗑 Удалить";

pub fn main_keyboard(webapp_url: &str) -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup {
        keyboard: vec![
            vec![KeyboardButton::web_app(BUTTON_ADD, webapp_url)],
            vec![KeyboardButton::text(BUTTON_LIST), KeyboardButton::text(BUTTON_NEXT)],
            vec![
                KeyboardButton::text(BUTTON_EDIT),
                KeyboardButton::text(BUTTON_RESCHEDULE),
                KeyboardButton::text(BUTTON_DELETE),
            ],
        ],
        resize_keyboard: true,
    }
}

pub fn render_record(record: &EventRecord) -> String {
    let place = match &record.city {
        Some(city) if !city.is_empty() => format!("{}, {city}", record.place),
        _ => record.place.clone(),
    };
    format!(
        "{} {} — {}\n📍 {place}\n📝 {}",
        record.date_text(),
        record.time_text(),
        record.title,
        record.comment
    )
}

fn render_section(title: &str, events: &[&AnnotatedEvent]) -> Option<String> {
    if events.is_empty() {
        return None;
    }
    let body: Vec<String> = events.iter().map(|e| render_record(&e.record)).collect();
    Some(format!("{title}\n\n{}", body.join("\n\n")))
}

pub fn render_chronology(chronology: &Chronology) -> String {
    if let Chronology::Empty = chronology {
        return LIST_EMPTY.to_string();
    }
    let (past, upcoming) = chronology.partition();
    let sections: Vec<String> = [
        render_section("🔜 Предстоящие:", &upcoming),
        render_section("🕰 Прошедшие:", &past),
    ]
    .into_iter()
    .flatten()
    .collect();
    format!("📅 Все мероприятия:\n\n{}", sections.join("\n\n"))
}

pub fn render_next(next: Option<&EventRecord>) -> String {
    match next {
        Some(record) => format!("🎯 Ближайшее мероприятие:\n\n{}", render_record(record)),
        None => NEXT_EMPTY.to_string(),
    }
}
