// Shared test fixture for event records and raw form submissions.
// Defaults come from `json/event_submission.json`, the payload the web form sends.

use crate::modules::events::core::event_record::{EventRecord, parse_date, parse_time};
use crate::modules::events::use_cases::add_event::submission::EventSubmission;

pub const EVENT_SUBMISSION_JSON: &str = include_str!("json/event_submission.json");

pub fn make_event_submission() -> EventSubmission {
    serde_json::from_str(EVENT_SUBMISSION_JSON).unwrap()
}

pub struct EventRecordBuilder {
    inner: EventRecord,
}

impl Default for EventRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventRecord::try_from(make_event_submission()).unwrap(),
        }
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = parse_date(v).unwrap();
        self
    }

    pub fn time(mut self, v: &str) -> Self {
        self.inner.time = parse_time(v).unwrap();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn place(mut self, v: impl Into<String>) -> Self {
        self.inner.place = v.into();
        self
    }

    pub fn city(mut self, v: Option<&str>) -> Self {
        self.inner.city = v.map(str::to_string);
        self
    }

    pub fn comment(mut self, v: impl Into<String>) -> Self {
        self.inner.comment = v.into();
        self
    }

    pub fn build(self) -> EventRecord {
        self.inner
    }
}

#[cfg(test)]
mod event_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventRecordBuilder::default().build();
        assert_eq!(built.date_text(), "15.03.2025");
        assert_eq!(built.time_text(), "19:00");
        assert_eq!(built.title, "Чайка");
        assert_eq!(built.place, "МХТ им. Чехова");
        assert_eq!(built.city.as_deref(), Some("Москва"));
        assert_eq!(built.comment, "Партер, 5 ряд");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EventRecordBuilder::new()
            .date("01.01.2026")
            .time("08:15")
            .title("t")
            .place("p")
            .city(None)
            .comment("c")
            .build();
        assert_eq!(custom.date_text(), "01.01.2026");
        assert_eq!(custom.time_text(), "08:15");
        assert_eq!(custom.title, "t");
        assert_eq!(custom.place, "p");
        assert_eq!(custom.city, None);
        assert_eq!(custom.comment, "c");
    }
}
