use crate::modules::events::core::event_record::{
    EventRecord, InvalidEventFormat, parse_date, parse_time,
};
use serde::Deserialize;

/// Raw form payload, before the date and time are validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventSubmission {
    pub date: String,
    pub time: String,
    pub title: String,
    pub place: String,
    #[serde(default)]
    pub city: Option<String>,
    pub comment: String,
}

impl EventSubmission {
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl TryFrom<EventSubmission> for EventRecord {
    type Error = InvalidEventFormat;

    fn try_from(submission: EventSubmission) -> Result<Self, Self::Error> {
        Ok(EventRecord {
            date: parse_date(&submission.date)?,
            time: parse_time(&submission.time)?,
            title: submission.title,
            place: submission.place,
            city: submission.city,
            comment: submission.comment,
        })
    }
}

#[cfg(test)]
mod event_submission_tests {
    use super::*;
    use crate::tests::fixtures::event_record::{EVENT_SUBMISSION_JSON, make_event_submission};
    use rstest::rstest;

    #[rstest]
    fn it_should_decode_the_form_payload() {
        let submission = EventSubmission::decode(EVENT_SUBMISSION_JSON).unwrap();
        assert_eq!(submission.title, "Чайка");
        assert_eq!(submission.city.as_deref(), Some("Москва"));
    }

    #[rstest]
    fn it_should_decode_a_payload_without_city() {
        let raw = r#"{"date":"15.03.2025","time":"19:00","title":"t","place":"p","comment":"c"}"#;
        assert_eq!(EventSubmission::decode(raw).unwrap().city, None);
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"date":"15.03.2025","time":"19:00","title":"t","place":"p"}"#)]
    #[case(r#"{"date":"15.03.2025","time":"19:00","title":"t","place":"p","comment":"c","price":5}"#)]
    #[case(r#"["15.03.2025","19:00"]"#)]
    fn it_should_refuse_a_malformed_payload(#[case] raw: &str) {
        assert!(EventSubmission::decode(raw).is_err());
    }

    #[rstest]
    fn it_should_validate_into_a_record() {
        let record = EventRecord::try_from(make_event_submission()).unwrap();
        assert_eq!(record.date_text(), "15.03.2025");
        assert_eq!(record.comment, "Партер, 5 ряд");
    }

    #[rstest]
    fn it_should_reject_an_impossible_date() {
        let submission = EventSubmission {
            date: "31.02.2025".into(),
            ..make_event_submission()
        };
        assert_eq!(
            EventRecord::try_from(submission),
            Err(InvalidEventFormat::Date("31.02.2025".into()))
        );
    }

    #[rstest]
    fn it_should_reject_a_malformed_time() {
        let submission = EventSubmission {
            time: "7pm".into(),
            ..make_event_submission()
        };
        assert_eq!(
            EventRecord::try_from(submission),
            Err(InvalidEventFormat::Time("7pm".into()))
        );
    }
}
