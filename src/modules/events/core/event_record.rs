// Validated event record.
//
// Purpose
// - Hold one submitted event with a parsed calendar date and clock time.
//
// Responsibilities
// - Enforce the fixed textual patterns DD.MM.YYYY and HH:MM when a record is built.
// - Serialize back to exactly those patterns so the persisted document stays stable.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidEventFormat {
    #[error("date '{0}' does not match DD.MM.YYYY")]
    Date(String),

    #[error("time '{0}' does not match HH:MM")]
    Time(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventRecord {
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    pub title: String,
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub comment: String,
}

impl EventRecord {
    /// The instant the event starts, used for every chronological comparison.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_text(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// `shape` is the expected pattern with `9` standing for an ASCII digit.
fn matches_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'9' => c.is_ascii_digit(),
            _ => c == s,
        })
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InvalidEventFormat> {
    if !matches_shape(raw, "99.99.9999") {
        return Err(InvalidEventFormat::Date(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| InvalidEventFormat::Date(raw.to_string()))
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, InvalidEventFormat> {
    if !matches_shape(raw, "99:99") {
        return Err(InvalidEventFormat::Time(raw.to_string()));
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| InvalidEventFormat::Time(raw.to_string()))
}

mod date_format {
    use super::{DATE_FORMAT, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

mod time_format {
    use super::{TIME_FORMAT, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod event_record_tests {
    use super::*;
    use crate::tests::fixtures::event_record::EventRecordBuilder;
    use rstest::rstest;

    #[rstest]
    #[case("15.03.2025", 2025, 3, 15)]
    #[case("29.02.2024", 2024, 2, 29)]
    #[case("01.01.2025", 2025, 1, 1)]
    fn it_should_parse_a_well_formed_date(
        #[case] raw: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        assert_eq!(parse_date(raw), Ok(NaiveDate::from_ymd_opt(year, month, day).unwrap()));
    }

    #[rstest]
    #[case("31.02.2025")]
    #[case("29.02.2025")]
    #[case("1.3.2025")]
    #[case("2025-03-15")]
    #[case("15.03.25")]
    #[case("15.13.2025")]
    #[case("")]
    fn it_should_reject_a_malformed_date(#[case] raw: &str) {
        assert_eq!(parse_date(raw), Err(InvalidEventFormat::Date(raw.to_string())));
    }

    #[rstest]
    #[case("00:00", 0, 0)]
    #[case("09:05", 9, 5)]
    #[case("23:59", 23, 59)]
    fn it_should_parse_a_well_formed_time(#[case] raw: &str, #[case] hour: u32, #[case] minute: u32) {
        assert_eq!(parse_time(raw), Ok(NaiveTime::from_hms_opt(hour, minute, 0).unwrap()));
    }

    #[rstest]
    #[case("24:00")]
    #[case("9:05")]
    #[case("12:60")]
    #[case("12.30")]
    #[case("12:30:00")]
    fn it_should_reject_a_malformed_time(#[case] raw: &str) {
        assert_eq!(parse_time(raw), Err(InvalidEventFormat::Time(raw.to_string())));
    }

    #[rstest]
    fn it_should_serialize_in_the_persisted_format() {
        let record = EventRecordBuilder::new().date("05.04.2025").time("07:30").city(None).build();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "05.04.2025");
        assert_eq!(json["time"], "07:30");
        assert!(json.get("city").is_none());
    }

    #[rstest]
    fn it_should_read_a_record_without_city() {
        let json = r#"{"date":"15.03.2025","time":"19:00","title":"Чайка","place":"МХТ","comment":""}"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.city, None);
        assert_eq!(record.date_text(), "15.03.2025");
        assert_eq!(record.time_text(), "19:00");
    }

    #[rstest]
    fn it_should_refuse_a_persisted_record_with_an_invalid_date() {
        let json = r#"{"date":"31.02.2025","time":"19:00","title":"t","place":"p","comment":""}"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }

    #[rstest]
    fn it_should_combine_date_and_time_into_the_start_instant() {
        let record = EventRecordBuilder::new().date("15.03.2025").time("10:00").build();
        assert_eq!(
            record.starts_at(),
            NaiveDate::from_ymd_opt(2025, 3, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }
}
