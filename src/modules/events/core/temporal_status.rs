use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalStatus {
    Past,
    Upcoming,
}

impl TemporalStatus {
    /// Strictly earlier than `now` is past; `now` itself already counts as upcoming.
    pub fn of(instant: NaiveDateTime, now: NaiveDateTime) -> Self {
        if instant < now {
            TemporalStatus::Past
        } else {
            TemporalStatus::Upcoming
        }
    }
}
