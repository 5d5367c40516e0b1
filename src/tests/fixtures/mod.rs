pub mod event_record;
pub mod updates;
