use chrono::{Datelike, Days, NaiveDate};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_FORMAT).ok()
}

pub fn to_iso(d: NaiveDate) -> String {
    d.format(ISO_FORMAT).to_string()
}

/// Monday of the calendar week containing `d` (Monday = offset 0 … Sunday = 6).
/// `None` when that Monday falls before the earliest representable date.
pub fn monday_of(d: NaiveDate) -> Option<NaiveDate> {
    d.checked_sub_days(Days::new(u64::from(d.weekday().num_days_from_monday())))
}
