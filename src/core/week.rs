//! Week resolution: map an optional `YYYY-MM-DD` anchor to the Monday-based
//! 7-day window shown by the weekly grid.

use crate::models::week::{DayDescriptor, WeekWindow};
use crate::utils::date::{self, monday_of, to_iso};
use chrono::{Days, NaiveDate};

/// Short weekday + short month + zero-padded day, e.g. "Thu Jun 13".
const LABEL_FORMAT: &str = "%a %b %d";

/// Pick the reference date for a week request.
/// Absent, empty or unparsable input falls back to `today`.
pub fn reference_date(input: Option<&str>, today: NaiveDate) -> NaiveDate {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(date::parse_date)
        .unwrap_or(today)
}

/// Build the window starting at the Monday of `reference`.
/// `None` when the window or one of its neighbour anchors is outside the
/// representable calendar.
fn window_at(reference: NaiveDate, today: NaiveDate) -> Option<WeekWindow> {
    let monday = monday_of(reference)?;

    let days = (0..7)
        .map(|i| {
            monday.checked_add_days(Days::new(i)).map(|d| DayDescriptor {
                label: d.format(LABEL_FORMAT).to_string(),
                iso: to_iso(d),
                is_today: d == today,
            })
        })
        .collect::<Option<Vec<_>>>()?;

    let prev = monday.checked_sub_days(Days::new(7))?;
    let next = monday.checked_add_days(Days::new(7))?;
    let this_week = monday_of(today).unwrap_or(monday);

    Some(WeekWindow {
        days,
        week_start: to_iso(monday),
        prev_week: to_iso(prev),
        next_week: to_iso(next),
        this_week: to_iso(this_week),
    })
}

/// Resolve the week containing `input` (or `today` when input is unusable).
///
/// Total over its input: never fails. `today` is injected so the result is
/// reproducible; it drives both the fallback and the `is_today` flags.
/// Dates too close to the calendar limits to carry a full window are treated
/// like any other unusable input.
pub fn resolve_week(input: Option<&str>, today: NaiveDate) -> WeekWindow {
    window_at(reference_date(input, today), today)
        .or_else(|| window_at(today, today))
        .or_else(|| window_at(NaiveDate::default(), today))
        .unwrap_or_default()
}
