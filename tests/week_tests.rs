use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rhabits::core::week::{reference_date, resolve_week};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn test_empty_week_on_thursday_resolves_to_current_monday() {
    let thursday = d(2024, 6, 13);
    let w = resolve_week(Some(""), thursday);

    assert_eq!(w.week_start, "2024-06-10");
    assert_eq!(w.this_week, "2024-06-10");

    let isos: Vec<&str> = w.days.iter().map(|day| day.iso.as_str()).collect();
    assert_eq!(
        isos,
        vec![
            "2024-06-10",
            "2024-06-11",
            "2024-06-12",
            "2024-06-13",
            "2024-06-14",
            "2024-06-15",
            "2024-06-16",
        ]
    );
}

#[test]
fn test_navigation_anchors() {
    let w = resolve_week(Some("2024-06-10"), d(2024, 6, 13));

    assert_eq!(w.prev_week, "2024-06-03");
    assert_eq!(w.next_week, "2024-06-17");
}

#[test]
fn test_labels_and_today_flag() {
    let w = resolve_week(None, d(2024, 6, 13));

    assert_eq!(w.days[0].label, "Mon Jun 10");
    assert_eq!(w.days[3].label, "Thu Jun 13");
    assert_eq!(w.days[6].label, "Sun Jun 16");

    let today_flags: Vec<bool> = w.days.iter().map(|day| day.is_today).collect();
    assert_eq!(
        today_flags,
        vec![false, false, false, true, false, false, false]
    );
}

#[test]
fn test_label_day_is_zero_padded() {
    let w = resolve_week(Some("2024-07-03"), d(2024, 6, 13));
    assert_eq!(w.days[0].label, "Mon Jul 01");
}

#[test]
fn test_invalid_input_behaves_like_today() {
    let today = d(2024, 6, 13);
    let expected = resolve_week(None, today);

    for bad in ["", "   ", "garbage", "2024-13-01", "2024-02-30", "13/06/2024", "2024-06"] {
        assert_eq!(
            resolve_week(Some(bad), today),
            expected,
            "input {:?} should fall back to today",
            bad
        );
    }
}

#[test]
fn test_input_is_trimmed_before_parsing() {
    let today = d(2024, 6, 13);
    assert_eq!(reference_date(Some(" 2024-01-17 "), today), d(2024, 1, 17));
}

#[test]
fn test_sunday_belongs_to_the_week_before() {
    let w = resolve_week(Some("2024-06-16"), d(2024, 6, 13));
    assert_eq!(w.week_start, "2024-06-10");
}

#[test]
fn test_week_crossing_year_boundary() {
    // 2025-01-01 is a Wednesday
    let w = resolve_week(Some("2025-01-01"), d(2024, 6, 13));

    assert_eq!(w.week_start, "2024-12-30");
    assert_eq!(w.days[6].iso, "2025-01-05");
    assert_eq!(w.prev_week, "2024-12-23");
    assert_eq!(w.next_week, "2025-01-06");
}

#[test]
fn test_leap_day_week() {
    // 2024-02-29 is a Thursday
    let w = resolve_week(Some("2024-02-29"), d(2024, 6, 13));

    assert_eq!(w.week_start, "2024-02-26");
    assert_eq!(w.days[3].iso, "2024-02-29");
    assert_eq!(w.days[4].iso, "2024-03-01");
}

#[test]
fn test_this_week_ignores_requested_week() {
    let today = d(2024, 6, 13);
    let w = resolve_week(Some("2023-01-04"), today);

    assert_eq!(w.week_start, "2023-01-02");
    assert_eq!(w.this_week, "2024-06-10");
    assert!(w.days.iter().all(|day| !day.is_today));
}

#[test]
fn test_first_day_is_monday_and_days_are_consecutive() {
    let today = d(2024, 6, 13);
    let start = d(2023, 12, 1);

    for offset in 0..400 {
        let requested = start + Duration::days(offset);
        let w = resolve_week(Some(&iso(requested)), today);

        assert_eq!(w.days.len(), 7);

        let parsed: Vec<NaiveDate> = w
            .days
            .iter()
            .map(|day| NaiveDate::parse_from_str(&day.iso, "%Y-%m-%d").expect("iso date"))
            .collect();

        assert_eq!(parsed[0].weekday(), Weekday::Mon);
        assert!(parsed[0] <= requested && requested <= parsed[6]);

        for pair in parsed.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }
}

#[test]
fn test_monday_normalization_is_idempotent() {
    let today = d(2024, 6, 13);

    for input in ["2024-06-13", "2024-06-16", "2024-01-01", "2030-12-31"] {
        let first = resolve_week(Some(input), today);
        let again = resolve_week(Some(first.start_iso()), today);
        assert_eq!(again.start_iso(), first.start_iso());
        assert_eq!(again, first);
    }
}

fn assert_monday_window(w: &rhabits::models::week::WeekWindow) {
    assert_eq!(w.days.len(), 7);

    let parsed: Vec<NaiveDate> = w
        .days
        .iter()
        .map(|day| NaiveDate::parse_from_str(&day.iso, "%Y-%m-%d").expect("iso date"))
        .collect();

    assert_eq!(parsed[0].weekday(), Weekday::Mon);
    assert_eq!(iso(parsed[0]), w.week_start);
    for pair in parsed.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::days(1));
    }
    assert_eq!(iso(parsed[0] - Duration::days(7)), w.prev_week);
    assert_eq!(iso(parsed[0] + Duration::days(7)), w.next_week);
}

#[test]
fn test_calendar_edges_fall_back_to_today() {
    let today = d(2024, 6, 13);
    let expected = resolve_week(None, today);

    let max = iso(NaiveDate::MAX);
    let min = iso(NaiveDate::MIN);

    for input in [max.as_str(), min.as_str()] {
        let w = resolve_week(Some(input), today);
        assert_eq!(w, expected, "input {:?} should fall back to today", input);
    }
}

#[test]
fn test_signed_and_extended_years_never_fail() {
    let today = d(2024, 6, 13);
    let fallback = resolve_week(None, today);

    let inputs = [
        "+10000-01-01",
        "+002024-06-13",
        "-0001-12-31",
        "0000-01-01",
        "-100000-03-01",
        "+262142-12-31",
        "+262142-12-20",
        "-262143-01-01",
        "-262143-01-20",
        "99999999999-01-01",
        "+",
        "-",
        "2024-06-13T00:00:00",
    ];

    for input in inputs {
        let w = resolve_week(Some(input), today);
        if w != fallback {
            assert_monday_window(&w);
        }
        assert_eq!(w.this_week, "2024-06-10");
    }
}

#[test]
fn test_today_at_calendar_edge_still_resolves() {
    for today in [NaiveDate::MAX, NaiveDate::MIN] {
        let w = resolve_week(Some("2024-06-13"), today);
        assert_monday_window(&w);
        assert_eq!(w.week_start, "2024-06-10");

        let w = resolve_week(None, today);
        assert_monday_window(&w);
    }
}
