//! Date string conversions and calendar arithmetic.
//!
//! The API speaks `YYYY-MM-DD`; the UI displays `DD-MM-YYYY`. Both string
//! transforms are pure segment swaps with no calendar validation — callers
//! that accept free-form input must check the shape first (`is_display_format`)
//! or parse properly (`parse_api_date`).

use chrono::{Datelike, Duration, Local, NaiveDate};

/// `YYYY-MM-DD` → `DD-MM-YYYY`. Empty input stays empty.
pub fn to_display(api_date: &str) -> String {
    if api_date.is_empty() {
        return String::new();
    }
    let mut parts = api_date.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}-{month}-{year}")
}

/// `DD-MM-YYYY` → `YYYY-MM-DD`. Empty input stays empty.
pub fn to_api(display_date: &str) -> String {
    if display_date.is_empty() {
        return String::new();
    }
    let mut parts = display_date.splitn(3, '-');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();
    format!("{year}-{month}-{day}")
}

/// Strict `DD-MM-YYYY` shape check (digits and dashes only, correct widths).
pub fn is_display_format(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_api_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the viewer's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, weeks * 7)
}

/// Shift by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29). Native rollover is never used.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;

    while month < 1 {
        month += 12;
        year -= 1;
    }
    while month > 12 {
        month -= 12;
        year += 1;
    }

    let month = month as u32;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    add_days(first_day_of_month(next_year, next_month), -1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    last_day_of_month(year, month).day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_round_trip_is_lossless() {
        for api in ["2026-01-05", "1999-12-31", "2000-02-29", "0001-01-01"] {
            assert_eq!(to_api(&to_display(api)), api);
        }
    }

    #[test]
    fn display_swaps_segments() {
        assert_eq!(to_display("2026-08-07"), "07-08-2026");
        assert_eq!(to_api("07-08-2026"), "2026-08-07");
        assert_eq!(to_display(""), "");
        assert_eq!(to_api(""), "");
    }

    #[test]
    fn display_format_shape_check() {
        assert!(is_display_format("07-08-2026"));
        assert!(!is_display_format("7-8-2026"));
        assert!(!is_display_format("2026-08-07"));
        assert!(!is_display_format("07-08-20266"));
        assert!(!is_display_format("ab-cd-efgh"));
    }

    #[test]
    fn week_addition_equals_seven_days() {
        let dates = [
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
            NaiveDate::from_ymd_opt(1999, 12, 28).unwrap(),
        ];
        for d in dates {
            assert_eq!(add_weeks(d, 1), add_days(d, 7));
            assert_eq!(add_weeks(d, -3), add_days(d, -21));
        }
    }

    #[test]
    fn month_addition_clamps_to_month_end() {
        let jan31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(add_months(jan31, 1), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());

        let jan31_leap = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            add_months(jan31_leap, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let may31 = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap();
        assert_eq!(add_months(may31, 1), NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
    }

    #[test]
    fn month_addition_crosses_year_boundaries() {
        let dec = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        assert_eq!(add_months(dec, 1), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(add_months(dec, -12), NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert_eq!(add_months(dec, 25), NaiveDate::from_ymd_opt(2028, 1, 15).unwrap());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 12), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(
            last_day_of_month(2026, 12),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn api_date_parses_and_formats() {
        let d = parse_api_date("2026-08-07").unwrap();
        assert_eq!(format_api_date(d), "2026-08-07");
        assert!(parse_api_date("2026-13-01").is_none());
        assert!(parse_api_date("garbage").is_none());
    }
}
