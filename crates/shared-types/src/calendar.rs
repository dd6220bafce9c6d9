//! Calendar grid construction and view-range resolution.
//!
//! The month grid is always 6 rows of 7 cells (42 total), Monday first,
//! padded with the tail of the previous month and the head of the next.
//! Highlight membership is decided by the caller-supplied set: week view
//! computes it locally, month view trusts the dates reported by the backend.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::{add_days, first_day_of_month, last_day_of_month};

/// How a single anchor date expands into a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
    Month,
}

impl ViewMode {
    pub fn as_key(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "day" => Some(ViewMode::Day),
            "week" => Some(ViewMode::Week),
            "month" => Some(ViewMode::Month),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Day => "Daily",
            ViewMode::Week => "Weekly",
            ViewMode::Month => "Monthly",
        }
    }
}

/// Inclusive date range requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One cell of the 42-cell month grid. Rebuilt on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub in_month: bool,
    pub selected: bool,
    pub highlighted: bool,
}

/// Total number of cells in the month grid (6 weeks x 7 days).
pub const GRID_CELLS: usize = 42;

/// Monday-first weekday index of a date (Mon=0 .. Sun=6).
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    add_days(date, -(weekday_index(date) as i64))
}

/// Build the 42-cell grid for the month containing `reference`.
pub fn month_grid(
    reference: NaiveDate,
    selected: Option<NaiveDate>,
    highlights: &BTreeSet<NaiveDate>,
) -> Vec<CalendarDay> {
    let year = reference.year();
    let month = reference.month();
    let first = first_day_of_month(year, month);
    let leading = weekday_index(first) as i64;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    let mut cursor = add_days(first, -leading);
    let last = last_day_of_month(year, month);

    for _ in 0..GRID_CELLS {
        cells.push(CalendarDay {
            day: cursor.day(),
            date: cursor,
            in_month: cursor >= first && cursor <= last,
            selected: selected == Some(cursor),
            highlighted: highlights.contains(&cursor),
        });
        cursor = add_days(cursor, 1);
    }

    cells
}

/// The inclusive range a view mode covers around an anchor date.
pub fn resolve_range(anchor: NaiveDate, mode: ViewMode) -> DateRange {
    match mode {
        ViewMode::Day => DateRange {
            start: anchor,
            end: anchor,
        },
        ViewMode::Week => {
            let start = start_of_week(anchor);
            DateRange {
                start,
                end: add_days(start, 6),
            }
        }
        ViewMode::Month => DateRange {
            start: first_day_of_month(anchor.year(), anchor.month()),
            end: last_day_of_month(anchor.year(), anchor.month()),
        },
    }
}

/// Locally computed highlight dates for an anchor. Day mode has none; week
/// mode is the full Monday..Sunday span. Month mode is empty here — the
/// backend's `dates_with_data` list is authoritative for that view.
pub fn highlight_set(anchor: NaiveDate, mode: ViewMode) -> BTreeSet<NaiveDate> {
    match mode {
        ViewMode::Day | ViewMode::Month => BTreeSet::new(),
        ViewMode::Week => {
            let range = resolve_range(anchor, ViewMode::Week);
            (0..7).map(|offset| add_days(range.start, offset)).collect()
        }
    }
}
