use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use shared_types::calendar::{month_grid, resolve_range, ViewMode};
use shared_types::dates::{
    add_months, first_day_of_month, format_api_date, is_display_format, parse_api_date, to_api,
    to_display, today,
};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_LABELS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Date picker with a mode-aware dropdown calendar.
///
/// - `Day`: editable masked `DD-MM-YYYY` input; picking a day commits it.
/// - `Week`: read-only `start - end` range display; picking any day commits
///   that day (callers resolve the Monday-based range from it) and the whole
///   week row is highlighted.
/// - `Month`: read-only month range display; the panel shows a 12-month
///   grid and the nav buttons step by year. Committing selects day 1.
///
/// `highlights` is caller-supplied: the local week span in week mode, the
/// backend's dates-with-data in month view.
#[component]
pub fn DatePicker(
    value: NaiveDate,
    #[props(default)] view_mode: ViewMode,
    #[props(default)] highlights: Vec<NaiveDate>,
    on_change: EventHandler<NaiveDate>,
    #[props(default)] label: String,
) -> Element {
    let mut open = use_signal(|| false);
    // Month shown in the panel; follows the committed value.
    let mut view_month = use_signal(|| value);
    // Free-typed text in day mode, masked as the user types.
    let mut input_text = use_signal(|| to_display(&format_api_date(value)));

    // Keep panel month and input text in step with the committed value.
    let mut last_value = use_signal(|| value);
    if last_value() != value {
        last_value.set(value);
        view_month.set(value);
        input_text.set(to_display(&format_api_date(value)));
    }

    let highlight_set: BTreeSet<NaiveDate> = highlights.iter().copied().collect();

    let display_value = match view_mode {
        ViewMode::Day => input_text(),
        ViewMode::Week | ViewMode::Month => {
            let range = resolve_range(value, view_mode);
            format!(
                "{} - {}",
                to_display(&format_api_date(range.start)),
                to_display(&format_api_date(range.end))
            )
        }
    };

    let placeholder = match view_mode {
        ViewMode::Day => "DD-MM-YYYY",
        ViewMode::Week => "Select Week",
        ViewMode::Month => "Select Month",
    };

    let read_only = view_mode != ViewMode::Day;

    let mut commit = move |date: NaiveDate| {
        on_change.call(date);
        open.set(false);
    };

    let handle_input = move |evt: FormEvent| {
        let masked = mask_display_input(&evt.value());
        input_text.set(masked.clone());
        if let Some(date) = parse_display_date(&masked) {
            on_change.call(date);
        }
    };

    let handle_blur = move |_| {
        // Reset stray text to the committed value.
        if parse_display_date(&input_text()).is_none() {
            input_text.set(to_display(&format_api_date(value)));
        }
    };

    let panel_title = match view_mode {
        ViewMode::Month => view_month().year().to_string(),
        _ => {
            let month = MONTH_LABELS[(view_month().month() - 1) as usize];
            format!("{month} {}", view_month().year())
        }
    };

    // Month mode navigates whole years, other modes single months.
    let nav_step = if view_mode == ViewMode::Month { 12 } else { 1 };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "date-picker",
            if !label.is_empty() {
                label { class: "date-picker-label", "{label}" }
            }
            div { class: "date-picker-field",
                input {
                    class: "date-picker-input",
                    r#type: "text",
                    value: "{display_value}",
                    placeholder: "{placeholder}",
                    readonly: read_only,
                    oninput: handle_input,
                    onblur: handle_blur,
                }
                button {
                    class: "date-picker-toggle",
                    r#type: "button",
                    aria_label: "Open calendar",
                    onclick: move |_| {
                        let now_open = open();
                        open.set(!now_open);
                    },
                    "\u{1f4c5}"
                }
            }

            if open() {
                // Transparent backdrop: any click outside the panel closes it.
                div {
                    class: "date-picker-backdrop",
                    onclick: move |_| open.set(false),
                }
                div { class: "date-picker-panel",
                    div { class: "date-picker-nav",
                        button {
                            class: "date-picker-nav-btn",
                            r#type: "button",
                            onclick: move |_| {
                                let shifted = add_months(view_month(), -nav_step);
                                view_month.set(shifted);
                            },
                            "\u{2039}"
                        }
                        span { class: "date-picker-title", "{panel_title}" }
                        button {
                            class: "date-picker-nav-btn",
                            r#type: "button",
                            onclick: move |_| {
                                let shifted = add_months(view_month(), nav_step);
                                view_month.set(shifted);
                            },
                            "\u{203a}"
                        }
                    }

                    if view_mode == ViewMode::Month {
                        MonthGridPanel {
                            view_month: view_month(),
                            selected: value,
                            on_pick: move |month: u32| {
                                commit(first_day_of_month(view_month().year(), month));
                            },
                        }
                    } else {
                        DayGridPanel {
                            view_month: view_month(),
                            selected: value,
                            highlights: highlight_set.clone(),
                            week_band: view_mode == ViewMode::Week,
                            on_pick: move |date: NaiveDate| commit(date),
                        }
                    }

                    div { class: "date-picker-actions",
                        button {
                            class: "date-picker-action",
                            r#type: "button",
                            onclick: move |_| commit(today()),
                            "Today"
                        }
                        button {
                            class: "date-picker-action",
                            r#type: "button",
                            onclick: move |_| {
                                input_text.set(String::new());
                                commit(today());
                            },
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}

/// Weekday header plus the 42-cell day grid.
#[component]
fn DayGridPanel(
    view_month: NaiveDate,
    selected: NaiveDate,
    highlights: BTreeSet<NaiveDate>,
    week_band: bool,
    on_pick: EventHandler<NaiveDate>,
) -> Element {
    let cells = month_grid(view_month, Some(selected), &highlights);

    rsx! {
        div { class: "date-picker-weekdays",
            for day in WEEKDAY_LABELS {
                span { class: "date-picker-weekday", "{day}" }
            }
        }
        div { class: "date-picker-grid",
            for cell in cells {
                button {
                    key: "{cell.date}",
                    class: day_cell_class(cell.in_month, cell.selected, cell.highlighted, week_band),
                    r#type: "button",
                    onclick: move |_| on_pick.call(cell.date),
                    "{cell.day}"
                }
            }
        }
    }
}

/// Twelve month buttons for month view.
#[component]
fn MonthGridPanel(view_month: NaiveDate, selected: NaiveDate, on_pick: EventHandler<u32>) -> Element {
    rsx! {
        div { class: "date-picker-months",
            for (index , name) in MONTH_LABELS.iter().enumerate() {
                {
                    let month = index as u32 + 1;
                    let is_selected =
                        selected.month() == month && selected.year() == view_month.year();
                    rsx! {
                        button {
                            key: "{month}",
                            class: if is_selected { "date-picker-month selected" } else { "date-picker-month" },
                            r#type: "button",
                            onclick: move |_| on_pick.call(month),
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

fn day_cell_class(in_month: bool, selected: bool, highlighted: bool, week_band: bool) -> String {
    let mut class = String::from("date-picker-day");
    if !in_month {
        class.push_str(" outside");
    }
    if selected {
        class.push_str(" selected");
    }
    if highlighted {
        class.push_str(if week_band { " week-band" } else { " highlighted" });
    }
    class
}

/// Keep only digits, cap at 8, and re-insert the `DD-MM-YYYY` dashes.
fn mask_display_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}-{}", &digits[..2], &digits[2..]),
        _ => format!("{}-{}-{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Parse a complete masked entry into a real date, rejecting shapes that
/// match but name impossible dates.
fn parse_display_date(masked: &str) -> Option<NaiveDate> {
    if !is_display_format(masked) {
        return None;
    }
    parse_api_date(&to_api(masked))
}
