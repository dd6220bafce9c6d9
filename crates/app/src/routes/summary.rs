use api_client::ApiClient;
use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::calendar::{highlight_set, ViewMode};
use shared_types::dates::{format_api_date, parse_api_date, today};
use shared_types::{DailySummary, MonthlySummary, WeeklySummary};
use shared_ui::{
    Banner, BannerKind, Card, CardContent, DatePicker, FormSelect, PageHeader, PageTitle,
    Skeleton,
};

use crate::format_helpers::format_date_human;

/// One fetched summary, whichever endpoint the view mode selected.
#[derive(Debug, Clone, PartialEq)]
enum SummaryData {
    Daily(DailySummary),
    Weekly(WeeklySummary),
    Monthly(MonthlySummary),
}

/// Ingestion summary with a day/week/month view switch. The anchor date plus
/// the view mode select which endpoint is queried; in month view the
/// backend's dates-with-data list feeds the calendar highlights.
#[component]
pub fn Summary() -> Element {
    let client: ApiClient = use_context();
    let mut view_mode = use_signal(|| ViewMode::Day);
    let mut anchor = use_signal(today);

    let fetch_client = client.clone();
    let data = use_resource(move || {
        let client = fetch_client.clone();
        let mode = view_mode();
        let date = format_api_date(anchor());
        async move {
            match mode {
                ViewMode::Day => client.daily_summary(date).await.map(SummaryData::Daily),
                ViewMode::Week => client.weekly_summary(date).await.map(SummaryData::Weekly),
                ViewMode::Month => client.monthly_summary(date).await.map(SummaryData::Monthly),
            }
        }
    });

    // Week highlights are computed locally; month highlights are whatever the
    // backend reported for the fetched month; day view highlights nothing.
    let highlights: Vec<NaiveDate> = match view_mode() {
        ViewMode::Day => Vec::new(),
        ViewMode::Week => highlight_set(anchor(), ViewMode::Week).into_iter().collect(),
        ViewMode::Month => data
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(|summary| match summary {
                SummaryData::Monthly(monthly) => monthly
                    .dates_with_data
                    .iter()
                    .filter_map(|date| parse_api_date(date))
                    .collect(),
                _ => Vec::new(),
            })
            .unwrap_or_default(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./summary.css") }

        div { class: "page",
            PageHeader {
                PageTitle { "Ingestion Summary" }
            }

            div { class: "summary-controls",
                FormSelect {
                    label: "View",
                    value: view_mode().as_key().to_string(),
                    onchange: move |evt: Event<FormData>| {
                        if let Some(mode) = ViewMode::from_key(&evt.value()) {
                            view_mode.set(mode);
                        }
                    },
                    option { value: "day", "Daily" }
                    option { value: "week", "Weekly" }
                    option { value: "month", "Monthly" }
                }
                DatePicker {
                    label: "Select Date",
                    value: anchor(),
                    view_mode: view_mode(),
                    highlights: highlights,
                    on_change: move |date: NaiveDate| anchor.set(date),
                }
            }

            match &*data.read() {
                Some(Ok(summary)) => rsx! {
                    SummaryCard { summary: summary.clone() }
                },
                Some(Err(err)) => rsx! {
                    Banner { kind: BannerKind::Error, "{err.friendly_message()}" }
                },
                None => rsx! {
                    div { class: "summary-loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

#[component]
fn SummaryCard(summary: SummaryData) -> Element {
    let (period_label, period_value, totals) = match &summary {
        SummaryData::Daily(daily) => (
            "Date",
            format_date_human(&daily.date),
            (daily.total_users, daily.successful_ingestions, daily.missing_ingestions),
        ),
        SummaryData::Weekly(weekly) => (
            "Week",
            format!(
                "{} - {}",
                format_date_human(&weekly.start_date),
                format_date_human(&weekly.end_date)
            ),
            (weekly.total_users, weekly.successful_ingestions, weekly.missing_ingestions),
        ),
        SummaryData::Monthly(monthly) => (
            "Month",
            format!(
                "{} - {}",
                format_date_human(&monthly.start_date),
                format_date_human(&monthly.end_date)
            ),
            (monthly.total_users, monthly.successful_ingestions, monthly.missing_ingestions),
        ),
    };
    let (total_users, successful, missing) = totals;

    rsx! {
        Card {
            CardContent {
                table { class: "summary-table",
                    tbody {
                        tr {
                            td { class: "summary-label", "{period_label}:" }
                            td { "{period_value}" }
                        }
                        tr {
                            td { class: "summary-label", "Total Users:" }
                            td { "{total_users}" }
                        }
                        tr {
                            td { class: "summary-label status-available", "Successful Ingestions:" }
                            td { class: "status-available", "{successful}" }
                        }
                        tr {
                            td { class: "summary-label status-missing", "Missing Ingestions:" }
                            td { class: "status-missing", "{missing}" }
                        }
                    }
                }
            }
        }
    }
}
