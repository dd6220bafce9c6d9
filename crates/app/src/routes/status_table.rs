use api_client::ApiClient;
use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::calendar::ViewMode;
use shared_types::dates::{format_api_date, today};
use shared_types::StatusRow;
use shared_ui::{
    Banner, BannerKind, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, DatePicker, FormSelect, PageHeader, PageTitle, Pagination,
    SearchBar, SearchInput, Skeleton,
};

use crate::filters::{apply_filters, page_slice, total_pages, StatusFilter};
use crate::format_helpers::column_label;

/// Which status endpoint a page reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSource {
    Sync,
    Vitals,
}

/// Shared day-status table: date picker, status filter, user search, and
/// client-side pagination. The whole day is fetched once per date; filter,
/// search, and page changes only re-slice the snapshot. Any of those three
/// changes resets the page to 1.
#[component]
pub fn StatusTable(source: StatusSource, title: String) -> Element {
    let client: ApiClient = use_context();
    let mut date = use_signal(today);
    let mut filter = use_signal(StatusFilter::default);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let fetch_client = client.clone();
    let data = use_resource(move || {
        let client = fetch_client.clone();
        let date = format_api_date(date());
        async move {
            match source {
                StatusSource::Sync => client.sync_status_full_day(date).await,
                StatusSource::Vitals => client.user_vitals_full_day(date).await,
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./status.css") }

        div { class: "page",
            PageHeader {
                PageTitle { "{title}" }
            }

            SearchBar {
                DatePicker {
                    label: "Select Date",
                    value: date(),
                    view_mode: ViewMode::Day,
                    on_change: move |picked: NaiveDate| {
                        date.set(picked);
                        page.set(1);
                    },
                }
                FormSelect {
                    label: "Status",
                    value: filter().as_key().to_string(),
                    onchange: move |evt: Event<FormData>| {
                        if let Some(parsed) = StatusFilter::from_key(&evt.value()) {
                            filter.set(parsed);
                            page.set(1);
                        }
                    },
                    option { value: "all", "All" }
                    option { value: "available", "Available" }
                    option { value: "missing", "Missing" }
                }
                SearchInput {
                    value: search(),
                    placeholder: "Search user ID...",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
            }

            match &*data.read() {
                Some(Ok(response)) => {
                    let columns = if response.columns.is_empty() {
                        response
                            .data
                            .first()
                            .map(|row| row.statuses.keys().cloned().collect())
                            .unwrap_or_default()
                    } else {
                        response.columns.clone()
                    };
                    let filtered = apply_filters(&response.data, filter(), &search());
                    let pages = total_pages(filtered.len());
                    let visible: Vec<StatusRow> = page_slice(&filtered, page()).to_vec();

                    rsx! {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "User ID" }
                                for column in columns.iter() {
                                    DataTableColumn { "{column_label(column)}" }
                                }
                            }
                            DataTableBody {
                                if visible.is_empty() {
                                    DataTableEmpty {
                                        colspan: columns.len() as i64 + 1,
                                        "No data available"
                                    }
                                }
                                for row in visible {
                                    DataTableRow {
                                        DataTableCell { "{row.user_id}" }
                                        for column in columns.iter() {
                                            DataTableCell {
                                                status: row.status(column).to_string(),
                                                "{row.status(column)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        Pagination {
                            page: page,
                            total_pages: pages,
                            total_records: filtered.len(),
                        }
                    }
                }
                Some(Err(err)) => rsx! {
                    Banner { kind: BannerKind::Error, "{err.friendly_message()}" }
                },
                None => rsx! {
                    div { class: "status-loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}
