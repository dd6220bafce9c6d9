use dioxus::prelude::*;

use crate::routes::status_table::{StatusSource, StatusTable};

/// Per-user pipeline layer status (bronze and silver tables) for one day.
#[component]
pub fn SyncStatus() -> Element {
    rsx! {
        StatusTable { source: StatusSource::Sync, title: "Data Sync Status" }
    }
}
