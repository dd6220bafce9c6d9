use dioxus::prelude::*;

use crate::routes::status_table::{StatusSource, StatusTable};

/// Per-user vitals ingestion status (steps, heart rate, SpO2, ...) for one
/// day.
#[component]
pub fn Vitals() -> Element {
    rsx! {
        StatusTable { source: StatusSource::Vitals, title: "User Vitals Status" }
    }
}
