use dioxus::prelude::*;

/// Scrollable table wrapper.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section — wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// Table body section.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Body row.
#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Body cell; `status` colors the cell for "Available"/"Missing" values.
#[component]
pub fn DataTableCell(#[props(default)] status: Option<String>, children: Element) -> Element {
    let class = match status.as_deref() {
        Some("Missing") => "status-missing",
        Some(_) => "status-available",
        None => "",
    };
    rsx! {
        td { class: "{class}", {children} }
    }
}

/// Full-width placeholder row shown when a fetch returned no rows.
#[component]
pub fn DataTableEmpty(colspan: i64, children: Element) -> Element {
    rsx! {
        tr {
            td { class: "data-table-empty", colspan: "{colspan}", {children} }
        }
    }
}
