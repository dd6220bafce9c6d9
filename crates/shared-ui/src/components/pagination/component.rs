use dioxus::prelude::*;

/// Most page-number buttons shown at once; beyond this the window slides and
/// ellipses appear.
const MAX_VISIBLE_PAGES: usize = 7;

/// First and last page of the visible button window, centred on the current
/// page and clamped to the ends.
fn visible_window(page: usize, total_pages: usize) -> (usize, usize) {
    let mut start = page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }
    (start, end)
}

/// Numbered pagination controls over a client-side page signal (1-based).
/// Previous/next are disabled at the ends; a window of page numbers with
/// ellipses keeps wide result sets manageable.
#[component]
pub fn Pagination(
    page: Signal<usize>,
    total_pages: usize,
    #[props(default)] total_records: Option<usize>,
) -> Element {
    let current = page();
    let (start, end) = visible_window(current, total_pages);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            div { class: "pagination-info",
                span { "Page {current} of {total_pages}" }
                if let Some(total) = total_records {
                    span { class: "pagination-info-sep", "\u{2022}" }
                    span { "{total} total records" }
                }
            }
            if total_pages > 1 {
                div { class: "pagination-buttons",
                    button {
                        class: "pagination-btn",
                        disabled: current == 1,
                        onclick: move |_| {
                            let p = page();
                            if p > 1 {
                                page.set(p - 1);
                            }
                        },
                        "\u{2039}"
                    }

                    if start > 1 {
                        button {
                            class: "pagination-btn",
                            onclick: move |_| page.set(1),
                            "1"
                        }
                        if start > 2 {
                            span { class: "pagination-ellipsis", "\u{2026}" }
                        }
                    }

                    for number in start..=end {
                        button {
                            class: if number == current { "pagination-btn active" } else { "pagination-btn" },
                            onclick: move |_| page.set(number),
                            "{number}"
                        }
                    }

                    if end < total_pages {
                        if end < total_pages - 1 {
                            span { class: "pagination-ellipsis", "\u{2026}" }
                        }
                        button {
                            class: "pagination-btn",
                            onclick: move |_| page.set(total_pages),
                            "{total_pages}"
                        }
                    }

                    button {
                        class: "pagination-btn",
                        disabled: current == total_pages,
                        onclick: move |_| {
                            let p = page();
                            if p < total_pages {
                                page.set(p + 1);
                            }
                        },
                        "\u{203a}"
                    }
                }
            }
        }
    }
}
