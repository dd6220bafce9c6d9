use dioxus::prelude::*;

/// Animated loading placeholder.
#[component]
pub fn Skeleton() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton" }
    }
}
