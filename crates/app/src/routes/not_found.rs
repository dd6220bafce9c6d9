use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-text", "The page \"/{path}\" does not exist." }
            Link { class: "not-found-link", to: Route::Summary {}, "Back to the dashboard" }
        }
    }
}
