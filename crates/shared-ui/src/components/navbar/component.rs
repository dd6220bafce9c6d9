use dioxus::prelude::*;

/// Dark top navigation bar.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            div { class: "navbar-inner", {children} }
        }
    }
}

/// Brand block (logo mark + two-line product name).
#[component]
pub fn NavbarBrand(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "navbar-brand",
            div { class: "navbar-logo", "\u{25a4}" }
            div { class: "navbar-brand-text",
                span { class: "navbar-brand-title", "{title}" }
                span { class: "navbar-brand-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Link group in the middle of the bar.
#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        div { class: "navbar-links", {children} }
    }
}

/// Right-aligned action group (profile menu, logout).
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "navbar-actions", {children} }
    }
}
