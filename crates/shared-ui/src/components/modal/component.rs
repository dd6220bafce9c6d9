use dioxus::prelude::*;

/// Centered modal dialog over a dimmed backdrop. Clicking the backdrop or
/// the close button fires `on_close`; content clicks do not propagate.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "\u{00d7}"
                }
                if !title.is_empty() {
                    h2 { class: "modal-title", "{title}" }
                }
                {children}
            }
        }
    }
}

/// Action row pinned to the bottom of a modal.
#[component]
pub fn ModalActions(children: Element) -> Element {
    rsx! {
        div { class: "modal-actions", {children} }
    }
}
