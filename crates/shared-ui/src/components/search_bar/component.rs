use dioxus::prelude::*;

/// Filter row — wraps inputs, selects, and action buttons in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", {children} }
    }
}

/// Search text input with a clear ("x") affordance when non-empty.
#[component]
pub fn SearchInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    let has_text = !value.is_empty();
    rsx! {
        div { class: "search-input-wrapper",
            input {
                class: "search-input",
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            if has_text {
                button {
                    class: "search-input-clear",
                    r#type: "button",
                    tabindex: "-1",
                    onclick: move |_| on_input.call(String::new()),
                    "\u{2715}"
                }
            }
        }
    }
}
