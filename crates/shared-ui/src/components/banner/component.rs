use dioxus::prelude::*;

/// Tone of a transient message banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
    Info,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Error => "error",
            BannerKind::Success => "success",
            BannerKind::Info => "info",
        }
    }
}

/// Inline message banner. Auto-dismiss timing is the caller's concern (see
/// the app's flash helper); this component only renders.
#[component]
pub fn Banner(kind: BannerKind, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "banner", "data-kind": kind.class(), role: "status", {children} }
    }
}
