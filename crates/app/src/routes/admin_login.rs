use dioxus::prelude::*;
use shared_ui::{Banner, BannerKind};

use crate::routes::Route;
use crate::session;

/// Access code unlocking the user-management panel for the current tab.
const ADMIN_ACCESS_CODE: &str = "admin1234";

/// Admin access gate: a single code field in front of the user-management
/// panel. Access is tab-scoped and dropped on logout.
#[component]
pub fn AdminLogin() -> Element {
    let mut code = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_access = move |evt: FormEvent| {
        evt.prevent_default();
        if code() == ADMIN_ACCESS_CODE {
            session::grant_admin_access();
            navigator().push(Route::Admin {});
        } else {
            error_msg.set(Some("Incorrect access code.".to_string()));
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                div { class: "auth-brand-logo", "\u{25a4}" }
                div { class: "auth-brand-text",
                    span { class: "auth-brand-title", "ETL Monitoring" }
                    span { class: "auth-brand-subtitle", "Admin Access" }
                }
            }

            div { class: "auth-card",
                h1 { class: "auth-card-title", "Admin Access" }

                form { class: "auth-form", onsubmit: handle_access,
                    div { class: "auth-field",
                        label { class: "auth-label", r#for: "access-code", "Enter Admin Access Code:" }
                        input {
                            class: "auth-input",
                            r#type: "password",
                            id: "access-code",
                            placeholder: "Access Code",
                            required: true,
                            value: code(),
                            oninput: move |evt| code.set(evt.value()),
                        }
                    }

                    if let Some(err) = error_msg() {
                        Banner { kind: BannerKind::Error, "{err}" }
                    }

                    button { class: "auth-submit", r#type: "submit", "Enter" }
                }
            }

            div { class: "auth-corner",
                Link { class: "auth-corner-btn", to: Route::Login {}, "Back to Login" }
            }
        }
    }
}
