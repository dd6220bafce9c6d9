use api_client::ApiClient;
use dioxus::prelude::*;
use shared_ui::{Banner, BannerKind};

use crate::routes::Route;

/// Login page with email/password, a "remember me" toggle that selects
/// persistent vs. session-scoped token storage, and links to the password
/// reset flow and the admin access gate.
#[component]
pub fn Login() -> Element {
    let client: ApiClient = use_context();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard.
    if client.is_authenticated() {
        navigator().push(Route::Summary {});
    }

    let login_client = client.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = login_client.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            match client.login(username(), password(), remember()).await {
                Ok(_) => {
                    navigator().push(Route::Summary {});
                }
                Err(err) => {
                    let message = if err.message.is_empty() {
                        "Login failed".to_string()
                    } else {
                        err.message.clone()
                    };
                    error_msg.set(Some(message));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                div { class: "auth-brand-logo", "\u{25a4}" }
                div { class: "auth-brand-text",
                    span { class: "auth-brand-title", "ETL Monitoring" }
                    span { class: "auth-brand-subtitle", "Dashboard" }
                }
            }

            div { class: "auth-card",
                h1 { class: "auth-card-title", "Welcome Back" }

                form { class: "auth-form", onsubmit: handle_login,
                    div { class: "auth-field",
                        label { class: "auth-label", r#for: "email", "Email ID" }
                        input {
                            class: "auth-input",
                            r#type: "email",
                            id: "email",
                            required: true,
                            value: username(),
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { class: "auth-label", r#for: "password", "Password" }
                        input {
                            class: "auth-input",
                            r#type: "password",
                            id: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    div { class: "auth-remember",
                        input {
                            r#type: "checkbox",
                            id: "remember",
                            checked: remember(),
                            onchange: move |evt| remember.set(evt.checked()),
                        }
                        label { r#for: "remember", "Remember me" }
                    }

                    if let Some(err) = error_msg() {
                        Banner { kind: BannerKind::Error, "{err}" }
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                    Link { class: "auth-link", to: Route::ForgotPassword {}, "Forgot password?" }
                }
            }

            div { class: "auth-corner",
                Link { class: "auth-corner-btn", to: Route::AdminLogin {}, "Admin Login" }
            }
        }
    }
}
