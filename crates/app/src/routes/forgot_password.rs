use api_client::ApiClient;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::AppErrorKind;
use shared_ui::{Banner, BannerKind, PasswordStrengthBar};

use crate::routes::Route;

/// Demo verification code accepted in step two. There is no mail delivery in
/// this deployment; the backend only confirms the account exists.
const STATIC_RESET_CODE: &str = "123456";

/// Wizard steps, one screen each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Email,
    Code,
    NewPassword,
    Done,
}

/// Password-reset wizard: email → verification code → new password → done
/// (with an automatic return to the login page).
#[component]
pub fn ForgotPassword() -> Element {
    let client: ApiClient = use_context();
    let mut step = use_signal(|| Step::Email);
    let mut email = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let email_client = client.clone();
    let handle_email = move |evt: FormEvent| {
        evt.prevent_default();
        let client = email_client.clone();
        spawn(async move {
            error_msg.set(None);
            if email().is_empty() {
                error_msg.set(Some("Please enter your email.".to_string()));
                return;
            }
            match client.check_user(email()).await {
                Ok(true) => step.set(Step::Code),
                Ok(false) => {
                    error_msg.set(Some(
                        "Invalid email. No user found with this email.".to_string(),
                    ));
                }
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
        });
    };

    let handle_code = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        if code() != STATIC_RESET_CODE {
            error_msg.set(Some("Invalid verification code.".to_string()));
            return;
        }
        step.set(Step::NewPassword);
    };

    let reset_client = client.clone();
    let handle_password = move |evt: FormEvent| {
        evt.prevent_default();
        let client = reset_client.clone();
        spawn(async move {
            error_msg.set(None);
            if new_password().is_empty() || confirm_password().is_empty() {
                error_msg.set(Some("Please fill in both password fields.".to_string()));
                return;
            }
            if new_password() != confirm_password() {
                error_msg.set(Some("Passwords do not match.".to_string()));
                return;
            }
            match client.reset_password(email(), new_password()).await {
                Ok(()) => {
                    step.set(Step::Done);
                    // Give the success screen a moment, then return to login.
                    spawn(async move {
                        TimeoutFuture::new(3_000).await;
                        navigator().push(Route::Login {});
                    });
                }
                Err(err) if err.kind == AppErrorKind::BadRequest && !err.message.is_empty() => {
                    // e.g. "New password cannot be the same as the current password."
                    error_msg.set(Some(err.message.clone()));
                }
                Err(_) => {
                    error_msg.set(Some("Failed to reset password. Please try again.".to_string()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-card-title", "Forgot Password" }

                if let Some(err) = error_msg() {
                    Banner { kind: BannerKind::Error, "{err}" }
                }

                match step() {
                    Step::Email => rsx! {
                        form { class: "auth-form", onsubmit: handle_email,
                            div { class: "auth-field",
                                label { class: "auth-label", r#for: "email", "Enter Your Email" }
                                input {
                                    class: "auth-input",
                                    r#type: "email",
                                    id: "email",
                                    required: true,
                                    value: email(),
                                    oninput: move |evt| email.set(evt.value()),
                                }
                            }
                            button { class: "auth-submit", r#type: "submit", "Next" }
                        }
                    },
                    Step::Code => rsx! {
                        form { class: "auth-form", onsubmit: handle_code,
                            div { class: "auth-field",
                                label { class: "auth-label", r#for: "code", "Verification Code" }
                                input {
                                    class: "auth-input",
                                    r#type: "text",
                                    id: "code",
                                    placeholder: "6-digit code",
                                    required: true,
                                    value: code(),
                                    oninput: move |evt| code.set(evt.value()),
                                }
                            }
                            button { class: "auth-submit", r#type: "submit", "Verify" }
                        }
                    },
                    Step::NewPassword => rsx! {
                        form { class: "auth-form", onsubmit: handle_password,
                            div { class: "auth-field",
                                label { class: "auth-label", r#for: "new-password", "New Password" }
                                input {
                                    class: "auth-input",
                                    r#type: "password",
                                    id: "new-password",
                                    required: true,
                                    value: new_password(),
                                    oninput: move |evt| new_password.set(evt.value()),
                                }
                            }
                            if !new_password().is_empty() {
                                PasswordStrengthBar { password: new_password(), show_requirements: false }
                            }
                            div { class: "auth-field",
                                label { class: "auth-label", r#for: "confirm-password", "Confirm Password" }
                                input {
                                    class: "auth-input",
                                    r#type: "password",
                                    id: "confirm-password",
                                    required: true,
                                    value: confirm_password(),
                                    oninput: move |evt| confirm_password.set(evt.value()),
                                }
                            }
                            button { class: "auth-submit", r#type: "submit", "Reset Password" }
                        }
                    },
                    Step::Done => rsx! {
                        Banner { kind: BannerKind::Success,
                            "Password reset successful! You can now log in with your new password."
                        }
                        p { class: "auth-note", "Redirecting to login..." }
                    },
                }

                Link { class: "auth-link", to: Route::Login {}, "Back to Login" }
            }
        }
    }
}
