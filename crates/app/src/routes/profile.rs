use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::AppErrorKind;
use shared_ui::{
    Banner, BannerKind, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input,
    PageHeader, PageTitle, PasswordStrengthBar, Separator, Skeleton,
};

use crate::auth::use_auth;
use crate::notify::use_flash;

/// Account page: view and edit nickname / full name, and change the
/// password with a live strength meter.
#[component]
pub fn Profile() -> Element {
    let client: ApiClient = use_context();
    let mut auth = use_auth();
    let mut flash = use_flash();

    let fetch_client = client.clone();
    let mut profile = use_resource(move || {
        let client = fetch_client.clone();
        async move { client.get_profile().await }
    });

    let mut edit_mode = use_signal(|| false);
    let mut form_nickname = use_signal(String::new);
    let mut form_full_name = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let mut show_password_form = use_signal(|| false);
    let mut new_password = use_signal(String::new);
    let mut password_saving = use_signal(|| false);
    let mut password_error = use_signal(|| Option::<String>::None);

    let save_client = client.clone();
    let handle_save = move |_| {
        let client = save_client.clone();
        spawn(async move {
            saving.set(true);
            match client.update_profile(form_nickname(), form_full_name()).await {
                Ok(updated) => {
                    auth.set_profile(updated);
                    edit_mode.set(false);
                    flash.success("Profile updated successfully!");
                    profile.restart();
                }
                Err(_) => flash.error("Failed to update profile."),
            }
            saving.set(false);
        });
    };

    let password_client = client.clone();
    let handle_password_save = move |_| {
        let client = password_client.clone();
        spawn(async move {
            password_saving.set(true);
            password_error.set(None);
            match client.change_password(new_password()).await {
                Ok(()) => {
                    new_password.set(String::new());
                    show_password_form.set(false);
                    flash.success("Password updated successfully!");
                }
                Err(err) if err.kind == AppErrorKind::BadRequest && !err.message.is_empty() => {
                    // Typically "New password cannot be the same as the
                    // current password".
                    password_error.set(Some(err.message.clone()));
                }
                Err(_) => password_error.set(Some("Failed to update password.".to_string())),
            }
            password_saving.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "page",
            PageHeader {
                PageTitle { "Profile" }
            }

            if let Some(message) = flash.message() {
                Banner { kind: message.kind, "{message.text}" }
            }

            match &*profile.read() {
                Some(Ok(data)) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Account Details" }
                        }
                        CardContent {
                            if edit_mode() {
                                div { class: "profile-form",
                                    Input {
                                        label: "Nickname",
                                        id: "profile-nickname",
                                        value: form_nickname(),
                                        on_input: move |evt: FormEvent| form_nickname.set(evt.value()),
                                    }
                                    Input {
                                        label: "Full Name",
                                        id: "profile-full-name",
                                        value: form_full_name(),
                                        on_input: move |evt: FormEvent| form_full_name.set(evt.value()),
                                    }
                                    div { class: "profile-actions",
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: move |_| {
                                                edit_mode.set(false);
                                                flash.clear();
                                            },
                                            "Cancel"
                                        }
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            disabled: saving(),
                                            onclick: handle_save,
                                            if saving() { "Saving..." } else { "Save" }
                                        }
                                    }
                                }
                            } else {
                                {
                                    let nickname = data.nickname.clone();
                                    let full_name = data.full_name.clone();
                                    rsx! {
                                        dl { class: "profile-fields",
                                            div { class: "profile-field",
                                                dt { "Email" }
                                                dd { "{data.username}" }
                                            }
                                            div { class: "profile-field",
                                                dt { "Nickname" }
                                                dd { "{data.nickname}" }
                                            }
                                            div { class: "profile-field",
                                                dt { "Full Name" }
                                                dd { "{data.full_name}" }
                                            }
                                        }
                                        div { class: "profile-actions",
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                onclick: move |_| {
                                                    form_nickname.set(nickname.clone());
                                                    form_full_name.set(full_name.clone());
                                                    edit_mode.set(true);
                                                    flash.clear();
                                                },
                                                "Edit Profile"
                                            }
                                        }
                                    }
                                }
                            }

                            Separator {}

                            if show_password_form() {
                                div { class: "profile-form",
                                    Input {
                                        label: "New Password",
                                        id: "profile-password",
                                        input_type: "password",
                                        value: new_password(),
                                        on_input: move |evt: FormEvent| new_password.set(evt.value()),
                                    }
                                    PasswordStrengthBar { password: new_password() }

                                    if let Some(err) = password_error() {
                                        Banner { kind: BannerKind::Error, "{err}" }
                                    }

                                    div { class: "profile-actions",
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: move |_| {
                                                show_password_form.set(false);
                                                new_password.set(String::new());
                                                password_error.set(None);
                                            },
                                            "Cancel"
                                        }
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            disabled: password_saving(),
                                            onclick: handle_password_save,
                                            if password_saving() { "Updating..." } else { "Update Password" }
                                        }
                                    }
                                }
                            } else {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| show_password_form.set(true),
                                    "Change Password"
                                }
                            }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    Banner { kind: BannerKind::Error, "Failed to load profile." }
                },
                None => rsx! {
                    div { class: "profile-loading",
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}
