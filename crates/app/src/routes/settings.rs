use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{UserCountLogic, UserSettings};
use shared_ui::{
    Banner, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FormSelect, Input, PageHeader, PageTitle, Skeleton,
};

use crate::notify::use_flash;

/// Preferences page: how the summary counts users, and the UI theme.
/// Loaded once on mount; edits live in local signals until saved.
#[component]
pub fn Settings() -> Element {
    let client: ApiClient = use_context();
    let mut flash = use_flash();

    let mut count_logic = use_signal(UserCountLogic::default);
    let mut custom_count = use_signal(String::new);
    let mut theme = use_signal(|| "light".to_string());
    let mut loaded = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let load_client = client.clone();
    let settings = use_resource(move || {
        let client = load_client.clone();
        async move { client.get_user_settings().await }
    });

    // Copy the fetched settings into the editable signals exactly once.
    use_effect(move || {
        if loaded() {
            return;
        }
        if let Some(result) = settings.read().as_ref() {
            match result {
                Ok(data) => {
                    count_logic.set(data.user_count_logic);
                    custom_count.set(
                        data.custom_user_count
                            .map(|count| count.to_string())
                            .unwrap_or_default(),
                    );
                    theme.set(data.theme.clone());
                }
                Err(_) => flash.error("Error loading settings"),
            }
            loaded.set(true);
        }
    });

    // Current form state as a settings payload, or a validation error.
    let build_settings = move || -> Result<UserSettings, String> {
        let custom = if count_logic() == UserCountLogic::CustomInput {
            match custom_count().trim().parse::<u32>() {
                Ok(count) => Some(count),
                Err(_) => None,
            }
        } else {
            None
        };
        let settings = UserSettings {
            user_count_logic: count_logic(),
            custom_user_count: custom,
            theme: theme(),
        };
        settings.validate()?;
        Ok(settings)
    };

    let save_client = client.clone();
    let handle_save = move |_| {
        let client = save_client.clone();
        spawn(async move {
            match build_settings() {
                Ok(payload) => {
                    saving.set(true);
                    match client.save_user_settings(&payload).await {
                        Ok(()) => flash.success("Settings saved successfully!"),
                        Err(_) => flash.error("Error saving settings"),
                    }
                    saving.set(false);
                }
                Err(message) => flash.error(message),
            }
        });
    };

    let reset_client = client.clone();
    let handle_reset = move |_| {
        let client = reset_client.clone();
        spawn(async move {
            saving.set(true);
            let defaults = UserSettings::default();
            count_logic.set(defaults.user_count_logic);
            custom_count.set(String::new());
            theme.set(defaults.theme.clone());
            match client.save_user_settings(&defaults).await {
                Ok(()) => flash.success("Settings reset to defaults successfully!"),
                Err(_) => flash.error("Error resetting settings"),
            }
            saving.set(false);
        });
    };

    let custom_invalid = count_logic() == UserCountLogic::CustomInput
        && custom_count().trim().parse::<u32>().map(|c| c == 0).unwrap_or(true);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "page",
            PageHeader {
                PageTitle { "Settings" }
            }
            p { class: "settings-intro", "Manage your preferences and account settings below." }

            if let Some(message) = flash.message() {
                Banner { kind: message.kind, "{message.text}" }
            }

            if !loaded() {
                div { class: "settings-loading",
                    Skeleton {}
                    Skeleton {}
                }
            } else {
                div { class: "settings-sections",
                    Card {
                        CardHeader {
                            CardTitle { "User Count Logic" }
                            CardDescription {
                                "Choose how the app calculates the total number of users on the summary page"
                            }
                        }
                        CardContent {
                            FormSelect {
                                label: "Calculation Method",
                                value: count_logic().as_key().to_string(),
                                onchange: move |evt: Event<FormData>| {
                                    if let Some(logic) = UserCountLogic::from_key(&evt.value()) {
                                        count_logic.set(logic);
                                    }
                                },
                                option { value: "raw_files", "Raw Files (Default)" }
                                option { value: "custom_input", "Custom Input" }
                            }

                            if count_logic() == UserCountLogic::CustomInput {
                                div { class: "settings-custom-count",
                                    Input {
                                        label: "Custom User Count",
                                        id: "custom-user-count",
                                        input_type: "number",
                                        placeholder: "Enter total number of users",
                                        value: custom_count(),
                                        on_input: move |evt: FormEvent| custom_count.set(evt.value()),
                                    }
                                    p { class: "settings-hint",
                                        "This value will be used instead of calculating from raw files"
                                    }
                                    if custom_invalid {
                                        p { class: "settings-field-error",
                                            "Please enter a valid positive number"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Theme Customization" }
                            CardDescription { "Choose your preferred theme for the app" }
                        }
                        CardContent {
                            FormSelect {
                                label: "Theme",
                                value: theme(),
                                onchange: move |evt: Event<FormData>| theme.set(evt.value()),
                                option { value: "light", "Light Mode (Default)" }
                            }
                        }
                    }

                    div { class: "settings-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: saving(),
                            onclick: handle_reset,
                            if saving() { "Resetting..." } else { "Reset to Defaults" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: saving() || custom_invalid,
                            onclick: handle_save,
                            if saving() { "Saving..." } else { "Save Settings" }
                        }
                    }
                }
            }
        }
    }
}
