use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AdminUser, UpsertUserRequest};
use shared_ui::{
    Banner, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, Input, Modal, ModalActions, Navbar,
    NavbarActions, NavbarBrand, Pagination, SearchBar, SearchInput,
};
use validator::Validate;

use crate::filters::{page_slice, total_pages};
use crate::notify::use_flash;
use crate::routes::Route;
use crate::session;

/// Case-insensitive search over username, full name, and nickname.
fn filter_users(users: &[AdminUser], search: &str) -> Vec<AdminUser> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || user.username.to_lowercase().contains(&needle)
                || user.full_name.to_lowercase().contains(&needle)
                || user.nickname.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// First human-readable message out of a validator error set.
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|list| list.iter())
        .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Please check the form fields.".to_string())
}

/// User-management panel: list, search, client-side pagination, and
/// create/edit/delete with confirmation. Gated by the tab-scoped admin
/// access marker rather than the regular login session.
#[component]
pub fn Admin() -> Element {
    let client: ApiClient = use_context();
    let mut flash = use_flash();

    let list_client = client.clone();
    let mut users = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_admin_users().await }
    });

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let mut show_form = use_signal(|| false);
    let mut editing_user = use_signal(|| Option::<AdminUser>::None);
    let mut pending_delete = use_signal(|| Option::<AdminUser>::None);

    let mut form_username = use_signal(String::new);
    let mut form_password = use_signal(String::new);
    let mut form_full_name = use_signal(String::new);
    let mut form_nickname = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let mut open_create = move |_| {
        editing_user.set(None);
        form_username.set(String::new());
        form_password.set(String::new());
        form_full_name.set(String::new());
        form_nickname.set(String::new());
        form_error.set(None);
        show_form.set(true);
    };

    let mut open_edit = move |user: AdminUser| {
        form_username.set(user.username.clone());
        form_password.set(String::new());
        form_full_name.set(user.full_name.clone());
        form_nickname.set(user.nickname.clone());
        form_error.set(None);
        editing_user.set(Some(user));
        show_form.set(true);
    };

    let submit_client = client.clone();
    let handle_form_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = submit_client.clone();
        let editing = editing_user.read().clone();
        spawn(async move {
            form_error.set(None);

            let request = UpsertUserRequest {
                username: form_username(),
                password: form_password(),
                full_name: form_full_name(),
                nickname: form_nickname(),
            };

            let creating = editing.is_none();
            if request.username.trim().is_empty()
                || request.full_name.trim().is_empty()
                || request.nickname.trim().is_empty()
                || (creating && request.password.is_empty())
            {
                form_error.set(Some("All fields are required.".to_string()));
                return;
            }
            if let Err(errors) = request.validate() {
                form_error.set(Some(first_validation_message(&errors)));
                return;
            }

            let result = match &editing {
                Some(user) => client.update_admin_user(user.id, &request).await,
                None => client.create_admin_user(&request).await,
            };

            match result {
                Ok(()) => {
                    show_form.set(false);
                    editing_user.set(None);
                    flash.success(if creating {
                        "User added successfully!"
                    } else {
                        "User updated successfully!"
                    });
                    users.restart();
                }
                Err(err) => form_error.set(Some(err.friendly_message())),
            }
        });
    };

    let delete_client = client.clone();
    let handle_delete = move |_| {
        let client = delete_client.clone();
        let target = pending_delete.read().clone();
        spawn(async move {
            let Some(user) = target else { return };
            match client.delete_admin_user(user.id).await {
                Ok(()) => {
                    flash.success("User deleted successfully!");
                    users.restart();
                }
                Err(err) => flash.error(err.friendly_message()),
            }
            pending_delete.set(None);
        });
    };

    let editing = editing_user.read().clone();
    let form_title = if editing.is_some() { "Edit User" } else { "Add User" }.to_string();

    // Hooks must run unconditionally; the access gate comes after them.
    if !session::has_admin_access() {
        navigator().push(Route::AdminLogin {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to admin access..." }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-shell",
            Navbar {
                NavbarBrand { title: "ETL Monitoring", subtitle: "Admin Panel" }
                NavbarActions {
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| {
                            session::revoke_admin_access();
                            navigator().push(Route::AdminLogin {});
                        },
                        "Logout"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            session::revoke_admin_access();
                            navigator().push(Route::Login {});
                        },
                        "Back to Login"
                    }
                }
            }

            main { class: "admin-main",
                SearchBar {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |evt| open_create(evt),
                        "Add New User"
                    }
                    SearchInput {
                        value: search(),
                        placeholder: "Search users...",
                        on_input: move |value: String| {
                            search.set(value);
                            page.set(1);
                        },
                    }
                }

                if let Some(message) = flash.message() {
                    Banner { kind: message.kind, "{message.text}" }
                }

                match &*users.read() {
                    Some(Ok(all_users)) => {
                        let filtered = filter_users(all_users, &search());
                        let pages = total_pages(filtered.len());
                        let visible: Vec<AdminUser> = page_slice(&filtered, page()).to_vec();
                        rsx! {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "Username" }
                                    DataTableColumn { "Full Name" }
                                    DataTableColumn { "Nickname" }
                                    DataTableColumn { "Actions" }
                                }
                                DataTableBody {
                                    if visible.is_empty() {
                                        DataTableEmpty { colspan: 4, "No users found" }
                                    }
                                    for user in visible {
                                        {
                                            let user_for_edit = user.clone();
                                            let user_for_delete = user.clone();
                                            rsx! {
                                                DataTableRow {
                                                    DataTableCell { "{user.username}" }
                                                    DataTableCell { "{user.full_name}" }
                                                    DataTableCell { "{user.nickname}" }
                                                    DataTableCell {
                                                        div { class: "admin-row-actions",
                                                            Button {
                                                                variant: ButtonVariant::Secondary,
                                                                onclick: move |_| open_edit(user_for_edit.clone()),
                                                                "Edit"
                                                            }
                                                            Button {
                                                                variant: ButtonVariant::Destructive,
                                                                onclick: move |_| pending_delete.set(Some(user_for_delete.clone())),
                                                                "Delete"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            Pagination {
                                page: page,
                                total_pages: pages,
                                total_records: filtered.len(),
                            }
                        }
                    }
                    Some(Err(err)) => rsx! {
                        Banner { kind: shared_ui::BannerKind::Error, "{err.friendly_message()}" }
                    },
                    None => rsx! {
                        p { class: "admin-loading", "Loading..." }
                    },
                }
            }

            // Create / edit dialog
            Modal {
                open: show_form(),
                title: form_title,
                on_close: move |_| {
                    show_form.set(false);
                    editing_user.set(None);
                },
                form { onsubmit: handle_form_submit,
                    div { class: "admin-form-grid",
                        Input {
                            label: "Username (Email)",
                            id: "admin-username",
                            input_type: "email",
                            placeholder: "Email Address",
                            value: form_username(),
                            on_input: move |evt: FormEvent| form_username.set(evt.value()),
                        }
                        if editing.is_none() {
                            Input {
                                label: "Password",
                                id: "admin-password",
                                input_type: "password",
                                placeholder: "Password",
                                value: form_password(),
                                on_input: move |evt: FormEvent| form_password.set(evt.value()),
                            }
                        }
                        Input {
                            label: "Full Name",
                            id: "admin-full-name",
                            placeholder: "Full Name",
                            value: form_full_name(),
                            on_input: move |evt: FormEvent| form_full_name.set(evt.value()),
                        }
                        Input {
                            label: "Nickname",
                            id: "admin-nickname",
                            placeholder: "Nickname",
                            value: form_nickname(),
                            on_input: move |evt: FormEvent| form_nickname.set(evt.value()),
                        }
                    }

                    if let Some(err) = form_error() {
                        Banner { kind: shared_ui::BannerKind::Error, "{err}" }
                    }

                    ModalActions {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                show_form.set(false);
                                editing_user.set(None);
                            },
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            if editing.is_some() { "Update User" } else { "Add User" }
                        }
                    }
                }
            }

            // Delete confirmation
            Modal {
                open: pending_delete.read().is_some(),
                title: "Confirm Delete",
                on_close: move |_| pending_delete.set(None),
                if let Some(user) = pending_delete.read().as_ref() {
                    p { class: "admin-confirm-text",
                        "Are you sure you want to delete "
                        strong { "{user.username}" }
                        "?"
                    }
                }
                ModalActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| pending_delete.set(None),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: handle_delete,
                        "Delete"
                    }
                }
            }
        }
    }
}
