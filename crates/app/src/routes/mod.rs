pub mod admin;
pub mod admin_login;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod settings;
pub mod status_table;
pub mod summary;
pub mod sync_status;
pub mod vitals;

use api_client::ApiClient;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Navbar, NavbarActions, NavbarBrand, NavbarLinks};

use crate::auth::use_auth;

use admin::Admin;
use admin_login::AdminLogin;
use forgot_password::ForgotPassword;
use login::Login;
use not_found::NotFound;
use profile::Profile;
use settings::Settings;
use summary::Summary;
use sync_status::SyncStatus;
use vitals::Vitals;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/admin-login")]
    AdminLogin {},
    #[route("/admin")]
    Admin {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Summary {},
    #[route("/sync-status")]
    SyncStatus {},
    #[route("/vitals")]
    Vitals {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login when no token is stored. The
/// token itself is only ever read through the injected session store; a
/// stale token is caught by the first 401, which clears the session and
/// redirects globally.
#[component]
fn AuthGuard() -> Element {
    let client: ApiClient = use_context();

    if !client.is_authenticated() {
        navigator().push(Route::Login {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Main layout: dark top navbar with section links and account actions.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let client: ApiClient = use_context();
    let mut auth = use_auth();

    // Populate the profile once per session so the navbar can greet the user.
    use_effect(move || {
        let client = client.clone();
        let mut auth = auth;
        let missing = auth.profile.read().is_none();
        if missing {
            spawn(async move {
                match client.get_profile().await {
                    Ok(profile) => auth.set_profile(profile),
                    Err(err) => tracing::warn!(%err, "profile fetch failed"),
                }
            });
        }
    });

    let display_name = auth.display_name();

    let logout_client: ApiClient = use_context();
    let handle_logout = move |_| {
        logout_client.logout();
        auth.clear();
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            Navbar {
                NavbarBrand { title: "ETL Monitoring", subtitle: "Dashboard" }
                NavbarLinks {
                    Link {
                        to: Route::Summary {},
                        class: if matches!(route, Route::Summary {}) { "active" } else { "" },
                        "Summary"
                    }
                    Link {
                        to: Route::SyncStatus {},
                        class: if matches!(route, Route::SyncStatus {}) { "active" } else { "" },
                        "Sync Status"
                    }
                    Link {
                        to: Route::Vitals {},
                        class: if matches!(route, Route::Vitals {}) { "active" } else { "" },
                        "Vitals"
                    }
                    Link {
                        to: Route::Profile {},
                        class: if matches!(route, Route::Profile {}) { "active" } else { "" },
                        "Profile"
                    }
                    Link {
                        to: Route::Settings {},
                        class: if matches!(route, Route::Settings {}) { "active" } else { "" },
                        "Settings"
                    }
                }
                NavbarActions {
                    if !display_name.is_empty() {
                        span { class: "navbar-user", "{display_name}" }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
