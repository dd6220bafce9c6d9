use std::sync::Arc;

use api_client::ApiClient;
use dioxus::prelude::*;

mod auth;
mod filters;
mod format_helpers;
mod notify;
mod routes;
mod session;

use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client for the whole app: browser-backed session storage plus a
    // hard redirect to the login route whenever the API answers 401.
    use_context_provider(|| {
        ApiClient::new(
            api_client::config::base_url(),
            Arc::new(session::BrowserSession),
        )
        .with_unauthorized_hook(session::redirect_to_login)
    });

    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
