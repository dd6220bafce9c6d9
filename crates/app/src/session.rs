//! Browser-backed session storage.
//!
//! The access token lives in `localStorage` when the user checked
//! "remember me" (survives browser restarts) and in `sessionStorage`
//! otherwise (dropped when the tab closes). Exactly one tier holds the token
//! at any time. The admin panel gate is a separate sessionStorage marker.

use api_client::SessionStore;

const TOKEN_KEY: &str = "token";
const REMEMBER_KEY: &str = "rememberMe";
const ADMIN_ACCESS_KEY: &str = "adminAccess";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// [`SessionStore`] over the browser's two storage tiers.
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        local_storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .or_else(|| session_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten()))
    }

    fn store(&self, token: &str, remember: bool) {
        if remember {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(REMEMBER_KEY, "true");
            }
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        } else {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(REMEMBER_KEY);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(REMEMBER_KEY);
        }
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Hard navigation to the login route. Used as the client's 401 hook, where
/// the router context is not available.
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Whether the current tab has unlocked the admin panel.
pub fn has_admin_access() -> bool {
    session_storage()
        .and_then(|s| s.get_item(ADMIN_ACCESS_KEY).ok().flatten())
        .is_some()
}

pub fn grant_admin_access() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(ADMIN_ACCESS_KEY, "true");
    }
}

pub fn revoke_admin_access() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(ADMIN_ACCESS_KEY);
    }
}
