use dioxus::prelude::*;
use shared_types::Profile;

/// Global authentication state: the signed-in user's profile, fetched after
/// login and kept in sync with profile edits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub profile: Signal<Option<Profile>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            profile: Signal::new(None),
        }
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile.set(Some(profile));
    }

    pub fn clear(&mut self) {
        self.profile.set(None);
    }

    /// Nickname when set, otherwise the account email.
    pub fn display_name(&self) -> String {
        self.profile
            .read()
            .as_ref()
            .map(|p| {
                if p.nickname.is_empty() {
                    p.username.clone()
                } else {
                    p.nickname.clone()
                }
            })
            .unwrap_or_default()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
