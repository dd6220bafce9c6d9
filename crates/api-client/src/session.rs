//! Injected session context for the bearer token.
//!
//! The browser implementation lives in the app crate (localStorage when the
//! user checked "remember me", sessionStorage otherwise). Tests use
//! [`MemorySession`], which models the same two-tier storage in memory.

use std::sync::Mutex;

/// Explicit get/set/clear access to the stored access token. Implementations
/// must not keep a cached copy — `token()` reads the backing storage each
/// time so concurrent clears are observed immediately.
pub trait SessionStore: Send + Sync {
    /// The current token, persistent storage first.
    fn token(&self) -> Option<String>;

    /// Store a token. `remember` selects persistent storage; either way the
    /// other tier is cleared so exactly one copy exists.
    fn store(&self, token: &str, remember: bool);

    /// Remove the token from both tiers.
    fn clear(&self);
}

/// In-memory two-tier store for tests and non-browser targets.
#[derive(Default)]
pub struct MemorySession {
    persistent: Mutex<Option<String>>,
    session: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        if let Ok(guard) = self.persistent.lock() {
            if guard.is_some() {
                return guard.clone();
            }
        }
        self.session.lock().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: &str, remember: bool) {
        let (target, other) = if remember {
            (&self.persistent, &self.session)
        } else {
            (&self.session, &self.persistent)
        };
        if let Ok(mut guard) = target.lock() {
            *guard = Some(token.to_string());
        }
        if let Ok(mut guard) = other.lock() {
            *guard = None;
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.persistent.lock() {
            *guard = None;
        }
        if let Ok(mut guard) = self.session.lock() {
            *guard = None;
        }
    }
}
