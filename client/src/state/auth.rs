//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The signal is a mirror of
//! [`oidc::AuthStore`]: it is written only from the store subscription
//! installed at startup, never by pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use oidc::{AuthError, AuthEvent, AuthSnapshot, Profile, SessionClient};

/// Authentication state provided to the app as `RwSignal<AuthState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Profile>,
    pub authenticated: bool,
    /// True until startup has resolved the persisted session.
    pub loading: bool,
    /// User-facing message for the last session-ending failure.
    pub last_error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, authenticated: false, loading: true, last_error: None }
    }
}

impl AuthState {
    /// Guard input.
    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot { authenticated: self.authenticated, profile: self.user.clone(), loading: self.loading }
    }

    /// Mirror one store notification.
    pub fn apply(&mut self, event: &AuthEvent, snapshot: &AuthSnapshot) {
        self.user.clone_from(&snapshot.profile);
        self.authenticated = snapshot.authenticated;
        self.loading = snapshot.loading;
        match event {
            AuthEvent::UserLoaded(_) => self.last_error = None,
            AuthEvent::SilentRenewError(_) => {
                self.last_error = AuthError::describe_code("E_SILENT_RENEW").map(str::to_owned);
            }
            AuthEvent::TokenExpired if !snapshot.loading => {
                self.last_error = Some("Your session expired. Please sign in again.".to_owned());
            }
            _ => {}
        }
    }

    /// Startup could not build a session client; resolve to signed out.
    pub fn fail_startup(&mut self, message: impl Into<String>) {
        self.user = None;
        self.authenticated = false;
        self.loading = false;
        self.last_error = Some(message.into());
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(Profile::display_name)
    }
}

/// The tab's session client, available once startup has fetched config.
///
/// `Copy` so it can move into any number of event handlers.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    client: StoredValue<Option<SessionClient>, LocalStorage>,
    ready: RwSignal<bool>,
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { client: StoredValue::new_local(None), ready: RwSignal::new(false) }
    }

    pub fn install(&self, client: SessionClient) {
        self.client.set_value(Some(client));
        self.ready.set(true);
    }

    #[must_use]
    pub fn client(&self) -> Option<SessionClient> {
        self.client.get_value()
    }

    /// Reactive: tracks installation.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}
