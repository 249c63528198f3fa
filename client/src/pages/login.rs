//! Login page: a single "Sign in" action that starts the provider redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in `PublicOnly`, so a signed-in user never sees it. Failed
//! callbacks land here as `/login?error=<code>`; session-ending failures
//! (renewal, expiry) arrive through `AuthState::last_error` instead.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use oidc::AuthError;

use crate::state::auth::{AuthState, SessionHandle};

const UNKNOWN_ERROR_MESSAGE: &str = "Sign-in failed. Please try again.";

/// Message for the error indicator. A `?error=` code from a failed callback
/// wins over the state's last error.
fn error_message(query_code: Option<&str>, last_error: Option<&str>) -> Option<String> {
    match query_code.map(str::trim).filter(|code| !code.is_empty()) {
        Some(code) => Some(AuthError::describe_code(code).unwrap_or(UNKNOWN_ERROR_MESSAGE).to_owned()),
        None => last_error.map(str::to_owned),
    }
}

fn button_label(busy: bool) -> &'static str {
    if busy { "Redirecting..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();
    let query = use_query_map();
    let busy = RwSignal::new(false);
    let dispatch_error = RwSignal::new(None::<String>);

    let message = move || {
        dispatch_error.get().or_else(|| {
            let code = query.with(|q| q.get("error"));
            auth.with(|state| error_message(code.as_deref(), state.last_error.as_deref()))
        })
    };

    let on_sign_in = move |_| {
        if busy.get() {
            return;
        }
        let Some(client) = session.client() else {
            return;
        };
        busy.set(true);
        dispatch_error.set(None);

        leptos::task::spawn_local(async move {
            // On success the page is navigating away; leave the button busy.
            if let Err(e) = client.login().await {
                dispatch_error.set(AuthError::describe_code(e.code()).map(str::to_owned));
                busy.set(false);
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"chatdocs"</h1>
                <p class="login-card__subtitle">"Sign in with your organization account"</p>
                <button
                    class="login-button"
                    type="button"
                    on:click=on_sign_in
                    disabled=move || busy.get() || !session.is_ready()
                >
                    {move || button_label(busy.get())}
                </button>
                <Show when=move || message().is_some()>
                    <p class="login-message login-message--error" role="alert">
                        {move || message().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
