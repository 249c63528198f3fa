//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior. Decisions come
//! from [`oidc::guard`]; this module only turns them into rendering and
//! history-replacing navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use oidc::guard;
use oidc::{AuthSnapshot, GuardDecision};

use crate::state::auth::AuthState;

type Decide = fn(&AuthSnapshot) -> GuardDecision;

/// Guard redirects replace the current entry so Back never lands on a
/// route that bounces again.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

pub(crate) fn redirect_target(state: &AuthState, decide: Decide) -> Option<&'static str> {
    match decide(&state.snapshot()) {
        GuardDecision::Redirect(path) => Some(path),
        GuardDecision::Wait | GuardDecision::Render => None,
    }
}

pub(crate) fn should_render(state: &AuthState, decide: Decide) -> bool {
    decide(&state.snapshot()) == GuardDecision::Render
}

/// Navigate whenever the guard decides to redirect.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, decide: Decide, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = auth.with(|state| redirect_target(state, decide)) {
            navigate(path, replace_options());
        }
    });
}

/// Renders children only for a signed-in user; otherwise redirects to `/login`.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, guard::protected, use_navigate());

    view! {
        <Show when=move || auth.with(|state| should_render(state, guard::protected))>
            {children()}
        </Show>
    }
}

/// Renders children only when signed out; otherwise redirects home.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, guard::public_only, use_navigate());

    view! {
        <Show when=move || auth.with(|state| should_render(state, guard::public_only))>
            {children()}
        </Show>
    }
}
