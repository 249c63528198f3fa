//! Signed-in user chip with a sign-out action.

#[cfg(test)]
#[path = "user_menu_test.rs"]
mod user_menu_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use oidc::Profile;
use oidc::callback::login_error_path;

use crate::state::auth::{AuthState, SessionHandle};
use crate::util::auth::replace_options;

/// One or two uppercase letters for the avatar bubble.
fn initials(label: &str) -> String {
    let mut words = label.split(|c: char| c.is_whitespace() || c == '@' || c == '.').filter(|w| !w.is_empty());
    let first = words.next().and_then(|w| w.chars().next());
    let second = words.next().and_then(|w| w.chars().next());
    first.into_iter().chain(second).flat_map(char::to_uppercase).collect()
}

fn email_line(profile: &Profile) -> Option<String> {
    let email = profile.email.as_ref()?;
    if profile.name.is_none() {
        return None;
    }
    Some(if profile.email_verified { email.clone() } else { format!("{email} (unverified)") })
}

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let name = move || auth.with(|s| s.display_name().unwrap_or("—").to_owned());
    let avatar = move || auth.with(|s| initials(s.display_name().unwrap_or_default()));
    let email = move || auth.with(|s| s.user.as_ref().and_then(email_line));

    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        let Some(client) = session.client() else {
            return;
        };
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // The local session is gone before this resolves; only the
            // provider round trip can fail.
            if let Err(e) = client.logout().await {
                log::warn!("sign-out redirect failed: {e}");
                navigate(&login_error_path(&e), replace_options());
            }
        });
    };

    view! {
        <div class="user-menu">
            <span class="user-menu__avatar" aria-hidden="true">{avatar}</span>
            <div class="user-menu__identity">
                <span class="user-menu__name">{name}</span>
                <Show when=move || email().is_some()>
                    <span class="user-menu__email">{move || email().unwrap_or_default()}</span>
                </Show>
            </div>
            <button class="user-menu__sign-out" type="button" on:click=on_sign_out disabled=move || busy.get()>
                "Sign out"
            </button>
        </div>
    }
}
