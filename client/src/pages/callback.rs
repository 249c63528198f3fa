//! Redirect targets for the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/auth/callback` finishes an interactive login and leaves with a history
//! replacement, so Back never re-submits a spent authorization code.
//! `/auth/silent-callback` is loaded inside the hidden renewal frame and
//! hands its URL to the parent window, which owns the session client.
//!
//! Both views may re-render while the exchange is in flight; a
//! [`CallbackOnce`] latch keeps each mount to a single attempt.

use leptos::prelude::*;
use oidc::callback::CallbackOnce;

use crate::state::auth::{AuthState, SessionHandle};

#[component]
pub fn CallbackPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let once = StoredValue::new_local(CallbackOnce::new());

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_navigate;
        use oidc::callback::complete_interactive;
        use oidc::guard::LOGIN_PATH;

        use crate::net::browser;
        use crate::util::auth::replace_options;

        let navigate = use_navigate();
        Effect::new(move || {
            if !session.is_ready() {
                // Startup failed without a client; the login page shows why.
                if !auth.with(|s| s.loading) {
                    navigate(LOGIN_PATH, replace_options());
                }
                return;
            }
            if !once.with_value(CallbackOnce::try_begin) {
                return;
            }
            let (Some(client), Some(url)) = (session.client(), browser::current_href()) else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let next = complete_interactive(&client, &url).await;
                navigate(&next, replace_options());
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (session, auth, once);

    view! {
        <div class="callback-page" aria-busy="true">
            <div class="spinner" role="status"></div>
            <p class="callback-page__message">"Signing you in..."</p>
        </div>
    }
}

#[component]
pub fn SilentCallbackPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let once = StoredValue::new_local(CallbackOnce::new());

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_navigate;
        use oidc::callback::complete_silent;
        use oidc::guard::HOME_PATH;

        use crate::net::browser;
        use crate::util::auth::replace_options;

        let navigate = use_navigate();
        Effect::new(move || {
            if browser::is_framed() {
                if once.with_value(CallbackOnce::try_begin) {
                    let posted = browser::current_href().is_some_and(|url| browser::post_to_parent(&url));
                    if !posted {
                        log::warn!("silent callback could not reach the parent window");
                    }
                }
                return;
            }

            // Opened top-level: finish the renewal with this tab's own client.
            if !session.is_ready() || !once.with_value(CallbackOnce::try_begin) {
                return;
            }
            let (Some(client), Some(url)) = (session.client(), browser::current_href()) else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let _ = complete_silent(&client, &url).await;
                navigate(HOME_PATH, replace_options());
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (session, once);

    view! { <div class="silent-callback" hidden=true></div> }
}
