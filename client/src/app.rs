//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup fetches the public OIDC settings from the server, builds the tab's
//! [`SessionClient`] over the browser adapters and bridges its auth store into
//! the `RwSignal<AuthState>` context. Until that resolves, `loading` stays
//! true and no guard makes a decision.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::callback::{CallbackPage, SilentCallbackPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::auth::{AuthState, SessionHandle};
use crate::util::auth::{Protected, PublicOnly};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session = SessionHandle::new();
    provide_context(auth);
    provide_context(session);

    #[cfg(feature = "hydrate")]
    start_session(auth, session);

    view! {
        <Title text="chatdocs"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Protected><HomePage/></Protected> }/>
                <Route path=StaticSegment("login") view=|| view! { <PublicOnly><LoginPage/></PublicOnly> }/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=CallbackPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("silent-callback")) view=SilentCallbackPage/>
            </Routes>
        </Router>
    }
}

/// Build the session client and resolve the persisted session.
///
/// Skipped inside the hidden renewal frame: the frame only hands its URL to
/// the parent, and a second client there would run its own renewal timers.
#[cfg(feature = "hydrate")]
fn start_session(auth: RwSignal<AuthState>, session: SessionHandle) {
    use oidc::SessionClient;

    use crate::net::api::fetch_oidc_config;
    use crate::net::browser;

    if browser::is_framed() {
        return;
    }

    leptos::task::spawn_local(async move {
        let config = match fetch_oidc_config().await {
            Ok(config) => config,
            Err(e) => {
                log::error!("auth config unavailable: {e}");
                auth.update(|s| s.fail_startup("Sign-in is unavailable right now. Please try again later."));
                return;
            }
        };

        let deps = browser::collaborators(&config);
        let client = SessionClient::new(config, deps);
        client.store().subscribe(move |event, snapshot| {
            log::debug!("auth event: {}", event.name());
            auth.update(|s| s.apply(event, snapshot));
        });
        session.install(client.clone());
        client.initialize().await;
    });
}
