//! Chat home: the authenticated landing route.
//!
//! Only the shell lives here; conversations and document search are served
//! by other parts of the product.

use leptos::prelude::*;

use crate::components::user_menu::UserMenu;
use crate::state::auth::AuthState;

fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome back.".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let heading = move || auth.with(|s| greeting(s.display_name()));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__brand">"chatdocs"</span>
                <nav class="home-page__nav">
                    <a href="/docs/" rel="external">"Docs"</a>
                </nav>
                <UserMenu/>
            </header>
            <main class="chat">
                <h1 class="chat__greeting">{heading}</h1>
                <div class="chat__messages" aria-live="polite"></div>
                <form class="chat__composer" on:submit=|ev| ev.prevent_default()>
                    <textarea class="chat__input" placeholder="Ask about the docs..." rows="2"></textarea>
                    <button class="chat__send" type="submit">"Send"</button>
                </form>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_uses_name_when_known() {
        assert_eq!(greeting(Some("Ada Lovelace")), "Welcome back, Ada Lovelace.");
        assert_eq!(greeting(None), "Welcome back.");
    }
}
