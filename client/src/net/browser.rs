//! Browser implementations of the `oidc` platform traits.
//!
//! ARCHITECTURE
//! ============
//! - Storage: `sessionStorage` (per tab), falling back to memory when the
//!   browser denies access.
//! - Provider HTTP: `gloo-net` fetch against the provider's endpoints.
//! - Silent renew: a hidden same-origin iframe. The silent callback page
//!   inside it posts its own URL to this window; the parent completes the
//!   exchange, so the frame never touches session state.
//! - Timers: `gloo-timers` on the browser event loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{Either, LocalBoxFuture};
use gloo_net::http::Request;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlIFrameElement, MessageEvent};

use oidc::platform::{Clock, NavigationError, Navigator, Runtime, SilentFrame};
use oidc::provider::{self, Provider, ProviderError, ProviderMetadata, TokenRequest, TokenResponse, UserInfo};
use oidc::storage::{MemoryStorage, Storage, StorageError};
use oidc::{Collaborators, OidcConfig};

const SILENT_RENEW_TIMEOUT_MS: u32 = 10_000;
/// `setTimeout` overflows past `i32::MAX` milliseconds.
const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

fn js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Everything a browser tab needs to run a session client.
pub fn collaborators(config: &OidcConfig) -> Collaborators {
    let storage: Rc<dyn Storage> = match WebStorage::session() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("sessionStorage unavailable; session will not survive a reload");
            Rc::new(MemoryStorage::new())
        }
    };
    Collaborators {
        provider: Rc::new(GlooProvider),
        storage,
        navigator: Rc::new(WindowNavigator),
        silent_frame: Some(Rc::new(IframeSilentFrame::new(&config.silent_redirect_uri))),
        clock: Rc::new(JsClock),
        runtime: Some(Rc::new(BrowserRuntime)),
    }
}

// =============================================================================
// STORAGE
// =============================================================================

pub struct WebStorage {
    inner: web_sys::Storage,
}

impl WebStorage {
    pub fn session() -> Option<Self> {
        let inner = web_sys::window()?.session_storage().ok().flatten()?;
        Some(Self { inner })
    }
}

impl Storage for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError(js_error(&e)))
    }

    fn remove(&self, key: &str) {
        let _ = self.inner.remove_item(key);
    }

    fn keys(&self) -> Vec<String> {
        let len = self.inner.length().unwrap_or(0);
        (0..len).filter_map(|i| self.inner.key(i).ok().flatten()).collect()
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect(&self, url: &Url) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or_else(|| NavigationError("no window".into()))?;
        window.location().assign(url.as_str()).map_err(|e| NavigationError(js_error(&e)))
    }
}

/// True inside a same-origin iframe.
pub fn is_framed() -> bool {
    web_sys::window().and_then(|w| w.frame_element().ok().flatten()).is_some()
}

/// Full URL of the current page.
pub fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Hand a silent callback URL to the window that owns the hidden frame.
pub fn post_to_parent(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(origin) = window.location().origin() else {
        return false;
    };
    match window.parent() {
        Ok(Some(parent)) => parent.post_message(&wasm_bindgen::JsValue::from_str(url), &origin).is_ok(),
        _ => false,
    }
}

// =============================================================================
// PROVIDER HTTP
// =============================================================================

pub struct GlooProvider;

fn network(err: &gloo_net::Error) -> ProviderError {
    ProviderError::Network(err.to_string())
}

async fn read(response: gloo_net::http::Response) -> Result<(u16, String), ProviderError> {
    let status = response.status();
    let body = response.text().await.map_err(|e| network(&e))?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl Provider for GlooProvider {
    async fn discover(&self, discovery_url: &Url) -> Result<ProviderMetadata, ProviderError> {
        let response = Request::get(discovery_url.as_str()).send().await.map_err(|e| network(&e))?;
        let (status, body) = read(response).await?;
        provider::parse_metadata(status, &body)
    }

    async fn token(&self, token_endpoint: &str, request: &TokenRequest) -> Result<TokenResponse, ProviderError> {
        let response = Request::post(token_endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(request.encode_form())
            .map_err(|e| network(&e))?
            .send()
            .await
            .map_err(|e| network(&e))?;
        let (status, body) = read(response).await?;
        provider::parse_token_response(status, &body)
    }

    async fn user_info(&self, userinfo_endpoint: &str, access_token: &str) -> Result<UserInfo, ProviderError> {
        let response = Request::get(userinfo_endpoint)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| network(&e))?;
        let (status, body) = read(response).await?;
        provider::parse_user_info(status, &body)
    }
}

// =============================================================================
// SILENT RENEW FRAME
// =============================================================================

pub struct IframeSilentFrame {
    callback_prefix: String,
    timeout_ms: u32,
}

impl IframeSilentFrame {
    pub fn new(silent_redirect_uri: &str) -> Self {
        Self { callback_prefix: silent_redirect_uri.to_owned(), timeout_ms: SILENT_RENEW_TIMEOUT_MS }
    }
}

#[async_trait(?Send)]
impl SilentFrame for IframeSilentFrame {
    async fn navigate(&self, url: &Url) -> Result<String, NavigationError> {
        let fail = |msg: String| NavigationError(msg);
        let window = web_sys::window().ok_or_else(|| fail("no window".into()))?;
        let document = window.document().ok_or_else(|| fail("no document".into()))?;
        let body = document.body().ok_or_else(|| fail("no body".into()))?;
        let origin = window.location().origin().map_err(|e| fail(js_error(&e)))?;

        let frame: HtmlIFrameElement = document
            .create_element("iframe")
            .map_err(|e| fail(js_error(&e)))?
            .dyn_into()
            .map_err(|_| fail("iframe element has unexpected type".into()))?;
        frame.set_attribute("style", "display:none").map_err(|e| fail(js_error(&e)))?;
        frame.set_attribute("aria-hidden", "true").map_err(|e| fail(js_error(&e)))?;

        let (tx, rx) = futures::channel::oneshot::channel::<String>();
        let tx = RefCell::new(Some(tx));
        let prefix = self.callback_prefix.clone();
        let listener = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if event.origin() != origin {
                return;
            }
            let Some(data) = event.data().as_string() else {
                return;
            };
            if !data.starts_with(&prefix) {
                return;
            }
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(data);
            }
        });
        window
            .add_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
            .map_err(|e| fail(js_error(&e)))?;

        frame.set_src(url.as_str());
        let attached = body.append_child(&frame);
        let outcome = match attached {
            Ok(_) => {
                let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
                match futures::future::select(rx, timeout).await {
                    Either::Left((Ok(callback_url), _)) => Ok(callback_url),
                    Either::Left((Err(_), _)) => Err(fail("silent frame listener dropped".into())),
                    Either::Right(_) => Err(fail("silent renew timed out".into())),
                }
            }
            Err(e) => Err(fail(js_error(&e))),
        };

        let _ = window.remove_event_listener_with_callback("message", listener.as_ref().unchecked_ref());
        frame.remove();
        outcome
    }
}

// =============================================================================
// CLOCK + TIMERS
// =============================================================================

pub struct JsClock;

impl Clock for JsClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }
}

pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(MAX_TIMEOUT_MS).min(MAX_TIMEOUT_MS);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}
