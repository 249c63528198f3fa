//! Networking and browser adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to our own server; `browser` implements the
//! `oidc` platform traits (storage, navigation, provider HTTP, silent
//! iframe, timers) on top of `web-sys` and `gloo`.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod browser;
