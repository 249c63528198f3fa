//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guards wrap pages at the router, not inside them.

pub mod callback;
pub mod home;
pub mod login;
