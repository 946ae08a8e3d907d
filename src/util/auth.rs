//! Role-gated navigation guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components install identical redirect behavior: a pure decision
//! function over the current session, wired into a reactive effect that
//! reruns only when the session changes. The decision functions match roles
//! exhaustively, so adding a role forces every guard to be revisited.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::UserRole;
use crate::state::session::{Session, SessionContext};

/// Route paths shared by guards, pages, and navigation.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const RECOVER_PASSWORD: &str = "/recover-password";
    pub const RESET_PASSWORD: &str = "/reset";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ACCOUNT: &str = "/account";
}

/// Guard for the login and register surfaces: an authenticated user is
/// redirected away, to the dashboard for privileged roles and home otherwise.
pub fn entry_redirect(session: &Session) -> Option<&'static str> {
    let user = session.user.as_ref()?;
    match user.role {
        UserRole::Owner | UserRole::Staff => Some(paths::DASHBOARD),
        UserRole::Client => Some(paths::HOME),
    }
}

/// Guard for the dashboard root: clients are sent to the non-privileged
/// account surface. Anonymous visitors are left alone (the surface renders
/// nothing privileged for them).
pub fn dashboard_redirect(session: &Session) -> Option<&'static str> {
    match session.user.as_ref()?.role {
        UserRole::Client => Some(paths::ACCOUNT),
        UserRole::Owner | UserRole::Staff => None,
    }
}

/// Install `decide` as a reactive redirect on the current route.
///
/// The effect tracks the session signal, so it reruns on session change, not
/// on every render; a `None` decision navigates nowhere, which keeps the
/// guard loop-free.
pub fn install_redirect<F>(session: SessionContext, navigate: F, decide: fn(&Session) -> Option<&'static str>)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if let Some(target) = decide(&session.current()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
