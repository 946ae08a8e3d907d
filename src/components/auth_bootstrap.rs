//! One-shot session bootstrap gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the router at the application root. With a stored token, exactly one
//! profile fetch (plus at most the transport's single internal refresh and
//! replay) runs per application load, and children stay suppressed behind a
//! placeholder until it settles. Without a token, children render
//! immediately and no network call is made. The fetch happens here rather
//! than in a render effect precisely so it cannot rerun per render.

#[cfg(test)]
#[path = "auth_bootstrap_test.rs"]
mod auth_bootstrap_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::http::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::UserProfile;
use crate::state::session::use_session;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::{Session, SessionAction};
use crate::util::token_store;

/// Whether a stored token obligates a profile fetch before rendering.
fn needs_bootstrap(token: Option<&str>) -> bool {
    token.is_some()
}

/// Map the bootstrap fetch outcome onto credential/session effects: whether
/// the stored token must be cleared, and the action to dispatch.
#[cfg(any(test, feature = "hydrate"))]
fn settle(outcome: Result<UserProfile, ApiError>) -> (bool, SessionAction) {
    match outcome {
        Ok(profile) => (false, SessionAction::SetUser(Session { user: Some(profile.user) })),
        Err(_) => (true, SessionAction::Logout(Session::default())),
    }
}

/// Blocking session bootstrap. Renders `children` once the stored-token
/// check (and the profile fetch it may require) has settled.
#[component]
pub fn AuthBootstrap(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let pending = RwSignal::new(needs_bootstrap(token_store::load().as_deref()));

    #[cfg(feature = "hydrate")]
    {
        if pending.get_untracked() {
            let generation = session.begin();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::get_profile().await;
                if let Err(err) = &outcome {
                    log::warn!("session bootstrap failed: {err}");
                }
                let (clear_token, action) = settle(outcome);
                if clear_token {
                    token_store::clear();
                }
                session.dispatch_at(generation, action);
                pending.set(false);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Show when=move || !pending.get() fallback=|| view! { <p class="bootstrap-loading">"Loading"</p> }>
            {children()}
        </Show>
    }
}
