//! Login page with role-aware post-login redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page itself never navigates on success: it dispatches the session
//! transition and the entry guard (installed here, reactive on session
//! change) performs the role-based redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::NavBar;
use crate::state::session::use_session;
use crate::util::auth::{entry_redirect, install_redirect, paths};

/// Trim and require both credential fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    install_redirect(session, use_navigate(), entry_redirect);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let generation = session.begin();
            leptos::task::spawn_local(async move {
                let credentials = crate::net::types::LoginRequest { email: email_value, password: password_value };
                match crate::net::api::login(&credentials).await {
                    Ok(response) => {
                        use crate::state::session::{Session, SessionAction};
                        session.dispatch_at(generation, SessionAction::Login(Session { user: Some(response.user) }));
                    }
                    Err(err) => {
                        info.set(format!("Login failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <NavBar/>
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-aside">
                    <a href=paths::RECOVER_PASSWORD>"Forgot password?"</a>
                </p>
            </div>
        </div>
    }
}
