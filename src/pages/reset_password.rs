//! Password reset page, reached from the emailed recovery link.
//!
//! The reset token rides in the link's query string and is submitted together
//! with the new password.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::layout::NavBar;
use crate::net::types::ResetPasswordRequest;
use crate::util::auth::paths;

/// Pull the reset token out of a query string like `?token=abc`.
pub(crate) fn token_from_query(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "token" && !value.is_empty()).then(|| value.to_owned())
    })
}

/// Require both passwords, matching, plus a token from the link.
pub(crate) fn validate_reset_input(
    password: &str,
    password_confirm: &str,
    token: Option<String>,
) -> Result<ResetPasswordRequest, &'static str> {
    if password.is_empty() || password_confirm.is_empty() {
        return Err("Enter the new password twice.");
    }
    if password != password_confirm {
        return Err("Passwords do not match.");
    }
    let Some(token) = token else {
        return Err("This reset link is missing its token.");
    };
    Ok(ResetPasswordRequest {
        password: password.to_owned(),
        password_confirm: password_confirm.to_owned(),
        token,
    })
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token = token_from_query(&location.search.get_untracked());
        let request = match validate_reset_input(&password.get(), &password_confirm.get(), token) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&request).await {
                    Ok(()) => {
                        navigate(paths::LOGIN, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(format!("Reset failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <div class="reset-page">
            <NavBar/>
            <div class="reset-card">
                <h1>"Reset Password"</h1>
                <form class="reset-form" on:submit=on_submit>
                    <input
                        class="reset-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="reset-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || password_confirm.get()
                        on:input=move |ev| password_confirm.set(event_target_value(&ev))
                    />
                    <button class="reset-button" type="submit" disabled=move || busy.get()>
                        "Set New Password"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="reset-message">{move || info.get()}</p>
                </Show>
                <p class="reset-aside">
                    <a href=paths::LOGIN>"Back to login"</a>
                </p>
            </div>
        </div>
    }
}
