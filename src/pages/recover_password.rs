//! Password recovery request page.

#[cfg(test)]
#[path = "recover_password_test.rs"]
mod recover_password_test;

use leptos::prelude::*;

use crate::components::layout::NavBar;

/// Trim and require the address.
pub(crate) fn validate_email_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email first.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn RecoverPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting recovery email...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::recover_password(&email_value).await {
                Ok(()) => info.set("Password recovery email sent. Check your inbox.".to_owned()),
                Err(err) => info.set(format!("Recovery failed: {err}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="recover-page">
            <NavBar/>
            <div class="recover-card">
                <h1>"Recover Password"</h1>
                <form class="recover-form" on:submit=on_submit>
                    <input
                        class="recover-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="recover-button" type="submit" disabled=move || busy.get()>
                        "Send Recovery Email"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="recover-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
