//! Account surface for every signed-in role.
//!
//! Shows the profile snapshot and lets the user update their name. A
//! successful update dispatches the refreshed snapshot so every consumer
//! sees the new profile at once.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::components::layout::NavBar;
use crate::net::types::UserUpdate;
use crate::state::session::use_session;
use crate::util::auth::paths;

/// Build the partial update from the name inputs; empty inputs mean "leave
/// unchanged", and at least one change is required.
pub(crate) fn validate_profile_input(first_name: &str, last_name: &str) -> Result<UserUpdate, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if first_name.is_empty() && last_name.is_empty() {
        return Err("Change at least one field.");
    }
    Ok(UserUpdate {
        first_name: (!first_name.is_empty()).then(|| first_name.to_owned()),
        last_name: (!last_name.is_empty()).then(|| last_name.to_owned()),
        role: None,
    })
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = use_session();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = match validate_profile_input(&first_name.get(), &last_name.get()) {
            Ok(update) => update,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let generation = session.begin();
            leptos::task::spawn_local(async move {
                use crate::state::session::{Session, SessionAction};
                match crate::net::api::update_profile(&update).await {
                    Ok(profile) => {
                        session.dispatch_at(generation, SessionAction::SetUser(Session { user: Some(profile.user) }));
                        info.set("Profile updated.".to_owned());
                    }
                    Err(err) => info.set(format!("Update failed: {err}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let generation = session.begin();
            leptos::task::spawn_local(async move {
                use crate::state::session::{Session, SessionAction};
                if let Err(err) = crate::net::api::logout().await {
                    log::warn!("logout request failed: {err}");
                }
                session.dispatch_at(generation, SessionAction::Logout(Session::default()));
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(crate::util::auth::paths::HOME);
                }
            });
        }
    };

    view! {
        <div class="account-page">
            <NavBar/>
            <main class="account-page__body">
                <Show
                    when=move || session.current().user.is_some()
                    fallback=|| {
                        view! {
                            <p>
                                "You are signed out. " <a href=paths::LOGIN>"Sign in"</a>
                                " to see your account."
                            </p>
                        }
                    }
                >
                    <section class="account-card">
                        <h1>"Account"</h1>
                        {move || {
                            session.current().user.map(|user| {
                                view! {
                                    <dl class="account-card__facts">
                                        <dt>"Name"</dt>
                                        <dd>{format!("{} {}", user.first_name, user.last_name)}</dd>
                                        <dt>"Email"</dt>
                                        <dd>{user.email.clone()}</dd>
                                        <dt>"Role"</dt>
                                        <dd>{user.role.as_str()}</dd>
                                        <dt>"Verified"</dt>
                                        <dd>{if user.is_verified { "yes" } else { "no" }}</dd>
                                    </dl>
                                }
                            })
                        }}
                        <form class="account-form" on:submit=on_submit>
                            <input
                                class="account-input"
                                type="text"
                                placeholder="New first name"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                            <input
                                class="account-input"
                                type="text"
                                placeholder="New last name"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                            <button class="account-button" type="submit" disabled=move || busy.get()>
                                "Save"
                            </button>
                        </form>
                        <Show when=move || !info.get().is_empty()>
                            <p class="account-message">{move || info.get()}</p>
                        </Show>
                        <button class="btn account-logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </section>
                </Show>
            </main>
        </div>
    }
}
