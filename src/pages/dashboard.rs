//! Dashboard root for privileged roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route for owners and staff. The
//! dashboard guard sends clients to the account surface; anonymous visitors
//! see only the signed-out placeholder.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::session::use_session;
use crate::state::ui::UiState;
use crate::util::auth::{dashboard_redirect, install_redirect, paths};

/// Header label for the signed-in account.
pub(crate) fn identity_label(user: Option<&User>) -> String {
    user.map_or_else(
        || "guest".to_owned(),
        |user| format!("{} {} ({})", user.first_name, user.last_name, user.role.as_str()),
    )
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    install_redirect(session, use_navigate(), dashboard_redirect);
    let ui = expect_context::<RwSignal<UiState>>();

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
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <span class="toolbar__self">
                    {move || identity_label(session.current().user.as_ref())}
                </span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <main class="dashboard-page__body">
                <Show
                    when=move || session.current().user.is_some()
                    fallback=|| {
                        view! {
                            <p>
                                "You are signed out. " <a href=paths::LOGIN>"Sign in"</a>
                                " to manage the portal."
                            </p>
                        }
                    }
                >
                    <section class="dashboard-page__panel">
                        <h2>"Portal management"</h2>
                        <p>"Listings, bookings and staff tools land here."</p>
                    </section>
                </Show>
            </main>
        </div>
    }
}
