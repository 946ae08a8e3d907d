//! Shared page chrome: navigation header with theme toggle.

use leptos::prelude::*;

use crate::state::session::use_session;
use crate::state::ui::UiState;
use crate::util::auth::paths;

/// Top navigation bar. Links react to the session: anonymous visitors see
/// login/register, authenticated users see their account.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="nav">
            <a class="nav__brand" href=paths::HOME>"Keyfront"</a>
            <nav class="nav__links">
                <Show
                    when=move || session.current().user.is_some()
                    fallback=|| {
                        view! {
                            <a href=paths::LOGIN>"Login"</a>
                            <a href=paths::REGISTER>"Register"</a>
                        }
                    }
                >
                    <a href=paths::ACCOUNT>"Account"</a>
                </Show>
            </nav>
            <button
                class="btn nav__dark-toggle"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
