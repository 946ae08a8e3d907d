//! Public landing page.

use leptos::prelude::*;

use crate::components::layout::NavBar;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let greeting = move || {
        session
            .current()
            .user
            .map_or_else(|| "Find your next place.".to_owned(), |user| format!("Welcome back, {}.", user.first_name))
    };

    view! {
        <div class="home-page">
            <NavBar/>
            <main class="home-page__body">
                <h1>"Keyfront"</h1>
                <p class="home-page__tagline">{greeting}</p>
            </main>
        </div>
    }
}
