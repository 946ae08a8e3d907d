//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_bootstrap::AuthBootstrap;
use crate::pages::{
    account::AccountPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    recover_password::RecoverPasswordPage, register::RegisterPage, reset_password::ResetPasswordPage,
};
use crate::state::session::SessionContext;
use crate::state::ui::UiState;

/// HTML shell for an SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, then gates the router behind the
/// one-shot session bootstrap.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    let ui = RwSignal::new(UiState { dark_mode: crate::util::dark_mode::read_preference() });
    crate::util::dark_mode::apply(ui.get_untracked().dark_mode);

    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/keyfront.css"/>
        <Title text="Keyfront"/>

        <AuthBootstrap>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("recover-password") view=RecoverPasswordPage/>
                    <Route path=StaticSegment("reset") view=ResetPasswordPage/>
                    <Route path=StaticSegment("account") view=AccountPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </Router>
        </AuthBootstrap>
    }
}
