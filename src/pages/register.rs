//! Registration page.
//!
//! The entry guard applies here exactly as on the login surface: an already
//! authenticated user is redirected away by role.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::NavBar;
use crate::net::types::{RegisterRequest, UserRole};
use crate::state::session::use_session;
use crate::util::auth::{entry_redirect, install_redirect, paths};

/// Form fields as captured from the inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub password_confirm: String,
}

/// Trim, require every field, check the confirmation, and resolve the role.
pub(crate) fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Fill in every field.");
    }
    if form.password != form.password_confirm {
        return Err("Passwords do not match.");
    }
    let Some(role) = UserRole::parse(&form.role) else {
        return Err("Pick an account type.");
    };
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        role,
        password: form.password.clone(),
        password_confirm: form.password_confirm.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_redirect(session, navigate.clone(), entry_redirect);

    let form = RwSignal::new(RegisterForm { role: "client".to_owned(), ..RegisterForm::default() });
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(_) => {
                        navigate(paths::LOGIN, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(format!("Registration failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="register-page">
            <NavBar/>
            <div class="register-card">
                <h1>"Register"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || form.get().first_name
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || form.get().last_name
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <select
                        class="register-input"
                        prop:value=move || form.get().role
                        on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                    >
                        <option value="client">"Client"</option>
                        <option value="owner">"Owner"</option>
                        <option value="staff">"Staff"</option>
                    </select>
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.get().password_confirm
                        on:input=move |ev| form.update(|f| f.password_confirm = event_target_value(&ev))
                    />
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
                <p class="register-aside">
                    <a href=paths::LOGIN>"Already have an account?"</a>
                </p>
            </div>
        </div>
    }
}
