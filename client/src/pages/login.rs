//! Login page supporting hosted Google OAuth and email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::PasswordSignIn;

use crate::net::api::oauth_start_url;
use crate::state::session::SessionState;

const MISSING_FIELDS: &str = "Enter both email and password.";

/// Form-presence check: both fields non-blank after trimming.
fn validate_sign_in(email: &str, password: &str) -> Result<PasswordSignIn, &'static str> {
    let form = PasswordSignIn { email: email.trim().to_owned(), password: password.to_owned() };
    if form.is_complete() { Ok(form) } else { Err(MISSING_FIELDS) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: nothing to do here.
    Effect::new(move || {
        if session.with(SessionState::is_signed_in) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_sign_in(&email.get(), &password.get()) {
            Ok(form) => form,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in_password(&form).await {
                Ok(()) => {
                    info.set(String::new());
                    crate::state::session::refresh_session(session);
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    let google_href = oauth_start_url("/dashboard");

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Delegate Sign In"</h1>
                <a class="login-button login-button--google" href=google_href>
                    "Sign in with Google"
                </a>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or use your email"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
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
            </div>
        </div>
    }
}
