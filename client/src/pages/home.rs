//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cta = move || {
        if session.with(SessionState::is_signed_in) {
            ("/dashboard", "Go to Dashboard")
        } else {
            ("/login", "Delegate Sign In")
        }
    };

    view! {
        <section class="hero">
            <h1 class="hero__title">"Model World Economic Forum"</h1>
            <p class="hero__subtitle">"Conference day: 21 February 2026"</p>
            <a class="btn btn--primary" href=move || cta().0>{move || cta().1}</a>
        </section>
    }
}
