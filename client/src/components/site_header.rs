//! Top navigation bar.
//!
//! Links depend on the session: signed-out visitors see "Sign In", members
//! see their dashboard, admins additionally see the review area.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let signed_in = move || session.with(SessionState::is_signed_in);
    let is_admin = move || session.with(|s| s.is_signed_in() && s.is_admin);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Model WEF"</a>
            <nav class="site-header__nav">
                <Show
                    when=signed_in
                    fallback=|| view! { <a class="site-header__link" href="/login">"Sign In"</a> }
                >
                    <a class="site-header__link" href="/dashboard">"Dashboard"</a>
                </Show>
                <Show when=is_admin>
                    <a class="site-header__link" href="/admin">"Admin"</a>
                </Show>
            </nav>
        </header>
    }
}
