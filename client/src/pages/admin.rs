//! Admin index: links to the review panels.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{GateDecision, Requirement, install_session_guard, session_gate};

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_session_guard(session, Requirement::Admin, use_navigate());
    let allowed = move || session.with(|s| session_gate(s, Requirement::Admin) == GateDecision::Allow);

    view! {
        <Show when=allowed fallback=|| view! { <div class="page-loading">"Checking access..."</div> }>
            <div class="admin-index">
                <h1>"Admin Dashboard"</h1>
                <div class="admin-index__grid">
                    <a class="card card--link" href="/admin/volunteers">
                        <h2>"Volunteer Applications"</h2>
                        <p class="muted">"Review and approve volunteer sign-ups."</p>
                    </a>
                    <a class="card card--link" href="/admin/partnerships">
                        <h2>"Partnership Applications"</h2>
                        <p class="muted">"Review partnership and sponsorship requests."</p>
                    </a>
                </div>
            </div>
        </Show>
    }
}
