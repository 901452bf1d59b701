//! System console landing page, only reachable through the allow-list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::SessionUser;

#[component]
pub fn SystemHomePage() -> impl IntoView {
    let navigate = use_navigate();
    let identity = RwSignal::new(None::<SessionUser>);
    let to_login = move || navigate("/system/login", NavigateOptions { replace: true, ..NavigateOptions::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_system_identity().await {
            Ok(Some(user)) => identity.set(Some(user)),
            Ok(None) => to_login(),
            Err(e) => {
                log::error!("system identity fetch failed: {e}");
                to_login();
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = to_login;

    view! {
        <Show
            when=move || identity.with(Option::is_some)
            fallback=|| view! { <div class="page-loading">"Checking access\u{2026}"</div> }
        >
            <div class="system-console">
                <h1>"System Console"</h1>
                <p class="muted">
                    "Signed in as "
                    {move || identity.with(|u| u.as_ref().and_then(|u| u.email.clone()).unwrap_or_default())}
                </p>
                <div class="admin-index__grid">
                    <a class="card card--link" href="/admin/volunteers">
                        <h2>"Volunteer Applications"</h2>
                    </a>
                    <a class="card card--link" href="/admin/partnerships">
                        <h2>"Partnership Applications"</h2>
                    </a>
                </div>
            </div>
        </Show>
    }
}
