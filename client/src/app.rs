//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    admin::AdminPage, admin_partnerships::AdminPartnershipsPage, admin_volunteers::AdminVolunteersPage,
    dashboard::DashboardPage, home::HomePage, login::LoginPage, system_home::SystemHomePage,
    system_login::SystemLoginPage,
};
use crate::state::session::{SessionState, refresh_session};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
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
/// Owns the session and toast contexts and sets up client-side routing.
/// The session starts in `loading` and is resolved once on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    Effect::new(move || refresh_session(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/mwef.css"/>
        <Title text="Model WEF"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("volunteers")) view=AdminVolunteersPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("partnerships")) view=AdminPartnershipsPage/>
                    <Route path=(StaticSegment("system"), StaticSegment("login")) view=SystemLoginPage/>
                    <Route path=StaticSegment("system") view=SystemHomePage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
