//! System area sign-in with the allow-list gate.
//!
//! DESIGN
//! ======
//! Every auth change re-runs the server check. A denial has already signed
//! the account out server-side; the page drops the local session too and
//! marks that epoch handled so the teardown does not trigger another check.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::oauth_start_url;
use crate::state::gate::{GateEvent, GateState};
use crate::state::session::SessionState;

const RETURN_PATH: &str = "/system/login";

/// Ask the server for a verdict and feed it to the gate.
fn run_access_check(
    session: RwSignal<SessionState>,
    gate: RwSignal<GateState>,
    handled_epoch: StoredValue<Option<u64>>,
    in_flight: StoredValue<bool>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let event = match crate::net::api::check_system_access().await {
            Ok(outcome) => GateEvent::Outcome(outcome),
            Err(e) => {
                log::error!("system access check failed: {e}");
                GateEvent::CheckFailed
            }
        };
        let denied = matches!(event, GateEvent::Outcome(records::AccessOutcome::Denied { .. }));
        gate.update(|g| *g = g.next(event));
        if denied {
            session.update(SessionState::tear_down);
            handled_epoch.set_value(Some(session.with_untracked(|s| s.epoch)));
        }
        in_flight.set_value(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, gate, handled_epoch, in_flight);
}

/// Leave for the hosted sign-in page.
fn start_sign_in() {
    let url = oauth_start_url(RETURN_PATH);
    #[cfg(feature = "hydrate")]
    if let Err(e) = window().location().set_href(&url) {
        log::error!("redirect to sign-in failed: {e:?}");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = url;
}

#[component]
pub fn SystemLoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let gate = RwSignal::new(GateState::default());
    let handled_epoch = StoredValue::new(None::<u64>);
    let in_flight = StoredValue::new(false);

    Effect::new(move || {
        let (loading, epoch) = session.with(|s| (s.loading, s.epoch));
        if loading || handled_epoch.get_value() == Some(epoch) {
            return;
        }
        handled_epoch.set_value(Some(epoch));
        gate.update(|g| *g = g.next(GateEvent::AuthChanged));
    });

    Effect::new(move || {
        let checking = gate.with(GateState::is_checking);
        if !checking || session.with(|s| s.loading) || in_flight.get_value() {
            return;
        }
        in_flight.set_value(true);
        run_access_check(session, gate, handled_epoch, in_flight);
    });

    Effect::new(move || {
        if gate.with(|g| *g == GateState::AuthorizedRedirect) {
            navigate("/system", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let sign_in_again = move |_| {
        // The page is about to unload; keep the check effect quiet.
        in_flight.set_value(true);
        gate.update(|g| *g = g.next(GateEvent::SignInAgain));
        start_sign_in();
    };

    let sign_in_href = oauth_start_url(RETURN_PATH);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"System Access"</h1>
                {move || match gate.get() {
                    GateState::Checking | GateState::AuthorizedRedirect => {
                        view! { <p class="muted">"Checking access\u{2026}"</p> }.into_any()
                    }
                    GateState::Denied { email } => {
                        view! {
                            <div class="login-denied">
                                <h2>"Access denied"</h2>
                                <p>"This Google account is not authorized to access the system."</p>
                                <p class="muted">"Signed in as " {email}</p>
                                <button class="login-button login-button--google" on:click=sign_in_again>
                                    "Sign in with a different Google account"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    GateState::Idle => {
                        view! {
                            <a class="login-button login-button--google" href=sign_in_href.clone()>
                                "Sign in with Google"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
