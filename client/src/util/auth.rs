//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. Nothing is
//! decided while the session is still loading.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// What a route needs from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    SignedIn,
    Admin,
}

/// Guard verdict for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still loading; render a placeholder and decide later.
    Wait,
    Allow,
    Redirect(&'static str),
}

/// Decide whether a route guarded by `requirement` may render.
#[must_use]
pub fn session_gate(state: &SessionState, requirement: Requirement) -> GateDecision {
    if state.loading {
        return GateDecision::Wait;
    }
    if state.user.is_none() {
        return GateDecision::Redirect(if state.signed_out { "/" } else { "/login" });
    }
    match requirement {
        Requirement::SignedIn => GateDecision::Allow,
        Requirement::Admin if state.is_admin => GateDecision::Allow,
        Requirement::Admin => GateDecision::Redirect("/dashboard"),
    }
}

/// Redirect away whenever the session has loaded and fails `requirement`.
pub fn install_session_guard<F>(session: RwSignal<SessionState>, requirement: Requirement, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GateDecision::Redirect(path) = session.with(|s| session_gate(s, requirement)) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
