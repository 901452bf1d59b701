//! System access gate state machine.
//!
//! DESIGN
//! ======
//! `GateState::next` is pure: the page feeds it events (auth change, server
//! outcome, user action) and performs whatever side effect the new state
//! calls for. Once authorized the gate is done; the page navigates away.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use records::AccessOutcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Nobody signed in; offer the sign-in affordance.
    Idle,
    /// Waiting on `POST /api/system/access`.
    #[default]
    Checking,
    /// The last identity was refused and has been signed out.
    Denied { email: String },
    /// Allowed; navigate into the protected area.
    AuthorizedRedirect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEvent {
    /// The session epoch changed (signed in, signed out, refreshed).
    AuthChanged,
    /// The server answered the access check.
    Outcome(AccessOutcome),
    /// The access check never reached a verdict.
    CheckFailed,
    /// "Sign in with a different account" from the denied screen.
    SignInAgain,
}

impl GateState {
    #[must_use]
    pub fn next(&self, event: GateEvent) -> Self {
        match (self, event) {
            (Self::AuthorizedRedirect, _) => Self::AuthorizedRedirect,
            (_, GateEvent::AuthChanged) => Self::Checking,
            (Self::Checking, GateEvent::Outcome(AccessOutcome::NoIdentity) | GateEvent::CheckFailed) => Self::Idle,
            (Self::Checking, GateEvent::Outcome(AccessOutcome::Authorized { .. })) => Self::AuthorizedRedirect,
            (Self::Checking, GateEvent::Outcome(AccessOutcome::Denied { email })) => Self::Denied { email },
            (Self::Denied { .. } | Self::Idle, GateEvent::SignInAgain) => Self::Checking,
            (current, _) => current.clone(),
        }
    }

    #[must_use]
    pub fn denied_email(&self) -> Option<&str> {
        match self {
            Self::Denied { email } => Some(email.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }
}
