//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App` and provided as `RwSignal<SessionState>` context.
//! Route guards wait for `loading == false` before deciding anything, and
//! subscribers that must re-run on sign-in or sign-out track `epoch`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use records::{Profile, SessionSnapshot, SessionUser};

/// Who is signed in, as far as the browser knows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub profile: Option<Profile>,
    pub is_admin: bool,
    /// True until the first `/api/auth/me` answer arrives.
    pub loading: bool,
    /// Bumped on every auth-state change.
    pub epoch: u64,
    /// The user pressed Sign Out; guards send them home, not to `/login`.
    pub signed_out: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, profile: None, is_admin: false, loading: true, epoch: 0, signed_out: false }
    }
}

impl SessionState {
    /// Install the server's answer. `None` means signed out.
    pub fn apply_snapshot(&mut self, snapshot: Option<SessionSnapshot>) {
        let before = self.user.as_ref().map(|u| u.id.clone());
        match snapshot {
            Some(snapshot) => {
                self.signed_out = false;
                self.user = Some(snapshot.user);
                self.profile = snapshot.profile;
                self.is_admin = snapshot.is_admin;
            }
            None => {
                self.user = None;
                self.profile = None;
                self.is_admin = false;
            }
        }
        let after = self.user.as_ref().map(|u| u.id.clone());
        if self.loading || before != after {
            self.epoch += 1;
        }
        self.loading = false;
    }

    /// Forget the user locally.
    pub fn tear_down(&mut self) {
        self.user = None;
        self.profile = None;
        self.is_admin = false;
        self.loading = false;
        self.epoch += 1;
    }

    /// Tear down after a deliberate sign-out.
    pub fn finish_sign_out(&mut self) {
        self.tear_down();
        self.signed_out = true;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }
}

/// Ask the server who is signed in and install the answer.
pub fn refresh_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let snapshot = match crate::net::api::fetch_session().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("session fetch failed: {e}");
                None
            }
        };
        session.update(|s| s.apply_snapshot(snapshot));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;
}

/// End the session on the server, then tear down local state and run
/// `after` (typically a toast). Guarded pages then redirect to `/`.
pub fn sign_out<F>(session: RwSignal<SessionState>, after: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        session.update(SessionState::finish_sign_out);
        after();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        session.update(SessionState::finish_sign_out);
        after();
    }
}
