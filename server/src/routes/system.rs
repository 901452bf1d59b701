//! System-area routes: allow-list access check and the protected identity.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use records::{AccessOutcome, SessionUser};

use super::auth::{AuthUser, clear_session, session_tokens, set_session};
use crate::services::{session, system_gate};
use crate::state::AppState;

/// Caller whose email is on the system allow-list. Checked on every request.
pub struct SystemAdmin(pub AuthUser);

impl<S> FromRequestParts<S> for SystemAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);
        if system_gate::is_system_admin(app_state.backend.as_ref(), &auth.identity).await {
            Ok(Self(auth))
        } else {
            Err((auth.cookies(), StatusCode::FORBIDDEN).into_response())
        }
    }
}

/// `POST /api/system/access`: run the allow-list gate for the caller.
pub async fn check_access(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<AccessOutcome>) {
    let secure = state.config.cookie_secure;
    let backend = state.backend.as_ref();
    let tokens = session_tokens(&jar);
    let had_tokens = tokens.is_some();

    // `stale` marks cookies the backend refused outright.
    let (identity, stale) = match session::resolve_session(backend, tokens).await {
        Ok(Some(identity)) => (Some(identity), false),
        Ok(None) => (None, had_tokens),
        Err(e) => {
            tracing::error!(error = %e, "session resolution failed during access check");
            (None, false)
        }
    };

    let outcome = system_gate::check_access(backend, identity.as_ref()).await;
    let jar = match (&outcome, &identity) {
        (AccessOutcome::Denied { .. }, _) => clear_session(CookieJar::new(), secure),
        (AccessOutcome::Authorized { .. }, Some(identity)) if identity.refreshed => {
            set_session(CookieJar::new(), &identity.tokens, secure)
        }
        (AccessOutcome::NoIdentity, None) if stale => clear_session(CookieJar::new(), secure),
        _ => CookieJar::new(),
    };
    (jar, Json(outcome))
}

/// `GET /api/system/me`: the allow-listed caller.
pub async fn me(SystemAdmin(auth): SystemAdmin) -> (CookieJar, Json<SessionUser>) {
    (auth.cookies(), Json(auth.identity.user.clone()))
}

#[cfg(test)]
#[path = "system_test.rs"]
mod tests;
