//! Auth routes: hosted OAuth (PKCE), password sign-in, session cookies.
//!
//! DESIGN
//! ======
//! The hosted backend issues the tokens; this server only keeps them in
//! HttpOnly cookies and forwards the access token on every backend call.
//! `AuthUser` resolves the cookies per request (refreshing once if needed)
//! and hands the rotated pair back so handlers can rewrite the cookies.

use axum::extract::{FromRef, FromRequestParts, Query, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use records::{PasswordSignIn, SessionSnapshot};
use serde::Deserialize;
use time::Duration;

use crate::gateway::{AuthTokens, AuthorizeRequest, GatewayError, SignOutScope};
use crate::services::{pkce, session};
use crate::state::AppState;

pub const ACCESS_COOKIE: &str = "sb_access_token";
pub const REFRESH_COOKIE: &str = "sb_refresh_token";
const VERIFIER_COOKIE: &str = "sb_pkce_verifier";
const RETURN_COOKIE: &str = "sb_return_to";
const OAUTH_COOKIE_MINUTES: i64 = 10;
const SESSION_COOKIE_DAYS: i64 = 30;
const OAUTH_PROMPT: &str = "select_account";

// =============================================================================
// COOKIES
// =============================================================================

fn build_cookie(name: &'static str, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    build_cookie(name, String::new(), secure, Duration::ZERO)
}

/// Store a token pair in the session cookies.
pub(crate) fn set_session(jar: CookieJar, tokens: &AuthTokens, secure: bool) -> CookieJar {
    let max_age = Duration::days(SESSION_COOKIE_DAYS);
    jar.add(build_cookie(ACCESS_COOKIE, tokens.access_token.clone(), secure, max_age))
        .add(build_cookie(REFRESH_COOKIE, tokens.refresh_token.clone(), secure, max_age))
}

/// Expire both session cookies.
pub(crate) fn clear_session(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(expired_cookie(ACCESS_COOKIE, secure))
        .add(expired_cookie(REFRESH_COOKIE, secure))
}

/// Token pair from the session cookies. A missing access token means no
/// session; a missing refresh token only disables refresh.
pub(crate) fn session_tokens(jar: &CookieJar) -> Option<AuthTokens> {
    let access_token = jar
        .get(ACCESS_COOKIE)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())?;
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(Cookie::value)
        .unwrap_or_default();
    Some(AuthTokens { access_token: access_token.to_owned(), refresh_token: refresh_token.to_owned() })
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated caller resolved from the session cookies.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub identity: session::Identity,
    secure: bool,
}

impl AuthUser {
    /// Cookies to send back: the rotated pair if a refresh happened,
    /// otherwise nothing.
    #[must_use]
    pub fn cookies(&self) -> CookieJar {
        if self.identity.refreshed {
            set_session(CookieJar::new(), &self.identity.tokens, self.secure)
        } else {
            CookieJar::new()
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let secure = app_state.config.cookie_secure;
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(tokens) = session_tokens(&jar) else {
            return Err(StatusCode::UNAUTHORIZED.into_response());
        };

        match session::resolve_session(app_state.backend.as_ref(), Some(tokens)).await {
            Ok(Some(identity)) => Ok(Self { identity, secure }),
            Ok(None) => Err((clear_session(CookieJar::new(), secure), StatusCode::UNAUTHORIZED).into_response()),
            Err(e) => {
                tracing::error!(error = %e, "session resolution failed");
                Err(StatusCode::BAD_GATEWAY.into_response())
            }
        }
    }
}

/// Authenticated caller holding the admin role. Anyone else gets 403.
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);
        if session::resolve_is_admin(app_state.backend.as_ref(), &auth.identity).await {
            Ok(Self(auth))
        } else {
            tracing::warn!(user_id = %auth.identity.user.id, "admin route refused");
            Err((auth.cookies(), StatusCode::FORBIDDEN).into_response())
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct OAuthQuery {
    return_to: Option<String>,
}

/// `GET /auth/oauth`: redirect to the hosted provider sign-in.
pub async fn oauth_redirect(State(state): State<AppState>, Query(params): Query<OAuthQuery>) -> Response {
    let secure = state.config.cookie_secure;
    let verifier = pkce::generate_verifier();
    let challenge = pkce::code_challenge(&verifier);
    let return_to = pkce::sanitize_return_path(params.return_to.as_deref());
    let redirect_to = format!("{}/auth/callback", state.config.site.url);

    let url = state.backend.authorize_url(&AuthorizeRequest {
        provider: &state.config.oauth_provider,
        redirect_to: &redirect_to,
        code_challenge: &challenge,
        prompt: Some(OAUTH_PROMPT),
    });

    let max_age = Duration::minutes(OAUTH_COOKIE_MINUTES);
    let jar = CookieJar::new()
        .add(build_cookie(VERIFIER_COOKIE, verifier, secure, max_age))
        .add(build_cookie(RETURN_COOKIE, return_to, secure, max_age));
    (jar, Redirect::temporary(&url)).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    error_description: Option<String>,
}

/// `GET /auth/callback`: exchange the code, set session cookies, return.
pub async fn oauth_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let secure = state.config.cookie_secure;
    if let Some(description) = params.error_description.as_deref() {
        tracing::warn!(%description, "oauth provider returned an error");
    }
    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "missing oauth code").into_response();
    };
    let Some(verifier) = jar
        .get(VERIFIER_COOKIE)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
    else {
        return (StatusCode::BAD_REQUEST, "missing pkce verifier").into_response();
    };
    let return_to = pkce::sanitize_return_path(jar.get(RETURN_COOKIE).map(Cookie::value));

    let tokens = match state.backend.exchange_code(code, &verifier).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "oauth code exchange failed");
            return (StatusCode::BAD_GATEWAY, "OAuth code exchange failed").into_response();
        }
    };

    let jar = set_session(jar, &tokens, secure)
        .add(expired_cookie(VERIFIER_COOKIE, secure))
        .add(expired_cookie(RETURN_COOKIE, secure));
    (jar, Redirect::temporary(&return_to)).into_response()
}

/// Map a sign-in failure to a status code.
pub(crate) fn sign_in_error_status(error: &GatewayError) -> StatusCode {
    match error {
        GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
        GatewayError::Status { status, .. } if (400..500).contains(status) => StatusCode::UNAUTHORIZED,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/auth/password`: email + password sign-in.
pub async fn password_sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<PasswordSignIn>,
) -> Response {
    if !form.is_complete() {
        return (StatusCode::BAD_REQUEST, "email and password are required").into_response();
    }
    match state
        .backend
        .sign_in_password(form.email.trim(), &form.password)
        .await
    {
        Ok(tokens) => (set_session(jar, &tokens, state.config.cookie_secure), StatusCode::NO_CONTENT).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "password sign-in failed");
            sign_in_error_status(&e).into_response()
        }
    }
}

/// `GET /api/auth/me`: the caller's session snapshot.
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> (CookieJar, Json<SessionSnapshot>) {
    let snapshot = session::resolve_snapshot(state.backend.as_ref(), &auth.identity).await;
    (auth.cookies(), Json(snapshot))
}

/// `POST /api/auth/logout`: end the session everywhere and clear cookies.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(tokens) = session_tokens(&jar) {
        if let Err(e) = state
            .backend
            .sign_out(&tokens.access_token, SignOutScope::Global)
            .await
        {
            tracing::warn!(error = %e, "backend sign-out failed");
        }
    }
    (clear_session(jar, state.config.cookie_secure), StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
