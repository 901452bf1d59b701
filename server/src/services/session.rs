//! Session resolution: who is calling, and what may they see.
//!
//! DESIGN
//! ======
//! The browser holds the hosted access/refresh tokens in HttpOnly cookies.
//! Every protected request resolves them to an `Identity` here: one
//! `get_user` call, and on rejection exactly one refresh attempt. Profile and
//! role lookups follow the identity and degrade independently: a missing or
//! failed profile is `None`, a failed role lookup is "not admin".

use records::{Profile, SessionSnapshot, SessionUser};
use tracing::{info, warn};

use crate::gateway::{self, AuthTokens, Backend, GatewayError, TableQuery};

pub const PROFILES_TABLE: &str = "profiles";
pub const USER_ROLES_TABLE: &str = "user_roles";
pub const ADMIN_ROLE: &str = "admin";

/// A resolved caller: the user and the tokens that proved it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user: SessionUser,
    pub tokens: AuthTokens,
    /// True when the tokens were rotated during resolution and the cookies
    /// must be rewritten.
    pub refreshed: bool,
}

impl Identity {
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.tokens.access_token
    }
}

/// Resolve stored tokens to an identity.
///
/// `Ok(None)` means "nobody": no tokens, or tokens the backend no longer
/// honours even after a refresh.
///
/// # Errors
///
/// Returns transport and server errors, which must not be mistaken for a
/// signed-out caller.
pub async fn resolve_session(
    backend: &dyn Backend,
    tokens: Option<AuthTokens>,
) -> Result<Option<Identity>, GatewayError> {
    let Some(tokens) = tokens else {
        return Ok(None);
    };

    match backend.get_user(&tokens.access_token).await {
        Ok(user) => return Ok(Some(Identity { user, tokens, refreshed: false })),
        Err(GatewayError::Unauthorized) => {}
        Err(e) => return Err(e),
    }

    let refreshed = match backend.refresh_session(&tokens.refresh_token).await {
        Ok(next) => next,
        Err(e) if is_rejection(&e) => {
            info!("session refresh rejected; treating caller as signed out");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match backend.get_user(&refreshed.access_token).await {
        Ok(user) => Ok(Some(Identity { user, tokens: refreshed, refreshed: true })),
        Err(GatewayError::Unauthorized) => Ok(None),
        Err(e) => Err(e),
    }
}

/// The backend refused the credentials, as opposed to failing to answer.
fn is_rejection(error: &GatewayError) -> bool {
    match error {
        GatewayError::Unauthorized => true,
        GatewayError::Status { status, .. } => (400..500).contains(status),
        _ => false,
    }
}

/// Fetch the caller's profile row. Absent or failed lookups yield `None`.
pub async fn load_profile(backend: &dyn Backend, identity: &Identity) -> Option<Profile> {
    let query = TableQuery::new(PROFILES_TABLE)
        .select("*")
        .eq("id", &identity.user.id);
    match gateway::select_maybe_single::<Profile>(backend, identity.access_token(), &query).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, user_id = %identity.user.id, "profile lookup failed");
            None
        }
    }
}

/// Whether the caller holds the admin role. Lookup failures deny.
pub async fn resolve_is_admin(backend: &dyn Backend, identity: &Identity) -> bool {
    let query = TableQuery::new(USER_ROLES_TABLE)
        .select("role")
        .eq("user_id", &identity.user.id)
        .eq("role", ADMIN_ROLE);
    match backend.select(identity.access_token(), &query).await {
        Ok(rows) => !rows.is_empty(),
        Err(e) => {
            warn!(error = %e, user_id = %identity.user.id, "role lookup failed; denying admin");
            false
        }
    }
}

/// Identity plus profile plus admin flag, as served to the browser.
pub async fn resolve_snapshot(backend: &dyn Backend, identity: &Identity) -> SessionSnapshot {
    let (profile, is_admin) = tokio::join!(load_profile(backend, identity), resolve_is_admin(backend, identity));
    SessionSnapshot { user: identity.user.clone(), profile, is_admin }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
