//! System-area access gate.
//!
//! DESIGN
//! ======
//! Access to `/system` is allow-list based: the caller's email must appear in
//! `system_admins`. The decision itself (`is_authorized`) is pure; the
//! side effects live in `check_access`. A miss and a failed lookup are the
//! same outcome, and both end the caller's session everywhere.

use records::AccessOutcome;
use serde_json::Value;
use tracing::{error, info, warn};

use super::session::Identity;
use crate::gateway::{Backend, GatewayError, SignOutScope, TableQuery};

pub const ALLOW_LIST_TABLE: &str = "system_admins";

/// Lowercase and trim an email for allow-list comparison.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Pure gate decision. `lookup` is the allow-list row's email, if the lookup
/// succeeded and found one. Only an exact match authorizes.
#[must_use]
pub fn is_authorized(email: &str, lookup: &Result<Option<String>, GatewayError>) -> bool {
    match lookup {
        Ok(Some(found)) => !email.is_empty() && normalize_email(found) == email,
        Ok(None) | Err(_) => false,
    }
}

/// Look up `email` (already normalized) in the allow-list.
///
/// # Errors
///
/// Gateway failures; the caller treats them as a denial.
pub async fn lookup_allow_list(
    backend: &dyn Backend,
    access_token: &str,
    email: &str,
) -> Result<Option<String>, GatewayError> {
    let query = TableQuery::new(ALLOW_LIST_TABLE)
        .select("email")
        .eq("email", email);
    let rows = backend.select(access_token, &query).await?;
    Ok(rows
        .into_iter()
        .find_map(|row| row.get("email").and_then(Value::as_str).map(str::to_owned)))
}

/// Whether `identity` may enter the system area. No side effects.
pub async fn is_system_admin(backend: &dyn Backend, identity: &Identity) -> bool {
    let Some(email) = identity.user.email.as_deref().map(normalize_email) else {
        return false;
    };
    let lookup = lookup_allow_list(backend, identity.access_token(), &email).await;
    if let Err(e) = &lookup {
        warn!(error = %e, "allow-list lookup failed");
    }
    is_authorized(&email, &lookup)
}

/// Run the gate for the current caller. A denial signs the caller out
/// globally before returning; the route clears cookies.
pub async fn check_access(backend: &dyn Backend, identity: Option<&Identity>) -> AccessOutcome {
    let Some(identity) = identity else {
        return AccessOutcome::NoIdentity;
    };
    let email = identity
        .user
        .email
        .as_deref()
        .map(normalize_email)
        .unwrap_or_default();

    let lookup = if email.is_empty() {
        Ok(None)
    } else {
        lookup_allow_list(backend, identity.access_token(), &email).await
    };
    if let Err(e) = &lookup {
        error!(error = %e, %email, "allow-list lookup failed; denying");
    }

    if is_authorized(&email, &lookup) {
        info!(%email, "system access granted");
        return AccessOutcome::Authorized { email };
    }

    warn!(%email, user_id = %identity.user.id, "system access denied; signing out");
    if let Err(e) = backend
        .sign_out(identity.access_token(), SignOutScope::Global)
        .await
    {
        error!(error = %e, "global sign-out after denial failed");
    }
    AccessOutcome::Denied { email }
}

#[cfg(test)]
#[path = "system_gate_test.rs"]
mod tests;
