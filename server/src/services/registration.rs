//! Delegate registration lookup for the signed-in user.

use records::Registration;

use super::ServiceError;
use super::session::Identity;
use crate::gateway::{self, Backend, TableQuery};

pub const REGISTRATIONS_TABLE: &str = "delegate_registrations";

/// The caller's registration row, if any.
///
/// # Errors
///
/// Gateway failures, including more than one row for the user.
pub async fn fetch_registration(backend: &dyn Backend, identity: &Identity) -> Result<Option<Registration>, ServiceError> {
    let query = TableQuery::new(REGISTRATIONS_TABLE)
        .select("*")
        .eq("user_id", &identity.user.id);
    Ok(gateway::select_maybe_single(backend, identity.access_token(), &query).await?)
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
