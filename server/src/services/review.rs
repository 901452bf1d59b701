//! Admin review of volunteer and partnership applications.
//!
//! ARCHITECTURE
//! ============
//! Generic over `ApplicationRecord`, so one list and one transition path
//! serve both tables. A transition is a single-row update keyed by id; the
//! backend echoes the updated row, which is returned as stored. An echo
//! whose status differs from the target is logged, never papered over.

use records::{ApplicationRecord, ApplicationStatus, StatusUpdate};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::ServiceError;
use super::session::Identity;
use crate::gateway::{self, Backend, GatewayError, Order, TableQuery};

/// Every application of kind `T`, newest first.
///
/// # Errors
///
/// Gateway failures and undecodable rows.
pub async fn list_applications<T>(backend: &dyn Backend, identity: &Identity) -> Result<Vec<T>, ServiceError>
where
    T: ApplicationRecord + DeserializeOwned,
{
    let query = TableQuery::new(T::TABLE)
        .select("*")
        .order("created_at", Order::Desc);
    Ok(gateway::select_rows(backend, identity.access_token(), &query).await?)
}

/// Move one application to `target` and return the row the backend stored.
///
/// # Errors
///
/// `NotFound` when no row has `id`; gateway failures otherwise.
pub async fn transition_status<T>(
    backend: &dyn Backend,
    identity: &Identity,
    id: &str,
    target: ApplicationStatus,
) -> Result<T, ServiceError>
where
    T: ApplicationRecord + DeserializeOwned,
{
    let query = TableQuery::new(T::TABLE).eq("id", id);
    let patch = serde_json::to_value(StatusUpdate { status: target })
        .map_err(|e| GatewayError::Decode(e.to_string()))?;
    let rows = backend
        .update(identity.access_token(), &query, &patch)
        .await?;
    let Some(updated) = gateway::decode_rows::<T>(rows)?.into_iter().next() else {
        return Err(ServiceError::NotFound(format!("{} {id}", T::TABLE)));
    };

    if updated.status() == target {
        info!(table = T::TABLE, %id, %target, user_id = %identity.user.id, "application status changed");
    } else {
        warn!(table = T::TABLE, %id, returned = %updated.status(), %target, "backend echoed unexpected status");
    }
    Ok(updated)
}

#[cfg(test)]
#[path = "review_test.rs"]
mod tests;
