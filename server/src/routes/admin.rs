//! Admin review routes: application lists and status transitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use records::{ApplicationRecord, StatusUpdate};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::auth::AdminUser;
use crate::services::{ServiceError, review};
use crate::state::AppState;

pub(crate) fn service_error_to_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Unauthenticated => StatusCode::UNAUTHORIZED,
        ServiceError::Gateway(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `GET /api/admin/{kind}`: every application of one kind, newest first.
pub async fn list_applications<T>(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
) -> Result<(CookieJar, Json<Vec<T>>), StatusCode>
where
    T: ApplicationRecord + DeserializeOwned + Serialize,
{
    let rows = review::list_applications::<T>(state.backend.as_ref(), &auth.identity)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, table = T::TABLE, "application list failed");
            service_error_to_status(&e)
        })?;
    Ok((auth.cookies(), Json(rows)))
}

/// `PATCH /api/admin/{kind}/{id}/status`: move one application.
pub async fn update_status<T>(
    State(state): State<AppState>,
    AdminUser(auth): AdminUser,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<(CookieJar, Json<T>), StatusCode>
where
    T: ApplicationRecord + DeserializeOwned + Serialize,
{
    let row = review::transition_status::<T>(state.backend.as_ref(), &auth.identity, &id, body.status)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, table = T::TABLE, %id, "status update failed");
            service_error_to_status(&e)
        })?;
    Ok((auth.cookies(), Json(row)))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
