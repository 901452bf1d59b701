//! Delegate registration route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use records::Registration;

use super::admin::service_error_to_status;
use super::auth::AuthUser;
use crate::services::registration;
use crate::state::AppState;

/// `GET /api/registration`: the caller's registration row, or `null`.
pub async fn get_registration(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<(CookieJar, Json<Option<Registration>>), StatusCode> {
    let row = registration::fetch_registration(state.backend.as_ref(), &auth.identity)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %auth.identity.user.id, "registration fetch failed");
            service_error_to_status(&e)
        })?;
    Ok((auth.cookies(), Json(row)))
}
