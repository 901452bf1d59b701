use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{Request, header};
use records::{ApplicationStatus, PartnershipApplication, VolunteerApplication};
use serde_json::json;

use super::*;
use crate::gateway::GatewayError;
use crate::services::session::USER_ROLES_TABLE;
use crate::state::test_helpers::{MockBackend, test_app_state, user};

async fn admin(state: &AppState) -> AdminUser {
    let mut parts = Request::builder()
        .header(header::COOKIE, "sb_access_token=a1; sb_refresh_token=r1")
        .body(())
        .unwrap()
        .into_parts()
        .0;
    AdminUser::from_request_parts(&mut parts, state)
        .await
        .ok()
        .unwrap()
}

fn seeded() -> Arc<MockBackend> {
    let backend = Arc::new(MockBackend::new());
    backend.sign_in("a1", user("admin-1", "admin@example.org"));
    backend.insert_row(USER_ROLES_TABLE, json!({"user_id": "admin-1", "role": "admin"}));
    backend.insert_row(
        VolunteerApplication::TABLE,
        json!({
            "id": "v1",
            "full_name": "Ada",
            "school": "Lincoln High",
            "email": "ada@example.org",
            "experience": "MUN club",
            "preferred_role": "media",
            "status": "pending",
            "created_at": "2026-01-01T00:00:00Z"
        }),
    );
    backend
}

#[test]
fn service_errors_map_to_status() {
    assert_eq!(service_error_to_status(&ServiceError::NotFound("x".to_owned())), StatusCode::NOT_FOUND);
    assert_eq!(service_error_to_status(&ServiceError::Unauthenticated), StatusCode::UNAUTHORIZED);
    assert_eq!(
        service_error_to_status(&ServiceError::Gateway(GatewayError::Status { status: 500, body: String::new() })),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        service_error_to_status(&ServiceError::from(GatewayError::Unauthorized)),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn list_returns_rows() {
    let state = test_app_state(seeded());
    let auth = admin(&state).await;
    let (_, Json(rows)) = list_applications::<VolunteerApplication>(State(state), auth)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].full_name, "Ada");
}

#[tokio::test]
async fn list_failure_is_bad_gateway() {
    let backend = seeded();
    backend.fail_table(PartnershipApplication::TABLE);
    let state = test_app_state(backend);
    let auth = admin(&state).await;
    let err = list_applications::<PartnershipApplication>(State(state), auth)
        .await
        .err()
        .unwrap();
    assert_eq!(err, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn update_status_returns_updated_row() {
    let state = test_app_state(seeded());
    let auth = admin(&state).await;
    let body = StatusUpdate { status: ApplicationStatus::Approved };
    let (_, Json(row)) =
        update_status::<VolunteerApplication>(State(state), auth, Path("v1".to_owned()), Json(body))
            .await
            .unwrap();
    assert_eq!(row.status, ApplicationStatus::Approved);
}

#[tokio::test]
async fn update_status_of_unknown_id_is_not_found() {
    let state = test_app_state(seeded());
    let auth = admin(&state).await;
    let body = StatusUpdate { status: ApplicationStatus::Rejected };
    let err = update_status::<VolunteerApplication>(State(state), auth, Path("v9".to_owned()), Json(body))
        .await
        .err()
        .unwrap();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_status_gateway_failure_is_bad_gateway() {
    let backend = seeded();
    backend.fail_updates();
    let state = test_app_state(backend);
    let auth = admin(&state).await;
    let body = StatusUpdate { status: ApplicationStatus::UnderReview };
    let err = update_status::<VolunteerApplication>(State(state), auth, Path("v1".to_owned()), Json(body))
        .await
        .err()
        .unwrap();
    assert_eq!(err, StatusCode::BAD_GATEWAY);
}
