use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::state::test_helpers::{MockBackend, tokens, user};

fn identity(backend: &MockBackend, access: &str, id: &str) -> Identity {
    let u = user(id, &format!("{id}@example.org"));
    backend.sign_in(access, u.clone());
    Identity { user: u, tokens: tokens(access, "r"), refreshed: false }
}

// =============================================================================
// resolve_session
// =============================================================================

#[tokio::test]
async fn no_tokens_is_nobody() {
    let backend = MockBackend::new();
    assert_eq!(resolve_session(&backend, None).await.unwrap(), None);
}

#[tokio::test]
async fn valid_access_token_resolves_without_refresh() {
    let backend = MockBackend::new();
    backend.sign_in("a1", user("u1", "u1@example.org"));
    let found = resolve_session(&backend, Some(tokens("a1", "r1")))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.user.id, "u1");
    assert!(!found.refreshed);
    assert_eq!(found.tokens, tokens("a1", "r1"));
}

#[tokio::test]
async fn expired_access_token_is_refreshed_once() {
    let backend = MockBackend::new();
    backend.sign_in("a2", user("u1", "u1@example.org"));
    backend.allow_refresh("r1", tokens("a2", "r2"));
    let found = resolve_session(&backend, Some(tokens("stale", "r1")))
        .await
        .unwrap()
        .unwrap();
    assert!(found.refreshed);
    assert_eq!(found.tokens, tokens("a2", "r2"));
}

#[tokio::test]
async fn rejected_refresh_is_nobody() {
    let backend = MockBackend::new();
    let found = resolve_session(&backend, Some(tokens("stale", "bad")))
        .await
        .unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn refreshed_token_still_rejected_is_nobody() {
    let backend = MockBackend::new();
    backend.allow_refresh("r1", tokens("also-stale", "r2"));
    let found = resolve_session(&backend, Some(tokens("stale", "r1")))
        .await
        .unwrap();
    assert_eq!(found, None);
}

// =============================================================================
// is_rejection
// =============================================================================

#[test]
fn client_errors_are_rejections() {
    assert!(is_rejection(&GatewayError::Unauthorized));
    assert!(is_rejection(&GatewayError::Status { status: 400, body: String::new() }));
    assert!(!is_rejection(&GatewayError::Status { status: 503, body: String::new() }));
    assert!(!is_rejection(&GatewayError::Request("timeout".to_owned())));
}

// =============================================================================
// load_profile / resolve_is_admin
// =============================================================================

#[tokio::test]
async fn profile_found_by_user_id() {
    let backend = MockBackend::new();
    backend.insert_row(PROFILES_TABLE, json!({"id": "u1", "full_name": "Ada", "grade": 11}));
    backend.insert_row(PROFILES_TABLE, json!({"id": "u2", "full_name": "Other"}));
    let who = identity(&backend, "a1", "u1");
    let profile = load_profile(&backend, &who).await.unwrap();
    assert_eq!(profile.full_name.as_deref(), Some("Ada"));
    assert_eq!(profile.grade.as_deref(), Some("11"));
}

#[tokio::test]
async fn missing_profile_is_none() {
    let backend = MockBackend::new();
    let who = identity(&backend, "a1", "u1");
    assert_eq!(load_profile(&backend, &who).await, None);
}

#[tokio::test]
async fn failed_profile_lookup_is_none() {
    let backend = MockBackend::new();
    backend.fail_table(PROFILES_TABLE);
    let who = identity(&backend, "a1", "u1");
    assert_eq!(load_profile(&backend, &who).await, None);
}

#[tokio::test]
async fn admin_role_row_grants_admin() {
    let backend = MockBackend::new();
    backend.insert_row(USER_ROLES_TABLE, json!({"user_id": "u1", "role": "admin"}));
    let who = identity(&backend, "a1", "u1");
    assert!(resolve_is_admin(&backend, &who).await);
}

#[tokio::test]
async fn other_role_is_not_admin() {
    let backend = MockBackend::new();
    backend.insert_row(USER_ROLES_TABLE, json!({"user_id": "u1", "role": "editor"}));
    backend.insert_row(USER_ROLES_TABLE, json!({"user_id": "u2", "role": "admin"}));
    let who = identity(&backend, "a1", "u1");
    assert!(!resolve_is_admin(&backend, &who).await);
}

#[tokio::test]
async fn role_lookup_failure_denies_admin() {
    let backend = MockBackend::new();
    backend.insert_row(USER_ROLES_TABLE, json!({"user_id": "u1", "role": "admin"}));
    backend.fail_table(USER_ROLES_TABLE);
    let who = identity(&backend, "a1", "u1");
    assert!(!resolve_is_admin(&backend, &who).await);
}

// =============================================================================
// resolve_snapshot
// =============================================================================

#[tokio::test]
async fn snapshot_combines_profile_and_role() {
    let backend = Arc::new(MockBackend::new());
    backend.insert_row(PROFILES_TABLE, json!({"id": "u1", "school": "Lincoln High"}));
    backend.insert_row(USER_ROLES_TABLE, json!({"user_id": "u1", "role": "admin"}));
    let who = identity(&backend, "a1", "u1");
    let snapshot = resolve_snapshot(backend.as_ref(), &who).await;
    assert_eq!(snapshot.user.id, "u1");
    assert_eq!(snapshot.profile.unwrap().school.as_deref(), Some("Lincoln High"));
    assert!(snapshot.is_admin);
}

#[tokio::test]
async fn snapshot_survives_profile_failure() {
    let backend = MockBackend::new();
    backend.fail_table(PROFILES_TABLE);
    let who = identity(&backend, "a1", "u1");
    let snapshot = resolve_snapshot(&backend, &who).await;
    assert_eq!(snapshot.profile, None);
    assert!(!snapshot.is_admin);
}
