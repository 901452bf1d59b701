use serde_json::{Value, json};

use super::*;
use crate::gateway::GatewayError;
use crate::state::test_helpers::{MockBackend, tokens, user};

fn signed_in(backend: &MockBackend, id: &str) -> Identity {
    let u = user(id, &format!("{id}@example.org"));
    backend.sign_in("a1", u.clone());
    Identity { user: u, tokens: tokens("a1", "r1"), refreshed: false }
}

fn row(id: &str, user_id: &str) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "delegation_type": "country",
        "preferred_country": "Japan",
        "preferred_institution": null,
        "committee_preference": null,
        "assigned_country": null,
        "assigned_institution": null,
        "assigned_committee": null,
        "status": "pending",
        "payment_status": "unpaid",
        "created_at": "2026-02-21T10:00:00Z"
    })
}

#[tokio::test]
async fn no_row_is_none() {
    let backend = MockBackend::new();
    backend.insert_row(REGISTRATIONS_TABLE, row("reg-2", "someone-else"));
    let who = signed_in(&backend, "u1");
    assert!(fetch_registration(&backend, &who).await.unwrap().is_none());
}

#[tokio::test]
async fn own_row_is_returned() {
    let backend = MockBackend::new();
    backend.insert_row(REGISTRATIONS_TABLE, row("reg-1", "u1"));
    backend.insert_row(REGISTRATIONS_TABLE, row("reg-2", "u2"));
    let who = signed_in(&backend, "u1");
    let found = fetch_registration(&backend, &who).await.unwrap().unwrap();
    assert_eq!(found.id, "reg-1");
    assert_eq!(found.preferred_country.as_deref(), Some("Japan"));
}

#[tokio::test]
async fn duplicate_rows_are_an_error() {
    let backend = MockBackend::new();
    backend.insert_row(REGISTRATIONS_TABLE, row("reg-1", "u1"));
    backend.insert_row(REGISTRATIONS_TABLE, row("reg-3", "u1"));
    let who = signed_in(&backend, "u1");
    let err = fetch_registration(&backend, &who).await.unwrap_err();
    assert!(matches!(err, ServiceError::Gateway(GatewayError::MultipleRows { count: 2, .. })));
}

#[tokio::test]
async fn gateway_failure_propagates() {
    let backend = MockBackend::new();
    backend.fail_table(REGISTRATIONS_TABLE);
    let who = signed_in(&backend, "u1");
    assert!(fetch_registration(&backend, &who).await.is_err());
}
