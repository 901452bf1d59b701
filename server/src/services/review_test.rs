use records::{PartnershipApplication, VolunteerApplication};
use serde_json::{Value, json};

use super::*;
use crate::state::test_helpers::{MockBackend, tokens, user};

fn admin(backend: &MockBackend) -> Identity {
    let u = user("admin-1", "admin@example.org");
    backend.sign_in("a1", u.clone());
    Identity { user: u, tokens: tokens("a1", "r1"), refreshed: false }
}

fn volunteer(id: &str, name: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "full_name": name,
        "school": "Lincoln High",
        "email": format!("{id}@example.org"),
        "experience": null,
        "preferred_role": "chair",
        "status": "pending",
        "admin_notes": null,
        "created_at": created_at
    })
}

fn partnership(id: &str) -> Value {
    json!({
        "id": id,
        "organization_name": "Acme Foundation",
        "contact_person": "Grace",
        "email": "grace@acme.test",
        "partnership_type": "sponsor",
        "message": "Happy to help",
        "status": "under_review",
        "created_at": "2026-01-05T09:30:00Z"
    })
}

// =============================================================================
// list_applications
// =============================================================================

#[tokio::test]
async fn list_is_newest_first() {
    let backend = MockBackend::new();
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v1", "Old", "2026-01-01T00:00:00Z"));
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v2", "New", "2026-03-01T00:00:00Z"));
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v3", "Mid", "2026-02-01T00:00:00Z"));
    let who = admin(&backend);
    let rows: Vec<VolunteerApplication> = list_applications(&backend, &who).await.unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["v2", "v3", "v1"]);
}

#[tokio::test]
async fn list_reads_the_kinds_own_table() {
    let backend = MockBackend::new();
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v1", "Ada", "2026-01-01T00:00:00Z"));
    backend.insert_row(PartnershipApplication::TABLE, partnership("p1"));
    let who = admin(&backend);
    let rows: Vec<PartnershipApplication> = list_applications(&backend, &who).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, ApplicationStatus::UnderReview);
    assert_eq!(rows[0].admin_notes, None);
}

#[tokio::test]
async fn list_failure_propagates() {
    let backend = MockBackend::new();
    backend.fail_table(VolunteerApplication::TABLE);
    let who = admin(&backend);
    let result: Result<Vec<VolunteerApplication>, _> = list_applications(&backend, &who).await;
    assert!(matches!(result, Err(ServiceError::Gateway(_))));
}

// =============================================================================
// transition_status
// =============================================================================

#[tokio::test]
async fn transition_updates_row_to_target() {
    let backend = MockBackend::new();
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v1", "Ada", "2026-01-01T00:00:00Z"));
    let who = admin(&backend);
    let row: VolunteerApplication = transition_status(&backend, &who, "v1", ApplicationStatus::Approved)
        .await
        .unwrap();
    assert_eq!(row.status, ApplicationStatus::Approved);

    let stored = backend.rows(VolunteerApplication::TABLE);
    assert_eq!(stored[0]["status"], "approved");
}

#[tokio::test]
async fn transition_sends_only_status() {
    let backend = MockBackend::new();
    backend.insert_row(PartnershipApplication::TABLE, partnership("p1"));
    let who = admin(&backend);
    let _: PartnershipApplication = transition_status(&backend, &who, "p1", ApplicationStatus::Rejected)
        .await
        .unwrap();
    let updates = backend.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].1, json!({"status": "rejected"}));
}

#[tokio::test]
async fn transition_touches_only_the_target_row() {
    let backend = MockBackend::new();
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v1", "Ada", "2026-01-01T00:00:00Z"));
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v2", "Bo", "2026-01-02T00:00:00Z"));
    let who = admin(&backend);
    let _: VolunteerApplication = transition_status(&backend, &who, "v2", ApplicationStatus::UnderReview)
        .await
        .unwrap();
    let stored = backend.rows(VolunteerApplication::TABLE);
    assert_eq!(stored[0]["status"], "pending");
    assert_eq!(stored[1]["status"], "under_review");
}

#[tokio::test]
async fn list_after_transition_shows_new_status() {
    let backend = MockBackend::new();
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v1", "Ada", "2026-01-01T00:00:00Z"));
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v2", "Bo", "2026-01-02T00:00:00Z"));
    let who = admin(&backend);
    let _: VolunteerApplication = transition_status(&backend, &who, "v1", ApplicationStatus::Rejected)
        .await
        .unwrap();

    let rows: Vec<VolunteerApplication> = list_applications(&backend, &who).await.unwrap();
    let statuses: Vec<(&str, ApplicationStatus)> = rows.iter().map(|r| (r.id.as_str(), r.status)).collect();
    assert_eq!(statuses, [("v2", ApplicationStatus::Pending), ("v1", ApplicationStatus::Rejected)]);
}

#[tokio::test]
async fn transition_returns_the_stored_row_when_echo_disagrees() {
    let backend = MockBackend::new();
    backend.insert_row(PartnershipApplication::TABLE, partnership("p1"));
    backend.ignore_patches();
    let who = admin(&backend);
    let row: PartnershipApplication = transition_status(&backend, &who, "p1", ApplicationStatus::Approved)
        .await
        .unwrap();
    assert_eq!(row.status, ApplicationStatus::UnderReview);

    let listed: Vec<PartnershipApplication> = list_applications(&backend, &who).await.unwrap();
    assert_eq!(listed[0].status, row.status);
}

#[tokio::test]
async fn transition_of_missing_row_is_not_found() {
    let backend = MockBackend::new();
    let who = admin(&backend);
    let result: Result<VolunteerApplication, _> =
        transition_status(&backend, &who, "nope", ApplicationStatus::Approved).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn transition_failure_leaves_row_untouched() {
    let backend = MockBackend::new();
    backend.insert_row(VolunteerApplication::TABLE, volunteer("v1", "Ada", "2026-01-01T00:00:00Z"));
    backend.fail_updates();
    let who = admin(&backend);
    let result: Result<VolunteerApplication, _> =
        transition_status(&backend, &who, "v1", ApplicationStatus::Approved).await;
    assert!(matches!(result, Err(ServiceError::Gateway(_))));
    assert_eq!(backend.rows(VolunteerApplication::TABLE)[0]["status"], "pending");
}
