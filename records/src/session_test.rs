use super::*;

#[test]
fn access_outcome_is_tagged() {
    let json = serde_json::to_value(AccessOutcome::Denied { email: "x@y.z".to_owned() }).unwrap();
    assert_eq!(json, serde_json::json!({ "outcome": "denied", "email": "x@y.z" }));
    let json = serde_json::to_value(AccessOutcome::NoIdentity).unwrap();
    assert_eq!(json, serde_json::json!({ "outcome": "no_identity" }));
}

#[test]
fn access_outcome_parses_authorized() {
    let outcome: AccessOutcome =
        serde_json::from_value(serde_json::json!({ "outcome": "authorized", "email": "a@b.c" })).unwrap();
    assert_eq!(outcome, AccessOutcome::Authorized { email: "a@b.c".to_owned() });
}

#[test]
fn profile_grade_accepts_number() {
    let profile: Profile = serde_json::from_value(serde_json::json!({ "id": "u1", "grade": 11 })).unwrap();
    assert_eq!(profile.grade.as_deref(), Some("11"));
}

#[test]
fn profile_grade_accepts_text_and_null() {
    let profile: Profile = serde_json::from_value(serde_json::json!({ "id": "u1", "grade": "IB2" })).unwrap();
    assert_eq!(profile.grade.as_deref(), Some("IB2"));
    let profile: Profile = serde_json::from_value(serde_json::json!({ "id": "u1", "grade": null })).unwrap();
    assert!(profile.grade.is_none());
}

#[test]
fn profile_missing_optional_columns_default() {
    let profile: Profile = serde_json::from_value(serde_json::json!({ "id": "u1" })).unwrap();
    assert_eq!(profile, Profile { id: "u1".to_owned(), ..Profile::default() });
}

#[test]
fn profile_grade_rejects_object() {
    assert!(serde_json::from_value::<Profile>(serde_json::json!({ "id": "u1", "grade": {} })).is_err());
}

#[test]
fn password_sign_in_presence_check() {
    let complete = PasswordSignIn { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    assert!(complete.is_complete());
    let blank = PasswordSignIn { email: "  ".to_owned(), password: "pw".to_owned() };
    assert!(!blank.is_complete());
    let no_pw = PasswordSignIn { email: "a@b.c".to_owned(), password: String::new() };
    assert!(!no_pw.is_complete());
}
