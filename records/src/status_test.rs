use super::*;

// =============================================================================
// ApplicationStatus
// =============================================================================

#[test]
fn status_wire_values_are_snake_case() {
    let json = serde_json::to_string(&ApplicationStatus::UnderReview).unwrap();
    assert_eq!(json, "\"under_review\"");
    let parsed: ApplicationStatus = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(parsed, ApplicationStatus::Rejected);
}

#[test]
fn status_from_str_accepts_every_wire_value() {
    for status in ApplicationStatus::ALL {
        assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
    }
}

#[test]
fn status_from_str_rejects_unknown_value() {
    let err = "archived".parse::<ApplicationStatus>().unwrap_err();
    assert_eq!(err, UnknownStatus("archived".to_owned()));
    assert_eq!(err.to_string(), "unknown application status: archived");
}

#[test]
fn status_from_str_is_case_sensitive() {
    assert!("Approved".parse::<ApplicationStatus>().is_err());
}

#[test]
fn status_deserialize_rejects_unknown_value() {
    assert!(serde_json::from_str::<ApplicationStatus>("\"waitlisted\"").is_err());
}

#[test]
fn status_label_replaces_underscore() {
    assert_eq!(ApplicationStatus::UnderReview.label(), "under review");
    assert_eq!(ApplicationStatus::Pending.label(), "pending");
}

#[test]
fn status_display_matches_wire_value() {
    assert_eq!(ApplicationStatus::UnderReview.to_string(), "under_review");
}

#[test]
fn application_tones() {
    assert_eq!(ApplicationStatus::Approved.tone(), StatusTone::Green);
    assert_eq!(ApplicationStatus::Pending.tone(), StatusTone::Yellow);
    assert_eq!(ApplicationStatus::UnderReview.tone(), StatusTone::Blue);
    assert_eq!(ApplicationStatus::Rejected.tone(), StatusTone::Red);
}

// =============================================================================
// registration_tone
// =============================================================================

#[test]
fn registration_tone_known_statuses() {
    assert_eq!(registration_tone("approved"), StatusTone::Green);
    assert_eq!(registration_tone("pending"), StatusTone::Yellow);
    assert_eq!(registration_tone("rejected"), StatusTone::Red);
}

#[test]
fn registration_tone_unknown_is_neutral() {
    assert_eq!(registration_tone("waitlisted"), StatusTone::Neutral);
    assert_eq!(registration_tone(""), StatusTone::Neutral);
    assert_eq!(registration_tone("Approved"), StatusTone::Neutral);
}

#[test]
fn registration_tone_under_review_is_neutral() {
    assert_eq!(registration_tone("under_review"), StatusTone::Neutral);
}

#[test]
fn tone_css_classes_are_distinct() {
    let classes = [
        StatusTone::Green,
        StatusTone::Yellow,
        StatusTone::Blue,
        StatusTone::Red,
        StatusTone::Neutral,
    ]
    .map(StatusTone::css_class);
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("status-badge--"));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================================
// capitalize_first
// =============================================================================

#[test]
fn capitalize_first_basic() {
    assert_eq!(capitalize_first("approved"), "Approved");
}

#[test]
fn capitalize_first_empty() {
    assert_eq!(capitalize_first(""), "");
}

#[test]
fn capitalize_first_keeps_tail() {
    assert_eq!(capitalize_first("under_review"), "Under_review");
}
