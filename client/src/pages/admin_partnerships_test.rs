use time::macros::datetime;

use records::ApplicationStatus;

use super::*;

fn partnership(kind: &str, message: Option<&str>) -> PartnershipApplication {
    PartnershipApplication {
        id: "p1".to_owned(),
        organization_name: "Acme Foundation".to_owned(),
        contact_person: "Wile Coyote".to_owned(),
        email: "wile@acme.org".to_owned(),
        partnership_type: kind.to_owned(),
        message: message.map(str::to_owned),
        status: ApplicationStatus::UnderReview,
        admin_notes: None,
        created_at: datetime!(2026-03-01 09:30 UTC),
    }
}

#[test]
fn known_partnership_types_get_labels() {
    assert_eq!(partnership_type_label("sponsor"), "Sponsorship");
    assert_eq!(partnership_type_label("academic"), "Academic Partner");
    assert_eq!(partnership_type_label("venue"), "venue");
}

#[test]
fn detail_fields_cover_every_column() {
    let fields = partnership("media", Some("We cover youth events.")).detail_fields();
    assert_eq!(fields[0], ("Organization", "Acme Foundation".to_owned()));
    assert_eq!(fields[3], ("Partnership Type", "Media Partner".to_owned()));
    assert_eq!(fields[4].1, "We cover youth events.");
    assert_eq!(fields[5].1, "2026-03-01 09:30 UTC");
}

#[test]
fn missing_message_has_placeholder() {
    let fields = partnership("sponsor", None).detail_fields();
    assert_eq!(fields[4].1, "No message");
}

#[test]
fn table_cells_use_type_label() {
    let row = partnership("community", None);
    assert_eq!(row.cells()[3], "Community Partner");
    assert_eq!(row.title(), "Acme Foundation");
    assert_eq!(PartnershipApplication::HEADING, "Partnership Applications");
}
