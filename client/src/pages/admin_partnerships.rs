//! Partnership application review panel.

#[cfg(test)]
#[path = "admin_partnerships_test.rs"]
mod admin_partnerships_test;

use leptos::prelude::*;
use records::{PartnershipApplication, format_date, format_timestamp};

use super::review_panel::{IDENTITY_COLUMNS, PanelRow, review_panel_view};

fn partnership_type_label(kind: &str) -> &str {
    match kind {
        "sponsor" => "Sponsorship",
        "media" => "Media Partner",
        "academic" => "Academic Partner",
        "community" => "Community Partner",
        other => other,
    }
}

impl PanelRow for PartnershipApplication {
    const HEADING: &'static str = "Partnership Applications";
    const SEARCH_PLACEHOLDER: &'static str = "Search by organization, contact or email";
    const COLUMNS: [&'static str; IDENTITY_COLUMNS] = ["Organization", "Contact", "Email", "Type"];

    fn title(&self) -> String {
        self.organization_name.clone()
    }

    fn cells(&self) -> [String; IDENTITY_COLUMNS] {
        [
            self.organization_name.clone(),
            self.contact_person.clone(),
            self.email.clone(),
            partnership_type_label(&self.partnership_type).to_owned(),
        ]
    }

    fn submitted_on(&self) -> String {
        format_date(self.created_at)
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Organization", self.organization_name.clone()),
            ("Contact Person", self.contact_person.clone()),
            ("Email", self.email.clone()),
            ("Partnership Type", partnership_type_label(&self.partnership_type).to_owned()),
            ("Message", self.message.clone().unwrap_or_else(|| "No message".to_owned())),
            ("Submitted", format_timestamp(self.created_at)),
        ]
    }
}

#[component]
pub fn AdminPartnershipsPage() -> impl IntoView {
    review_panel_view::<PartnershipApplication>()
}
