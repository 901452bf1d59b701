//! Volunteer application review panel.

#[cfg(test)]
#[path = "admin_volunteers_test.rs"]
mod admin_volunteers_test;

use leptos::prelude::*;
use records::application::volunteer_role_label;
use records::{VolunteerApplication, format_date, format_timestamp};

use super::review_panel::{IDENTITY_COLUMNS, PanelRow, review_panel_view};

impl PanelRow for VolunteerApplication {
    const HEADING: &'static str = "Volunteer Applications";
    const SEARCH_PLACEHOLDER: &'static str = "Search by name, school or email";
    const COLUMNS: [&'static str; IDENTITY_COLUMNS] = ["Name", "School", "Email", "Role"];

    fn title(&self) -> String {
        self.full_name.clone()
    }

    fn cells(&self) -> [String; IDENTITY_COLUMNS] {
        [
            self.full_name.clone(),
            self.school.clone(),
            self.email.clone(),
            volunteer_role_label(&self.preferred_role).to_owned(),
        ]
    }

    fn submitted_on(&self) -> String {
        format_date(self.created_at)
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Full Name", self.full_name.clone()),
            ("School", self.school.clone()),
            ("Email", self.email.clone()),
            ("Preferred Role", volunteer_role_label(&self.preferred_role).to_owned()),
            ("Experience", self.experience.clone().unwrap_or_else(|| "None provided".to_owned())),
            ("Submitted", format_timestamp(self.created_at)),
        ]
    }
}

#[component]
pub fn AdminVolunteersPage() -> impl IntoView {
    review_panel_view::<VolunteerApplication>()
}
