//! Volunteer and partnership applications under admin review.
//!
//! DESIGN
//! ======
//! Both application kinds share one lifecycle, one search rule and one
//! transition reducer. `ApplicationRecord` captures the per-kind differences
//! (table, searchable fields, wording) so the review service and the review
//! panels are written once.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::status::ApplicationStatus;

/// Row shape shared by every reviewable application table.
pub trait ApplicationRecord: Clone {
    /// Hosted table holding the rows.
    const TABLE: &'static str;
    /// Path segment under `/api/admin/`.
    const API_SEGMENT: &'static str;
    /// Singular noun used in notifications ("Volunteer").
    const NOUN: &'static str;

    fn id(&self) -> &str;
    fn status(&self) -> ApplicationStatus;
    fn set_status(&mut self, status: ApplicationStatus);
    /// Identity fields matched by the review search box.
    fn search_fields(&self) -> [&str; 3];
}

/// A row of `volunteer_signups`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolunteerApplication {
    pub id: String,
    pub full_name: String,
    pub school: String,
    pub email: String,
    pub experience: Option<String>,
    pub preferred_role: String,
    pub status: ApplicationStatus,
    /// Carried for schema fidelity; never rendered or written here.
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl ApplicationRecord for VolunteerApplication {
    const TABLE: &'static str = "volunteer_signups";
    const API_SEGMENT: &'static str = "volunteers";
    const NOUN: &'static str = "Volunteer";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ApplicationStatus {
        self.status
    }

    fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.full_name, &self.school, &self.email]
    }
}

/// A row of `partnership_applications`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartnershipApplication {
    pub id: String,
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub partnership_type: String,
    pub message: Option<String>,
    pub status: ApplicationStatus,
    /// Carried for schema fidelity; never rendered or written here.
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl ApplicationRecord for PartnershipApplication {
    const TABLE: &'static str = "partnership_applications";
    const API_SEGMENT: &'static str = "partnerships";
    const NOUN: &'static str = "Partnership";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ApplicationStatus {
        self.status
    }

    fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.organization_name, &self.contact_person, &self.email]
    }
}

/// Request body for a status transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// True when `needle` (already lowercased) occurs in any search field.
fn matches_needle<T: ApplicationRecord>(row: &T, needle: &str) -> bool {
    row.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive substring filter over the kind's identity fields.
///
/// Order is preserved. An empty term keeps every row.
#[must_use]
pub fn filter_applications<'a, T: ApplicationRecord>(rows: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| matches_needle(*row, &needle))
        .collect()
}

/// Status reducer: the same row with `status` replaced. Unconditional.
#[must_use]
pub fn apply_transition<T: ApplicationRecord>(row: &T, target: ApplicationStatus) -> T {
    let mut next = row.clone();
    next.set_status(target);
    next
}

/// Success notification shown after a transition lands.
#[must_use]
pub fn transition_message(noun: &str, target: ApplicationStatus) -> String {
    match target {
        ApplicationStatus::Approved => format!("{noun} application approved"),
        ApplicationStatus::Rejected => format!("{noun} application rejected"),
        ApplicationStatus::UnderReview => format!("{noun} application marked under review"),
        ApplicationStatus::Pending => format!("{noun} application returned to pending"),
    }
}

/// Display label for a volunteer's preferred role.
#[must_use]
pub fn volunteer_role_label(role: &str) -> &str {
    match role {
        "chair" => "Committee Chair",
        "admin" => "Administrative",
        "media" => "Media Team",
        "coordinator" => "Event Coordinator",
        other => other,
    }
}

#[cfg(test)]
#[path = "application_test.rs"]
mod tests;
