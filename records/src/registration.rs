//! Delegate registration row and the dashboard's view of it.
//!
//! The dashboard renders one of three shapes: a call to action when no row
//! exists, preferences only, or preferences plus an assignment panel once
//! the secretariat has filled in either assignment field.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::status::{StatusTone, capitalize_first, registration_tone};

/// Placeholder for an assignment field the secretariat has not set yet.
pub const PENDING_ASSIGNMENT: &str = "Pending";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegationType {
    Country,
    Institution,
}

impl DelegationType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Institution => "Institution",
        }
    }
}

/// A row of `delegate_registrations`. One per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub user_id: String,
    pub delegation_type: DelegationType,
    pub preferred_country: Option<String>,
    pub preferred_institution: Option<String>,
    pub committee_preference: Option<String>,
    pub assigned_country: Option<String>,
    pub assigned_institution: Option<String>,
    pub assigned_committee: Option<String>,
    pub status: String,
    pub payment_status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl Registration {
    /// Preferred country or institution, whichever the delegation type uses.
    #[must_use]
    pub fn preferred_target(&self) -> Option<&str> {
        match self.delegation_type {
            DelegationType::Country => present(self.preferred_country.as_ref()),
            DelegationType::Institution => present(self.preferred_institution.as_ref()),
        }
    }

    /// Assigned country or institution, whichever the delegation type uses.
    #[must_use]
    pub fn assigned_target(&self) -> Option<&str> {
        match self.delegation_type {
            DelegationType::Country => present(self.assigned_country.as_ref()),
            DelegationType::Institution => present(self.assigned_institution.as_ref()),
        }
    }

    #[must_use]
    pub fn assigned_committee(&self) -> Option<&str> {
        present(self.assigned_committee.as_ref())
    }

    #[must_use]
    pub fn has_assignment(&self) -> bool {
        self.assigned_target().is_some() || self.assigned_committee().is_some()
    }
}

/// Status and preference block shown for any existing registration.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationSummary {
    pub status_label: String,
    pub tone: StatusTone,
    pub delegation_label: &'static str,
    pub preferred_value: String,
    pub committee_preference: String,
    pub payment_status: String,
}

/// Assignment block, with [`PENDING_ASSIGNMENT`] standing in for unset fields.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentPanel {
    pub target_label: String,
    pub target_value: String,
    pub committee: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationView {
    RegisterCta,
    Preferences(RegistrationSummary),
    Assigned { summary: RegistrationSummary, assignment: AssignmentPanel },
}

impl RegistrationView {
    #[must_use]
    pub fn from_row(row: Option<&Registration>) -> Self {
        let Some(row) = row else {
            return Self::RegisterCta;
        };

        let delegation_label = row.delegation_type.label();
        let summary = RegistrationSummary {
            status_label: capitalize_first(&row.status),
            tone: registration_tone(&row.status),
            delegation_label,
            preferred_value: row.preferred_target().unwrap_or("Not specified").to_owned(),
            committee_preference: present(row.committee_preference.as_ref())
                .unwrap_or("Any")
                .to_owned(),
            payment_status: capitalize_first(&row.payment_status),
        };

        if !row.has_assignment() {
            return Self::Preferences(summary);
        }

        let assignment = AssignmentPanel {
            target_label: format!("Assigned {delegation_label}"),
            target_value: row.assigned_target().unwrap_or(PENDING_ASSIGNMENT).to_owned(),
            committee: row.assigned_committee().unwrap_or(PENDING_ASSIGNMENT).to_owned(),
        };
        Self::Assigned { summary, assignment }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&RegistrationSummary> {
        match self {
            Self::RegisterCta => None,
            Self::Preferences(summary) | Self::Assigned { summary, .. } => Some(summary),
        }
    }

    #[must_use]
    pub fn assignment(&self) -> Option<&AssignmentPanel> {
        match self {
            Self::Assigned { assignment, .. } => Some(assignment),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
