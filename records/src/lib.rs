//! Shared row model and review logic for the conference site.
//!
//! This crate owns the representation of every hosted-backend row used by
//! both `server` and `client`, plus the pure pieces of behavior that sit on
//! top of them: status tones, the review search filter, the status
//! transition reducer, and the delegate registration view model. Nothing in
//! here performs I/O.

pub mod application;
pub mod registration;
pub mod session;
pub mod status;

pub use application::{
    ApplicationRecord, PartnershipApplication, StatusUpdate, VolunteerApplication, apply_transition,
    filter_applications, transition_message,
};
pub use registration::{AssignmentPanel, DelegationType, Registration, RegistrationSummary, RegistrationView};
pub use session::{AccessOutcome, PasswordSignIn, Profile, SessionSnapshot, SessionUser};
pub use status::{ApplicationStatus, StatusTone, UnknownStatus};

use time::OffsetDateTime;
use time::macros::format_description;

/// Format a backend timestamp as a calendar date (`2026-02-21`).
#[must_use]
pub fn format_date(at: OffsetDateTime) -> String {
    at.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Format a backend timestamp with minute precision in UTC.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.to_offset(time::UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
