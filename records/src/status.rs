//! Status vocabularies and their badge tones.
//!
//! Applications carry a closed four-state lifecycle. Registrations carry a
//! free-form status string written by backend processes, so their tone
//! mapping has to tolerate values it has never seen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a string is not one of the four application statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status: {0}")]
pub struct UnknownStatus(pub String);

/// Review lifecycle shared by volunteer and partnership applications.
///
/// Every status may move to every other status; there is no transition
/// table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::UnderReview, Self::Approved, Self::Rejected];

    /// Wire value stored in the `status` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Human label with underscores replaced by spaces.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn tone(self) -> StatusTone {
        match self {
            Self::Pending => StatusTone::Yellow,
            Self::UnderReview => StatusTone::Blue,
            Self::Approved => StatusTone::Green,
            Self::Rejected => StatusTone::Red,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// Badge color family for a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Yellow,
    Blue,
    Red,
    Neutral,
}

impl StatusTone {
    /// Modifier class applied to `.status-badge`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Green => "status-badge--green",
            Self::Yellow => "status-badge--yellow",
            Self::Blue => "status-badge--blue",
            Self::Red => "status-badge--red",
            Self::Neutral => "status-badge--neutral",
        }
    }
}

/// Tone for a delegate registration status. Anything outside
/// approved/pending/rejected renders neutral.
#[must_use]
pub fn registration_tone(status: &str) -> StatusTone {
    match status {
        "approved" => StatusTone::Green,
        "pending" => StatusTone::Yellow,
        "rejected" => StatusTone::Red,
        _ => StatusTone::Neutral,
    }
}

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
