//! Session and access DTOs exchanged between the server and the browser.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated identity as reported by the hosted auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A row of `profiles`, keyed by the auth user id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub grade: Option<String>,
}

/// Everything the UI knows about the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: SessionUser,
    pub profile: Option<Profile>,
    pub is_admin: bool,
}

/// Result of a system-area access check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AccessOutcome {
    /// Nobody is signed in.
    NoIdentity,
    /// The email is on the allow-list.
    Authorized { email: String },
    /// The email is not on the allow-list (or the lookup failed). The session
    /// has already been terminated.
    Denied { email: String },
}

/// Email + password sign-in form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSignIn {
    pub email: String,
    pub password: String,
}

impl PasswordSignIn {
    /// Form-presence check: both fields non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

/// Accept `grade` as either text or a number; profiles written by older
/// forms stored it as an integer.
fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text or number, got {other}"))),
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
