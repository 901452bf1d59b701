//! Review panel state shared by the volunteer and partnership pages.
//!
//! DESIGN
//! ======
//! One generic model over `ApplicationRecord`. The list is whatever the last
//! fetch returned; the search term filters it locally; `selected` drives the
//! detail modal; `updating` holds the id whose transition is in flight.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use records::{ApplicationRecord, ApplicationStatus, apply_transition, filter_applications, transition_message};

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewState<T> {
    pub rows: Vec<T>,
    pub loading: bool,
    pub search: String,
    pub selected: Option<String>,
    pub updating: Option<String>,
}

impl<T> Default for ReviewState<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), loading: true, search: String::new(), selected: None, updating: None }
    }
}

/// Toast text for a failed list fetch ("Failed to fetch volunteers").
#[must_use]
pub fn fetch_failed_message<T: ApplicationRecord>() -> String {
    format!("Failed to fetch {}", T::API_SEGMENT)
}

/// Toast text for a failed transition.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update status";

/// Empty-list text ("No volunteer applications found.").
#[must_use]
pub fn empty_message<T: ApplicationRecord>() -> String {
    format!("No {} applications found.", T::NOUN.to_lowercase())
}

impl<T: ApplicationRecord> ReviewState<T> {
    /// Install a fetch result. A failure empties the list.
    pub fn apply_fetch(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        self.rows = result.unwrap_or_default();
        if let Some(id) = &self.selected {
            if !self.rows.iter().any(|row| row.id() == id) {
                self.selected = None;
            }
        }
    }

    /// Rows matching the current search term, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<T> {
        filter_applications(&self.rows, &self.search)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Unfiltered count shown in the header.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&T> {
        let id = self.selected.as_deref()?;
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Mark `id` as in flight. False when another transition is running.
    pub fn begin_update(&mut self, id: &str) -> bool {
        if self.updating.is_some() {
            return false;
        }
        self.updating = Some(id.to_owned());
        true
    }

    /// Record a transition result. Success replaces the row with the
    /// reduced one and closes its modal; failure changes nothing.
    /// Returns the toast text.
    pub fn finish_update(&mut self, id: &str, target: ApplicationStatus, result: &Result<T, String>) -> String {
        self.updating = None;
        match result {
            Ok(_) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) {
                    *row = apply_transition(row, target);
                }
                if self.selected.as_deref() == Some(id) {
                    self.selected = None;
                }
                transition_message(T::NOUN, target)
            }
            Err(_) => UPDATE_FAILED_MESSAGE.to_owned(),
        }
    }
}
