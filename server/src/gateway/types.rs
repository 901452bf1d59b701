//! Gateway types: errors, tokens, and the table query builder.

use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by hosted-backend calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request could not be sent or its body read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success status other than 401/403.
    #[error("backend responded with status {status}")]
    Status { status: u16, body: String },

    /// The backend rejected the access token (or credentials).
    #[error("backend rejected credentials")]
    Unauthorized,

    /// The response body could not be deserialized.
    #[error("backend response decode failed: {0}")]
    Decode(String),

    /// A maybe-single select matched more than one row.
    #[error("expected at most one row from {table}, got {count}")]
    MultipleRows { table: String, count: usize },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Map a non-success HTTP status to a gateway error.
#[must_use]
pub fn status_error(status: u16, body: String) -> GatewayError {
    match status {
        401 | 403 => GatewayError::Unauthorized,
        _ => GatewayError::Status { status, body },
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Access/refresh token pair issued by the hosted auth API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// How far a sign-out reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutScope {
    /// Revoke every session of the user, on every device.
    Global,
    /// Revoke only the session behind this access token.
    Local,
}

impl SignOutScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Local => "local",
        }
    }
}

/// Parameters of a hosted OAuth authorize redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizeRequest<'a> {
    pub provider: &'a str,
    pub redirect_to: &'a str,
    pub code_challenge: &'a str,
    /// Provider hint forwarded as `prompt` (e.g. `select_account`).
    pub prompt: Option<&'a str>,
}

// =============================================================================
// TABLE QUERY
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// A select/update target: table, projection, equality filters, ordering.
///
/// Encodes to the table API's query-string dialect
/// (`select=*&user_id=eq.42&order=created_at.desc`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<(String, Order)>,
}

impl TableQuery {
    #[must_use]
    pub fn new(table: &str) -> Self {
        Self { table: table.to_owned(), select: None, filters: Vec::new(), order: None }
    }

    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_owned());
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_owned(), order));
        self
    }

    /// Equality filters as `(column, value)` pairs, in insertion order.
    #[must_use]
    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    #[must_use]
    pub fn ordering(&self) -> Option<(&str, Order)> {
        self.order.as_ref().map(|(column, order)| (column.as_str(), *order))
    }

    /// Query-string pairs in table API syntax.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 2);
        if let Some(select) = &self.select {
            pairs.push(("select".to_owned(), select.clone()));
        }
        for (column, value) in &self.filters {
            pairs.push((column.clone(), format!("eq.{value}")));
        }
        if let Some((column, order)) = &self.order {
            let dir = match order {
                Order::Asc => "asc",
                Order::Desc => "desc",
            };
            pairs.push(("order".to_owned(), format!("{column}.{dir}")));
        }
        pairs
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
