//! Hosted table API client.
//!
//! Thin HTTP wrapper over `/rest/v1/<table>`. Every call carries the public
//! `apikey` plus the caller's access token so row-level security evaluates
//! against the signed-in user, never against a service role.

use serde_json::Value;

use super::types::{GatewayError, TableQuery, status_error};

pub struct TableClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl TableClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self { http, base_url: base_url.to_owned(), anon_key: anon_key.to_owned() }
    }

    /// `GET /rest/v1/<table>?<query>`
    pub async fn select(&self, access_token: &str, query: &TableQuery) -> Result<Vec<Value>, GatewayError> {
        let response = self
            .http
            .get(table_url(&self.base_url, &query.table))
            .query(&query.query_pairs())
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;
        read_rows(response).await
    }

    /// `PATCH /rest/v1/<table>?<filters>` returning the updated rows.
    pub async fn update(
        &self,
        access_token: &str,
        query: &TableQuery,
        patch: &Value,
    ) -> Result<Vec<Value>, GatewayError> {
        let response = self
            .http
            .patch(table_url(&self.base_url, &query.table))
            .query(&query.query_pairs())
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=representation")
            .bearer_auth(access_token)
            .json(patch)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;
        read_rows(response).await
    }
}

pub(crate) fn table_url(base_url: &str, table: &str) -> String {
    format!("{base_url}/rest/v1/{table}")
}

async fn read_rows(response: reqwest::Response) -> Result<Vec<Value>, GatewayError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| GatewayError::Request(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(status_error(status, text));
    }
    parse_rows(&text)
}

/// Parse a table API response body. An empty body means no rows.
pub(crate) fn parse_rows(text: &str) -> Result<Vec<Value>, GatewayError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Vec<Value>>(text).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
