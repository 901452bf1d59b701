//! Hosted backend gateway: table rows and auth sessions.
//!
//! DESIGN
//! ======
//! The `Backend` trait is the only seam between services and the hosted
//! database-as-a-service. `HostedBackend` dispatches to the table client and
//! the auth client over one shared `reqwest::Client`; tests substitute an
//! in-memory implementation. Rows cross the seam as `serde_json::Value` and
//! are decoded into `records` types by the typed helpers below.

pub mod auth;
pub mod rest;
pub mod types;

use std::time::Duration;

use records::SessionUser;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::BackendConfig;
pub use types::{AuthTokens, AuthorizeRequest, GatewayError, Order, SignOutScope, TableQuery};

/// Everything the site asks of the hosted backend.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Select rows matching `query` as the user behind `access_token`.
    async fn select(&self, access_token: &str, query: &TableQuery) -> Result<Vec<Value>, GatewayError>;

    /// Patch rows matching `query` and return them as updated.
    async fn update(&self, access_token: &str, query: &TableQuery, patch: &Value) -> Result<Vec<Value>, GatewayError>;

    /// Identity behind an access token. `Unauthorized` when the token is
    /// expired or revoked.
    async fn get_user(&self, access_token: &str) -> Result<SessionUser, GatewayError>;

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthTokens, GatewayError>;

    async fn exchange_code(&self, auth_code: &str, code_verifier: &str) -> Result<AuthTokens, GatewayError>;

    async fn sign_in_password(&self, email: &str, password: &str) -> Result<AuthTokens, GatewayError>;

    async fn sign_out(&self, access_token: &str, scope: SignOutScope) -> Result<(), GatewayError>;

    /// URL that starts a hosted OAuth sign-in.
    fn authorize_url(&self, request: &AuthorizeRequest<'_>) -> String;
}

// =============================================================================
// HOSTED BACKEND
// =============================================================================

/// Production backend talking HTTP to the hosted project.
pub struct HostedBackend {
    base_url: String,
    tables: rest::TableClient,
    auth: auth::AuthClient,
}

impl HostedBackend {
    /// Build a backend client from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GatewayError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            base_url: config.url.clone(),
            tables: rest::TableClient::new(http.clone(), &config.url, &config.anon_key),
            auth: auth::AuthClient::new(http, &config.url, &config.anon_key),
        })
    }
}

#[async_trait::async_trait]
impl Backend for HostedBackend {
    async fn select(&self, access_token: &str, query: &TableQuery) -> Result<Vec<Value>, GatewayError> {
        self.tables.select(access_token, query).await
    }

    async fn update(&self, access_token: &str, query: &TableQuery, patch: &Value) -> Result<Vec<Value>, GatewayError> {
        self.tables.update(access_token, query, patch).await
    }

    async fn get_user(&self, access_token: &str) -> Result<SessionUser, GatewayError> {
        self.auth.get_user(access_token).await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthTokens, GatewayError> {
        self.auth.refresh(refresh_token).await
    }

    async fn exchange_code(&self, auth_code: &str, code_verifier: &str) -> Result<AuthTokens, GatewayError> {
        self.auth.exchange_code(auth_code, code_verifier).await
    }

    async fn sign_in_password(&self, email: &str, password: &str) -> Result<AuthTokens, GatewayError> {
        self.auth.sign_in_password(email, password).await
    }

    async fn sign_out(&self, access_token: &str, scope: SignOutScope) -> Result<(), GatewayError> {
        self.auth.sign_out(access_token, scope).await
    }

    fn authorize_url(&self, request: &AuthorizeRequest<'_>) -> String {
        auth::authorize_url(&self.base_url, request)
    }
}

// =============================================================================
// TYPED HELPERS
// =============================================================================

/// Decode raw rows into a typed vector.
///
/// # Errors
///
/// Returns `Decode` if any row does not match `T`.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, GatewayError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| GatewayError::Decode(e.to_string())))
        .collect()
}

/// Select and decode every matching row.
pub async fn select_rows<T: DeserializeOwned>(
    backend: &dyn Backend,
    access_token: &str,
    query: &TableQuery,
) -> Result<Vec<T>, GatewayError> {
    decode_rows(backend.select(access_token, query).await?)
}

/// Select zero or one row. More than one match is an error.
pub async fn select_maybe_single<T: DeserializeOwned>(
    backend: &dyn Backend,
    access_token: &str,
    query: &TableQuery,
) -> Result<Option<T>, GatewayError> {
    let rows = backend.select(access_token, query).await?;
    if rows.len() > 1 {
        return Err(GatewayError::MultipleRows { table: query.table.clone(), count: rows.len() });
    }
    Ok(decode_rows(rows)?.into_iter().next())
}
