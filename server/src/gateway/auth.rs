//! Hosted auth API client: user lookup, token grants and sign-out, plus the
//! OAuth authorize URL.

use records::SessionUser;
use serde::de::DeserializeOwned;

use super::types::{AuthTokens, AuthorizeRequest, GatewayError, SignOutScope, status_error};

pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self { http, base_url: base_url.to_owned(), anon_key: anon_key.to_owned() }
    }

    /// `GET /auth/v1/user`: the identity behind an access token.
    pub async fn get_user(&self, access_token: &str) -> Result<SessionUser, GatewayError> {
        let response = self
            .http
            .get(auth_url(&self.base_url, "user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;
        read_json(response).await
    }

    /// `POST /auth/v1/token?grant_type=refresh_token`
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, GatewayError> {
        self.token_grant("refresh_token", &serde_json::json!({ "refresh_token": refresh_token }))
            .await
    }

    /// `POST /auth/v1/token?grant_type=pkce`
    pub async fn exchange_code(&self, auth_code: &str, code_verifier: &str) -> Result<AuthTokens, GatewayError> {
        self.token_grant(
            "pkce",
            &serde_json::json!({ "auth_code": auth_code, "code_verifier": code_verifier }),
        )
        .await
    }

    /// `POST /auth/v1/token?grant_type=password`
    pub async fn sign_in_password(&self, email: &str, password: &str) -> Result<AuthTokens, GatewayError> {
        self.token_grant("password", &serde_json::json!({ "email": email, "password": password }))
            .await
    }

    /// `POST /auth/v1/logout?scope=<scope>`
    pub async fn sign_out(&self, access_token: &str, scope: SignOutScope) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(auth_url(&self.base_url, "logout"))
            .query(&[("scope", scope.as_str())])
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, body))
    }

    async fn token_grant(&self, grant_type: &str, body: &serde_json::Value) -> Result<AuthTokens, GatewayError> {
        let response = self
            .http
            .post(auth_url(&self.base_url, "token"))
            .query(&[("grant_type", grant_type)])
            .header("apikey", &self.anon_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;
        read_json(response).await
    }
}

pub(crate) fn auth_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/auth/v1/{path}")
}

/// Build the hosted OAuth authorize URL for a PKCE (S256) flow.
#[must_use]
pub fn authorize_url(base_url: &str, request: &AuthorizeRequest<'_>) -> String {
    let mut params = vec![
        ("provider", request.provider),
        ("redirect_to", request.redirect_to),
        ("code_challenge", request.code_challenge),
        ("code_challenge_method", "s256"),
    ];
    if let Some(prompt) = request.prompt {
        params.push(("prompt", prompt));
    }
    let base = auth_url(base_url, "authorize");
    match reqwest::Url::parse_with_params(&base, &params) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::error!(error = %e, %base, "authorize url build failed");
            base
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| GatewayError::Request(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(status_error(status, text));
    }
    serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
