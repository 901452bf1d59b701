//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into a toast and an empty view without crashing hydration. A 401/403 on
//! an identity endpoint is not an error: it is reported as `Ok(None)`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt::Write;

use records::{
    AccessOutcome, ApplicationRecord, ApplicationStatus, PasswordSignIn, Registration, SessionSnapshot, SessionUser,
};
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
fn applications_endpoint(segment: &str) -> String {
    format!("/api/admin/{segment}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_endpoint(segment: &str, id: &str) -> String {
    format!("/api/admin/{segment}/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_identity_rejection(status: u16) -> bool {
    status == 401 || status == 403
}

/// URL that starts the hosted OAuth sign-in and comes back to `return_to`.
#[must_use]
pub fn oauth_start_url(return_to: &str) -> String {
    let mut encoded = String::with_capacity(return_to.len());
    for byte in return_to.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => encoded.push(byte as char),
            other => {
                let _ = write!(encoded, "%{other:02X}");
            }
        }
    }
    format!("/auth/oauth?return_to={encoded}")
}

/// Fetch the session snapshot from `/api/auth/me`.
/// `Ok(None)` when nobody is signed in, and always on the server.
///
/// # Errors
///
/// Returns an error string on transport failure or an unexpected status.
pub async fn fetch_session() -> Result<Option<SessionSnapshot>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if is_identity_rejection(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("session", resp.status()));
        }
        resp.json::<SessionSnapshot>()
            .await
            .map(Some)
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Sign in with email and password via `POST /api/auth/password`.
///
/// # Errors
///
/// Returns a user-facing message when the credentials are rejected or the
/// request fails.
pub async fn sign_in_password(form: &PasswordSignIn) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/password")
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match resp.status() {
            204 | 200 => Ok(()),
            400 => Err("Enter both email and password.".to_owned()),
            401 => Err("Invalid email or password.".to_owned()),
            status => Err(request_failed_message("sign-in", status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}

/// End the session everywhere via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the caller's registration row, if any.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_registration() -> Result<Option<Registration>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/registration")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("registration fetch", resp.status()));
        }
        resp.json::<Option<Registration>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Fetch every application of kind `T`, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_applications<T>() -> Result<Vec<T>, String>
where
    T: ApplicationRecord + DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let url = applications_endpoint(T::API_SEGMENT);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("application fetch", resp.status()));
        }
        resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Move one application to `target`; returns the updated row.
///
/// # Errors
///
/// Returns an error string if the update is rejected or the request fails.
pub async fn update_application_status<T>(id: &str, target: ApplicationStatus) -> Result<T, String>
where
    T: ApplicationRecord + DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let url = status_endpoint(T::API_SEGMENT, id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&records::StatusUpdate { status: target })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("status update", resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, target);
        Err("not available on server".to_owned())
    }
}

/// Run the system allow-list gate via `POST /api/system/access`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn check_system_access() -> Result<AccessOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/system/access")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("access check", resp.status()));
        }
        resp.json::<AccessOutcome>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(AccessOutcome::NoIdentity)
    }
}

/// Fetch the allow-listed identity from `/api/system/me`.
/// `Ok(None)` when the caller is not signed in or not on the allow-list.
///
/// # Errors
///
/// Returns an error string on transport failure or an unexpected status.
pub async fn fetch_system_identity() -> Result<Option<SessionUser>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/system/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if is_identity_rejection(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("system identity", resp.status()));
        }
        resp.json::<SessionUser>()
            .await
            .map(Some)
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}
