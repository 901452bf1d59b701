//! PKCE verifier/challenge pair and OAuth return-path handling.
//!
//! ARCHITECTURE
//! ============
//! The OAuth redirect stores the verifier in a short-lived HttpOnly cookie;
//! the callback sends it back to the hosted auth API together with the code.
//! Only the S256 challenge ever leaves the server.

use std::fmt::Write;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Where a sign-in lands when no usable return path was supplied.
pub const DEFAULT_RETURN_PATH: &str = "/dashboard";

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 64-character verifier (32 random bytes, hex).
#[must_use]
pub fn generate_verifier() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// S256 challenge: unpadded base64url of the verifier's SHA-256.
#[must_use]
pub fn code_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

/// Keep only same-origin absolute paths; anything else falls back to
/// [`DEFAULT_RETURN_PATH`]. Browsers strip tab, CR and LF before resolving a
/// `Location`, so any control or whitespace character is refused.
#[must_use]
pub fn sanitize_return_path(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if is_local_path(path) => path.to_owned(),
        _ => DEFAULT_RETURN_PATH.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path
            .chars()
            .any(|c| c == '\\' || c.is_control() || c.is_whitespace())
}

#[cfg(test)]
#[path = "pkce_test.rs"]
mod tests;
