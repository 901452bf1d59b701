//! Server configuration parsed from environment variables.
//!
//! Parsing goes through a lookup closure so tests never touch the process
//! environment. `main` loads `.env` with `dotenvy` before calling
//! [`AppConfig::from_env`].

pub const DEFAULT_SITE_URL: &str = "https://www.modelwef.com";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OAUTH_PROVIDER: &str = "google";
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Hosted backend project endpoint and public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project URL without a trailing slash.
    pub url: String,
    /// Public (anon) API key sent as `apikey` on every call.
    pub anon_key: String,
    pub timeouts: BackendTimeouts,
}

/// Public origin of the site, used for OAuth return URLs and `robots.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin without a trailing slash.
    pub url: String,
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub site: SiteConfig,
    pub port: u16,
    pub oauth_provider: String,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `SITE_URL`: default `https://www.modelwef.com`
    /// - `PORT`: default 3000
    /// - `OAUTH_PROVIDER`: default `google`
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 15
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 5
    /// - `COOKIE_SECURE`: inferred from the `SITE_URL` scheme when unset
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, "SUPABASE_URL")?;
        let anon_key = required(&lookup, "SUPABASE_ANON_KEY")?;
        let backend = BackendConfig {
            url: url.trim_end_matches('/').to_owned(),
            anon_key,
            timeouts: BackendTimeouts {
                request_secs: parse_or(&lookup, "BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS)?,
                connect_secs: parse_or(&lookup, "BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS)?,
            },
        };

        let site_url = lookup("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_owned());
        let site = parse_site(&site_url)?;

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => site.url.starts_with("https://"),
        };

        Ok(Self {
            backend,
            site,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            oauth_provider: lookup("OAUTH_PROVIDER").unwrap_or_else(|| DEFAULT_OAUTH_PROVIDER.to_owned()),
            cookie_secure,
        })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(default),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_site(raw: &str) -> Result<SiteConfig, ConfigError> {
    let invalid = || ConfigError::Invalid { var: "SITE_URL", value: raw.to_owned() };
    let parsed = reqwest::Url::parse(raw).map_err(|_| invalid())?;
    let host = parsed.host_str().ok_or_else(invalid)?;
    let host = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    };
    Ok(SiteConfig { url: raw.trim_end_matches('/').to_owned(), host })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
