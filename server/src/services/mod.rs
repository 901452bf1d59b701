//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the access-control and review rules and all calls
//! through the backend gateway, so route handlers stay focused on cookies,
//! extractors and status codes.

pub mod pkce;
pub mod registration;
pub mod review;
pub mod session;
pub mod system_gate;

use crate::gateway::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Gateway(GatewayError),
    #[error("row not found: {0}")]
    NotFound(String),
    #[error("no authenticated session")]
    Unauthenticated,
}

/// Rejected credentials surface as `Unauthenticated`; everything else stays
/// a gateway error.
impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Unauthorized => Self::Unauthenticated,
            other => Self::Gateway(other),
        }
    }
}
