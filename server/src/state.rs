//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the backend gateway and the parsed config and nothing mutable: every
//! request carries its own tokens, and all row state lives in the hosted
//! backend.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::gateway::Backend;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum: all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, config: AppConfig) -> Self {
        Self { backend, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::test_helpers::*;

    #[test]
    fn app_state_shares_config() {
        let state = test_app_state(Arc::new(MockBackend::new()));
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.config, &clone.config));
        assert_eq!(clone.config.oauth_provider, "google");
    }
}
