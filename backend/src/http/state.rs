//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::NumerologyConfig;

/// Shared application state passed to all handlers.
///
/// Read-only: handlers compute everything per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<NumerologyConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: NumerologyConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Configured last start year for mahadasha sequences.
    pub fn mahadasha_end_year(&self) -> i32 {
        self.config.numerology.mahadasha_end_year
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NumerologyConfig::default())
    }
}
