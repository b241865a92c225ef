use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::HostConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<HostConfig>,
}

impl AppState {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Whether the built front-end is being served ("available" or "missing")
    pub frontend: String,
}
