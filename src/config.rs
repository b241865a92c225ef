use std::path::PathBuf;

use tracing::{debug, warn};

/// Default bind address of the web host.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default location of the built front-end, relative to the working directory.
pub const DEFAULT_DIST_DIR: &str = "workspace/frontend/dist";

/// Resolved settings of the web host.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub bind_address: String,
    pub dist_dir: PathBuf,
}

impl HostConfig {
    pub fn new(bind_address: impl Into<String>, dist_dir: impl Into<PathBuf>) -> Self {
        let config = Self {
            bind_address: bind_address.into(),
            dist_dir: dist_dir.into(),
        };
        debug!(?config, "Resolved host configuration");
        if !config.has_frontend() {
            warn!(
                dist = %config.dist_dir.display(),
                "No index.html in the front-end directory; only /health will answer"
            );
        }
        config
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Whether the built front-end is present.
    pub fn has_frontend(&self) -> bool {
        self.index_file().is_file()
    }
}
