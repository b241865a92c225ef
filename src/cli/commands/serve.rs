use std::path::PathBuf;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::HostConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(bind_address: &str, dist_dir: PathBuf) -> Result<()> {
    trace!("Entering serve function");
    info!("Renewable jobs dashboard host starting up");

    let config = HostConfig::new(bind_address, dist_dir);
    debug!("Serving front-end from {}", config.dist_dir.display());

    trace!("Creating application router");
    let app = create_router(AppState::new(config.clone()));

    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Dashboard available on http://{}", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
