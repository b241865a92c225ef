use std::time::Duration;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::handlers::health::health_check;
use crate::schemas::AppState;

/// Create application router: `/health` plus the front-end bundle.
///
/// Unknown paths fall back to `index.html` so the single-page app handles them.
pub fn create_router(state: AppState) -> Router {
    let frontend = ServeDir::new(&state.config.dist_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
