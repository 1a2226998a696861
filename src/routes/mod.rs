//! API Routes
//!
//! - `/api/search` - Author search proxy
//! - `/api/analyze` - AI profile and match score for one author
//! - `/api/health` - Health check
//! - `/` - Static file serving (front-end)

pub mod analyze;
pub mod health;
pub mod search;
pub mod static_files;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
///
/// API routes take precedence; anything else falls through to the static
/// directory.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let static_dir = state.config.server.static_dir.clone();
    let origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .merge(search::router(state.clone()))
        .merge(analyze::router(state.clone()))
        .merge(health::router(state));

    let app = Router::new()
        .merge(api_router)
        .merge(static_files::router(&static_dir))
        .layer(TraceLayer::new_for_http());

    apply_cors(app, &origins)
}
