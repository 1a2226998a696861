//! Static File Serving
//!
//! Serves the front-end client from the configured directory
//! (`public/` unless `STATIC_DIR` says otherwise).

use axum::Router;
use tower_http::services::ServeDir;
use std::path::Path;
use tracing::{info, warn};

/// Create router for serving static files
pub fn router(static_dir: &str) -> Router {
    let path = Path::new(static_dir);
    if path.is_dir() {
        info!(path = %path.display(), "Serving static files");
    } else {
        warn!(path = %path.display(), "Static files directory not found, front-end will 404");
    }

    let serve_dir = ServeDir::new(path).append_index_html_on_directories(true);

    Router::new().fallback_service(serve_dir)
}
