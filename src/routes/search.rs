use axum::{
    Router,
    routing::get,
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::models::{AppState, ErrorResponse, SearchParams};
use tracing::{info, error};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search_authors))
        .with_state(state)
}

/// GET /api/search?q=<name> - proxy an author search upstream
async fn search_authors(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(query) = params.q.filter(|q| !q.is_empty()) else {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new("Query required"))).into_response();
    };

    match state.scholar.search_authors(&query).await {
        Ok(hits) => {
            info!(query = %query, count = hits.len(), "Search results relayed");
            Json(hits).into_response()
        }
        Err(e) => {
            error!(query = %query, error = %e, "Search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Search Malfunction")),
            )
                .into_response()
        }
    }
}
