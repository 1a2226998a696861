use axum::{
    Router,
    routing::post,
    Json,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::analysis::run_author_analysis;
use crate::models::{AnalyzeRequest, AppState, ErrorResponse};
use tracing::{error, info_span, warn, Instrument};
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_author))
        .with_state(state)
}

/// POST /api/analyze - profile an author against an optional description
///
/// A missing `authorId` answers with a plain-text 400, which is what the
/// front-end checks for. Every downstream failure collapses into one
/// generic 500; details only go to the log.
async fn analyze_author(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable analyze request body");
            AnalyzeRequest::default()
        }
    };

    let Some(author_id) = request.author_id.filter(|id| !id.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Target ID Required").into_response();
    };

    let request_id = Uuid::new_v4();
    let span = info_span!("analyze", %request_id, author_id = %author_id);

    let result = run_author_analysis(
        state.scholar.as_ref(),
        &state.llm,
        &state.config.llm.model,
        &author_id,
        request.user_description.as_deref(),
    )
    .instrument(span)
    .await;

    match result {
        Ok(analysis) => Json(analysis).into_response(),
        Err(e) => {
            error!(%request_id, error = %e, "Analysis Error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Intelligence System Failure")),
            )
                .into_response()
        }
    }
}
