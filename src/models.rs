use std::sync::Arc;
use crate::config::Config;
use crate::llm::LLM;
use crate::scholar::ScholarApi;

/// Shared, read-only handler state. Clients are built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub scholar: Arc<dyn ScholarApi>,
    pub llm: Arc<LLM>,
}

// API Request/Response types

#[derive(Debug, Default, serde::Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub author_id: Option<String>,
    pub user_description: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub scholar_api_key: bool,
    pub llm_provider: String,
}
