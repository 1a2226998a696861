// Scholar Radar - researcher search and AI-generated publication profiles

pub mod config;
pub mod models;
pub mod types;
pub mod scholar;   // Semantic Scholar Graph API client
pub mod llm;
pub mod analysis;  // Paper ranking, collaborator tally, prompt, report parsing
pub mod routes;
pub mod middleware;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
