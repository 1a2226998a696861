use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use scholar_radar::{
    config::Config,
    llm::{LLMProviderConfig, LLM},
    routes::create_router,
    scholar::SemanticScholarClient,
    utils::init_logger,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    init_logger(config.logging.json);
    info!("Configuration loaded: {:?}", config.server);

    if config.llm.api_key().is_empty() {
        tracing::warn!(provider = %config.llm.provider, "No LLM API key configured, analysis requests will fail");
    }

    // Build upstream clients once; handlers share them read-only
    let scholar = SemanticScholarClient::from_config(&config.scholar)?;
    let llm = LLM::new(LLMProviderConfig::from(&config.llm))?;
    info!(provider = %llm.provider_name(), model = %config.llm.model, "LLM provider ready");

    let state = AppState {
        config: config.clone(),
        scholar: Arc::new(scholar),
        llm: Arc::new(llm),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("[RADAR ONLINE] http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
