use crate::types::LLMProvider;
use anyhow::{bail, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_S2_API_BASE: &str = "https://api.semanticscholar.org/graph/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub scholar: ScholarConfig,
    pub llm: LLMConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScholarConfig {
    /// Sent as `x-api-key`; empty when unset.
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub google_api_key: String,
    pub openai_api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl LLMConfig {
    /// API key for the configured provider.
    pub fn api_key(&self) -> &str {
        match self.provider {
            LLMProvider::Google => &self.google_api_key,
            LLMProvider::OpenAI => &self.openai_api_key,
        }
    }
}

/// Parse `LLM_PROVIDER`, case-insensitively.
fn parse_provider(name: &str) -> Result<LLMProvider> {
    let Ok(provider) = LLMProvider::from_name(&name.trim().to_lowercase()) else {
        bail!("Unsupported LLM_PROVIDER: {}", name);
    };
    Ok(provider)
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let provider = parse_provider(
            &env::var("LLM_PROVIDER").unwrap_or_else(|_| "google".to_string()),
        )?;
        let default_model = match provider {
            LLMProvider::Google => "gemini-2.5-flash-lite",
            LLMProvider::OpenAI => "gpt-4o-mini",
        };

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            },
            scholar: ScholarConfig {
                api_key: env::var("S2_API_KEY").unwrap_or_default(),
                base_url: env::var("S2_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_S2_API_BASE.to_string()),
                timeout_secs: env::var("SCHOLAR_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                google_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
                openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
                model: env::var("LLM_MODEL").unwrap_or_else(|_| default_model.to_string()),
                base_url: env::var("LLM_API_BASE").ok().filter(|s| !s.is_empty()),
                timeout_secs: env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()?,
                provider,
            },
            logging: LoggingConfig {
                json: env::var("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
        })
    }
}

#[cfg(test)]
impl Config {
    /// Fixed configuration for router and pipeline tests.
    pub fn for_tests() -> Self {
        Self {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
                cors_allowed_origins: vec!["*".to_string()],
                static_dir: "public".to_string(),
            },
            scholar: ScholarConfig {
                api_key: String::new(),
                base_url: DEFAULT_S2_API_BASE.to_string(),
                timeout_secs: 5,
            },
            llm: LLMConfig {
                provider: LLMProvider::Google,
                google_api_key: "test-key".to_string(),
                openai_api_key: String::new(),
                model: "gemini-2.5-flash-lite".to_string(),
                base_url: None,
                timeout_secs: 5,
            },
            logging: LoggingConfig { json: false },
        }
    }
}
