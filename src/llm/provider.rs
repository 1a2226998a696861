use async_trait::async_trait;
use std::time::Duration;
use crate::config::LLMConfig;
use crate::types::{AppError, AppResult, LLMProvider, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Configuration for one LLM provider
pub struct LLMProviderConfig {
    pub name: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl From<&LLMConfig> for LLMProviderConfig {
    fn from(config: &LLMConfig) -> Self {
        Self {
            name: config.provider.to_string(),
            api_key: config.api_key().to_string(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
}

impl LLM {
    pub fn new(provider: LLMProviderConfig) -> AppResult<Self> {
        let adapter: Box<dyn LLMAdapter> = match LLMProvider::from_name(&provider.name)? {
            LLMProvider::Google => Box::new(crate::llm::google::GoogleAdapter::new(
                &provider.api_key,
                provider.base_url.as_deref(),
                provider.timeout,
            )?),
            LLMProvider::OpenAI => Box::new(crate::llm::openai::OpenAIAdapter::new(
                &provider.api_key,
                provider.base_url.as_deref(),
                provider.timeout,
            )?),
        };

        Ok(Self {
            adapter,
            provider_name: provider.name,
        })
    }

    /// Wrap an already-built adapter. Used to inject fakes.
    pub fn from_adapter(name: impl Into<String>, adapter: Box<dyn LLMAdapter>) -> Self {
        Self {
            adapter,
            provider_name: name.into(),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }
}

/// Shared reqwest client construction for the HTTP adapters.
pub(crate) fn http_client(timeout: Duration) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(name: &str) -> LLMProviderConfig {
        LLMProviderConfig {
            name: name.to_string(),
            api_key: "key".to_string(),
            base_url: None,
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_known_providers_build() {
        assert_eq!(LLM::new(provider("google")).unwrap().provider_name(), "google");
        assert_eq!(LLM::new(provider("openai")).unwrap().provider_name(), "openai");
    }

    #[test]
    fn test_unknown_provider_is_an_error() {
        assert!(matches!(LLM::new(provider("mystery")), Err(AppError::Internal(_))));
    }
}
