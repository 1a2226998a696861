// In-memory stand-ins for the scholarly API and the model, shared by unit tests

use crate::config::Config;
use crate::llm::{LLMAdapter, LLM};
use crate::models::AppState;
use crate::scholar::{Author, AuthorSummary, ScholarApi, ScholarError};
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub const VALID_ANALYSIS: &str = r#"{
    "full_report": "<b>Career Arc</b>: steady. <b>Deep Dive</b>: solid. <b>Network</b>: broad.",
    "match_score": 85,
    "match_reason": "Publishes squarely in the requested field.",
    "key_technologies": ["Transformers", "CUDA", "PyTorch", "Graph Neural Networks", "RLHF"]
}"#;

#[derive(Default)]
pub struct FakeScholar {
    pub hits: Vec<AuthorSummary>,
    pub author: Option<Author>,
    pub fail: bool,
}

impl FakeScholar {
    pub fn with_author(author: Author) -> Self {
        Self {
            author: Some(author),
            ..Default::default()
        }
    }

    pub fn with_hits(hits: Vec<AuthorSummary>) -> Self {
        Self {
            hits,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl ScholarApi for FakeScholar {
    async fn search_authors(&self, _query: &str) -> Result<Vec<AuthorSummary>, ScholarError> {
        if self.fail {
            return Err(ScholarError::RequestFailed("connection refused".to_string()));
        }
        Ok(self.hits.clone())
    }

    async fn fetch_author(&self, author_id: &str) -> Result<Author, ScholarError> {
        if self.fail {
            return Err(ScholarError::RequestFailed("connection refused".to_string()));
        }
        self.author.clone().ok_or_else(|| ScholarError::Status {
            status: 404,
            body: format!("Author {} not found", author_id),
        })
    }
}

/// Replies with a fixed string and records every prompt it receives.
pub struct FakeLLM {
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeLLM {
    pub fn replying(reply: &str) -> (LLM, Arc<Mutex<Vec<String>>>) {
        Self::build(Some(reply.to_string()))
    }

    pub fn failing() -> (LLM, Arc<Mutex<Vec<String>>>) {
        Self::build(None)
    }

    fn build(reply: Option<String>) -> (LLM, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let adapter = FakeLLM {
            reply,
            prompts: prompts.clone(),
        };
        (LLM::from_adapter("fake", Box::new(adapter)), prompts)
    }
}

#[async_trait]
impl LLMAdapter for FakeLLM {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.extend(request.messages.iter().map(|m| m.content.clone()));
        }

        let content = self
            .reply
            .clone()
            .ok_or_else(|| AppError::LLMApi("model unavailable".to_string()))?;

        Ok(LLMResponse {
            content,
            finish_reason: "STOP".to_string(),
            usage: TokenUsage::default(),
        })
    }
}

pub fn test_state(scholar: FakeScholar, llm: LLM) -> AppState {
    AppState {
        config: Config::for_tests(),
        scholar: Arc::new(scholar),
        llm: Arc::new(llm),
    }
}
