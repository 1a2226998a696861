//! Semantic Scholar Client
//!
//! Thin reqwest wrapper over the Graph API. No retries and no caching:
//! one request in, one response (or error) out. The `x-api-key` header is
//! always sent, empty when no key is configured.

use super::{
    Author, AuthorSummary, ScholarApi, ScholarError, AUTHOR_FIELDS, SEARCH_FIELDS, SEARCH_LIMIT,
};
use crate::config::ScholarConfig;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Envelope returned by `/author/search`
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Option<Vec<AuthorSummary>>,
}

pub struct SemanticScholarClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SemanticScholarClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self, ScholarError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScholarError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &ScholarConfig) -> Result<Self, ScholarError> {
        Self::new(
            config.base_url.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ScholarError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ScholarError::RequestFailed(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ScholarError::RequestFailed(format!("Base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ScholarError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| ScholarError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScholarError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ScholarError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ScholarApi for SemanticScholarClient {
    async fn search_authors(&self, query: &str) -> Result<Vec<AuthorSummary>, ScholarError> {
        info!(query = %query, "Searching authors on Semantic Scholar");

        let url = self.endpoint(&["author", "search"])?;
        let envelope: SearchEnvelope = self
            .get_json(
                url,
                &[
                    ("query", query.to_string()),
                    ("limit", SEARCH_LIMIT.to_string()),
                    ("fields", SEARCH_FIELDS.to_string()),
                ],
            )
            .await?;

        let hits = envelope.data.unwrap_or_default();
        info!(count = hits.len(), "Author search completed");
        Ok(hits)
    }

    async fn fetch_author(&self, author_id: &str) -> Result<Author, ScholarError> {
        info!(author_id = %author_id, "Fetching author record");

        let url = self.endpoint(&["author", author_id])?;
        let author: Author = self
            .get_json(url, &[("fields", AUTHOR_FIELDS.to_string())])
            .await?;

        debug!(papers = author.papers.len(), "Author record received");
        Ok(author)
    }
}
