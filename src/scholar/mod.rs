//! Scholarly Graph API
//!
//! Typed access to the two Semantic Scholar endpoints the service uses:
//! - `GET /author/search` - author lookup by free-text name
//! - `GET /author/{id}` - full author record with papers
//!
//! Handlers never talk to reqwest directly; they go through [`ScholarApi`]
//! so tests can swap in an in-memory source.

pub mod client;
pub mod models;

pub use client::SemanticScholarClient;
pub use models::{Author, AuthorRef, AuthorSummary, Paper};

use async_trait::async_trait;
use thiserror::Error;

/// Number of search hits requested from upstream.
pub const SEARCH_LIMIT: u32 = 15;

/// Fields requested for each search hit.
pub const SEARCH_FIELDS: &str = "authorId,name,affiliations,hIndex,paperCount,citationCount";

/// Fields requested for a full author record, including per-paper fields.
pub const AUTHOR_FIELDS: &str = "name,affiliations,citationCount,hIndex,paperCount,url,papers.title,papers.year,papers.venue,papers.citationCount,papers.fieldsOfStudy,papers.authors,papers.url";

/// Errors that can occur while talking to the scholarly API
#[derive(Debug, Error)]
pub enum ScholarError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

#[async_trait]
pub trait ScholarApi: Send + Sync {
    /// Search authors by name. Returns the upstream `data` list, empty when absent.
    async fn search_authors(&self, query: &str) -> Result<Vec<AuthorSummary>, ScholarError>;

    /// Fetch one author with their paper list.
    async fn fetch_author(&self, author_id: &str) -> Result<Author, ScholarError>;
}
