//! Author Analysis
//!
//! Turns one author id into a narrative profile and a match score.
//!
//! ## Pipeline Overview
//!
//! ```text
//! authorId
//!      │
//!      ▼
//! ┌─────────────┐
//! │   Scholar   │  → full author record with papers
//! │    fetch    │
//! └─────────────┘
//!      │
//!      ├──────────────► top 60 papers, one line each
//!      ├──────────────► top 8 collaborators
//!      ▼
//! ┌─────────────┐
//! │   Prompt    │  → analyst instruction + JSON schema
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │     LLM     │  → raw text, fences stripped, parsed
//! └─────────────┘
//!      │
//!      ▼
//! { author, analysis, collaborators }
//! ```
//!
//! All-or-nothing: any failing step aborts the whole analysis.

pub mod collaborators;
pub mod papers;
pub mod prompt;
pub mod report;

pub use collaborators::{top_collaborators, Collaborator};
pub use papers::summarize_top_papers;
pub use prompt::{build_prompt, PromptSubject};
pub use report::{parse_analysis, AnalysisResult, ReportError};

use crate::llm::LLM;
use crate::scholar::{Author, ScholarApi};
use crate::types::{AppResult, LLMMessage, LLMRequest};
use serde::Serialize;
use tracing::{debug, info};

/// Combined response of the analysis endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorAnalysis {
    pub author: Author,
    pub analysis: AnalysisResult,
    pub collaborators: Vec<Collaborator>,
}

/// Run the full analysis for one author.
pub async fn run_author_analysis(
    scholar: &dyn ScholarApi,
    llm: &LLM,
    model: &str,
    author_id: &str,
    user_description: Option<&str>,
) -> AppResult<AuthorAnalysis> {
    info!(author_id = %author_id, "Starting author analysis");

    let author = scholar.fetch_author(author_id).await?;

    let paper_summary = summarize_top_papers(&author.papers);
    let collaborators = top_collaborators(&author.papers, author_id);
    info!(
        papers = author.papers.len(),
        collaborators = collaborators.len(),
        "Author data reduced"
    );

    let prompt = build_prompt(&PromptSubject::from(&author), &paper_summary, user_description);
    debug!(prompt_len = prompt.len(), "Prompt built");

    let request = LLMRequest {
        model: model.to_string(),
        messages: vec![LLMMessage::user(prompt)],
    };

    let response = llm.create_chat_completion(&request).await?;
    info!(
        response_len = response.content.len(),
        finish_reason = %response.finish_reason,
        total_tokens = response.usage.total_tokens,
        "Model responded"
    );

    let analysis = parse_analysis(&response.content)?;
    info!(match_score = analysis.match_score, "Author analysis complete");

    Ok(AuthorAnalysis {
        author,
        analysis,
        collaborators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scholar::{AuthorRef, Paper};
    use crate::test_support::{FakeLLM, FakeScholar, VALID_ANALYSIS};
    use crate::types::AppError;

    fn author_with_papers() -> Author {
        let coauthors = |names: &[(&str, &str)]| -> Option<Vec<AuthorRef>> {
            Some(
                names
                    .iter()
                    .map(|(id, name)| AuthorRef {
                        author_id: Some(id.to_string()),
                        name: Some(name.to_string()),
                    })
                    .collect(),
            )
        };

        Author {
            author_id: Some("42".to_string()),
            name: Some("Ada Example".to_string()),
            affiliations: vec!["Example Institute".to_string()],
            h_index: Some(7),
            citation_count: Some(120),
            papers: vec![
                Paper {
                    title: Some("Minor Work".to_string()),
                    citation_count: Some(2),
                    authors: coauthors(&[("42", "Ada Example"), ("7", "Bob")]),
                    ..Default::default()
                },
                Paper {
                    title: Some("Major Work".to_string()),
                    citation_count: Some(100),
                    authors: coauthors(&[("42", "Ada Example"), ("7", "Bob"), ("8", "Cy")]),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let scholar = FakeScholar::with_author(author_with_papers());
        let (llm, prompts) = FakeLLM::replying(VALID_ANALYSIS);

        let result = run_author_analysis(&scholar, &llm, "model", "42", Some("databases"))
            .await
            .unwrap();

        assert_eq!(result.analysis.match_score, 85);
        assert_eq!(
            result.collaborators,
            vec![Collaborator("Bob".to_string(), 2), Collaborator("Cy".to_string(), 1)]
        );

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        assert!(prompt.contains("\"databases\""));
        // ranked: the 100-citation paper comes first
        let major = prompt.find("Major Work").unwrap();
        let minor = prompt.find("Minor Work").unwrap();
        assert!(major < minor);
    }

    #[tokio::test]
    async fn test_author_without_papers() {
        let author = Author {
            author_id: Some("1".to_string()),
            name: Some("New Researcher".to_string()),
            ..Default::default()
        };
        let scholar = FakeScholar::with_author(author);
        let (llm, prompts) = FakeLLM::replying(VALID_ANALYSIS);

        let result = run_author_analysis(&scholar, &llm, "model", "1", None).await.unwrap();

        assert!(result.collaborators.is_empty());
        let prompts = prompts.lock().unwrap();
        assert!(prompts[0].contains("DATA DUMP (Top 60 Papers):\n\n\nTASK 1"));
        assert!(prompts[0].contains(prompt::DEFAULT_DESCRIPTION));
    }

    #[tokio::test]
    async fn test_fenced_model_output() {
        let scholar = FakeScholar::with_author(author_with_papers());
        let fenced = format!("```json\n{}\n```", VALID_ANALYSIS);
        let (llm, _) = FakeLLM::replying(&fenced);

        let result = run_author_analysis(&scholar, &llm, "model", "42", None).await.unwrap();
        assert_eq!(result.analysis, parse_analysis(VALID_ANALYSIS).unwrap());
    }

    #[tokio::test]
    async fn test_upstream_failure_stops_before_model() {
        let scholar = FakeScholar::failing();
        let (llm, prompts) = FakeLLM::replying(VALID_ANALYSIS);

        let err = run_author_analysis(&scholar, &llm, "model", "42", None).await.unwrap_err();

        assert!(matches!(err, AppError::Scholar(_)));
        assert!(prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_model_output() {
        let scholar = FakeScholar::with_author(author_with_papers());
        let (llm, _) = FakeLLM::replying("I am unable to comply.");

        let err = run_author_analysis(&scholar, &llm, "model", "42", None).await.unwrap_err();
        assert!(matches!(err, AppError::Report(ReportError::NotJson(_))));
    }
}
