//! Analyst prompt for the generative model.
//!
//! The JSON block at the end of the prompt is the contract the report
//! parser relies on. Field names must stay in step with
//! [`AnalysisResult`](super::report::AnalysisResult).

use crate::scholar::Author;

/// Used when the caller supplies no description.
pub const DEFAULT_DESCRIPTION: &str = "General Assessment (No specific field provided)";

/// Author fields the prompt quotes.
#[derive(Debug, Clone)]
pub struct PromptSubject<'a> {
    pub name: &'a str,
    pub affiliation: &'a str,
    pub h_index: Option<i64>,
    pub citation_count: Option<i64>,
}

impl<'a> From<&'a Author> for PromptSubject<'a> {
    fn from(author: &'a Author) -> Self {
        Self {
            name: author.name.as_deref().unwrap_or("null"),
            affiliation: author.primary_affiliation(),
            h_index: author.h_index,
            citation_count: author.citation_count,
        }
    }
}

fn stat(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "null".to_string())
}

/// The description to embed, falling back to [`DEFAULT_DESCRIPTION`] when
/// absent or blank.
pub fn effective_description(user_description: Option<&str>) -> &str {
    user_description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION)
}

pub fn build_prompt(subject: &PromptSubject<'_>, paper_summary: &str, user_description: Option<&str>) -> String {
    format!(r#"Act as a Senior Scientific Intelligence Officer.
TARGET: {name} ({affiliation}).
STATS: H-Index: {h_index}, Citations: {citations}.
DATA DUMP (Top 60 Papers):
{papers}

TASK 1: COMPREHENSIVE PROFILE
- Analyze their career trajectory (Early vs. Current focus).
- Identify their "Signature Contribution" to science.
- Analyze their collaboration network (Who do they work with most?).

TASK 2: RELEVANCE MATCHING
User's Target Description/Field: "{description}".

Based on the User's Description:
- Calculate a "Match Score" (0 to 100) reflecting how well this researcher fits the description.
- Provide a "Gap Analysis" (What is missing? or Why is it a perfect match?).

OUTPUT FORMAT: JSON ONLY (No Markdown).
{{
    "full_report": "Write a detailed, 3-paragraph professional report. Use formatting like <b>Bold</b> for key terms. Paragraph 1: Career Arc. Paragraph 2: Technical Deep Dive. Paragraph 3: Impact & Network.",
    "match_score": 85,
    "match_reason": "One sentence explaining the score.",
    "key_technologies": ["Tech1", "Tech2", "Tech3", "Tech4", "Tech5"]
}}"#,
        name = subject.name,
        affiliation = subject.affiliation,
        h_index = stat(subject.h_index),
        citations = stat(subject.citation_count),
        papers = paper_summary,
        description = effective_description(user_description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> PromptSubject<'static> {
        PromptSubject {
            name: "Ada Lovelace",
            affiliation: "University of London",
            h_index: Some(12),
            citation_count: Some(3400),
        }
    }

    #[test]
    fn test_schema_keys_present() {
        let prompt = build_prompt(&subject(), "", None);
        for key in ["full_report", "match_score", "match_reason", "key_technologies"] {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing {}", key);
        }
        assert!(prompt.contains("JSON ONLY (No Markdown)"));
        assert!(prompt.contains(r#"["Tech1", "Tech2", "Tech3", "Tech4", "Tech5"]"#));
    }

    #[test]
    fn test_schema_block_is_valid_json() {
        let prompt = build_prompt(&subject(), "", None);
        let start = prompt.rfind("{\n").unwrap();
        let schema: serde_json::Value = serde_json::from_str(&prompt[start..]).unwrap();
        assert_eq!(schema["match_score"], 85);
        assert_eq!(schema["key_technologies"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_description_substituted_verbatim() {
        let description = "Quantum error correction for \"noisy\" devices";
        let prompt = build_prompt(&subject(), "", Some(description));
        assert!(prompt.contains(&format!("User's Target Description/Field: \"{}\".", description)));
        assert!(!prompt.contains(DEFAULT_DESCRIPTION));
    }

    #[test]
    fn test_default_description() {
        for missing in [None, Some(""), Some("   ")] {
            let prompt = build_prompt(&subject(), "", missing);
            assert!(prompt.contains(DEFAULT_DESCRIPTION));
        }
    }

    #[test]
    fn test_author_stats_and_papers() {
        let prompt = build_prompt(&subject(), "[2020] \"A\" (Citations: 1, Venue: X, Co-authors: )", None);
        assert!(prompt.contains("TARGET: Ada Lovelace (University of London)."));
        assert!(prompt.contains("STATS: H-Index: 12, Citations: 3400."));
        assert!(prompt.contains("DATA DUMP (Top 60 Papers):\n[2020] \"A\""));
    }

    #[test]
    fn test_subject_from_sparse_author() {
        let author = Author::default();
        let prompt = build_prompt(&PromptSubject::from(&author), "", None);
        assert!(prompt.contains("TARGET: null (Unknown)."));
        assert!(prompt.contains("STATS: H-Index: null, Citations: null."));
    }
}
