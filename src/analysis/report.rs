//! Model output handling: fence stripping, JSON parsing, shape checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Upper bound on returned key technologies.
pub const MAX_KEY_TECHNOLOGIES: usize = 5;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("model output is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("model output has the wrong shape: {0}")]
    InvalidShape(String),
}

/// Parsed analyst report as sent to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub full_report: String,
    pub match_score: u8,
    pub match_reason: String,
    pub key_technologies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawAnalysis {
    full_report: String,
    match_score: f64,
    match_reason: String,
    key_technologies: Vec<String>,
}

/// Remove every ```` ```json ```` and ```` ``` ```` marker, then trim.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, ReportError> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(&cleaned).map_err(ReportError::NotJson)?;
    let parsed: RawAnalysis =
        serde_json::from_value(value).map_err(|e| ReportError::InvalidShape(e.to_string()))?;

    let score = parsed.match_score;
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(ReportError::InvalidShape(format!(
            "match_score {} outside 0..=100",
            score
        )));
    }

    let mut key_technologies = parsed.key_technologies;
    if key_technologies.len() > MAX_KEY_TECHNOLOGIES {
        warn!(
            returned = key_technologies.len(),
            "Model returned too many key technologies, truncating"
        );
        key_technologies.truncate(MAX_KEY_TECHNOLOGIES);
    }

    Ok(AnalysisResult {
        full_report: parsed.full_report,
        match_score: score.round() as u8,
        match_reason: parsed.match_reason,
        key_technologies,
    })
}
