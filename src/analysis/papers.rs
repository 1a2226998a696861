//! Paper ranking and one-line rendering for the model prompt.

use crate::scholar::Paper;
use std::fmt::Display;

/// Papers included in the prompt, by citation rank.
pub const TOP_PAPER_LIMIT: usize = 60;

/// Co-author names listed per rendered paper.
pub const LISTED_COAUTHORS: usize = 2;

/// Most-cited papers first, at most [`TOP_PAPER_LIMIT`].
///
/// Sorts references to the caller's papers, leaving the input order
/// untouched. The sort is stable; missing citation counts rank as zero.
pub fn rank_papers(papers: &[Paper]) -> Vec<&Paper> {
    let mut ranked: Vec<&Paper> = papers.iter().collect();
    ranked.sort_by(|a, b| b.citations_or_zero().cmp(&a.citations_or_zero()));
    ranked.truncate(TOP_PAPER_LIMIT);
    ranked
}

/// Absent values are written as `null`, the way upstream sent them.
fn or_null<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "null".to_string())
}

/// `[<year>] "<title>" (Citations: <n>, Venue: <venue>, Co-authors: <a, b>)`
pub fn render_paper_line(paper: &Paper) -> String {
    let coauthors = paper
        .authors
        .as_ref()
        .map(|authors| {
            authors
                .iter()
                .take(LISTED_COAUTHORS)
                .map(|a| a.name.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    format!(
        "[{}] \"{}\" (Citations: {}, Venue: {}, Co-authors: {})",
        or_null(&paper.year),
        or_null(&paper.title),
        or_null(&paper.citation_count),
        or_null(&paper.venue),
        coauthors
    )
}

/// Rendered top papers, one per line. Empty input gives an empty string.
pub fn summarize_top_papers(papers: &[Paper]) -> String {
    rank_papers(papers)
        .into_iter()
        .map(render_paper_line)
        .collect::<Vec<_>>()
        .join("\n")
}
