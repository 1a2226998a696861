//! Co-author frequency tally.

use crate::scholar::Paper;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Collaborators returned to the caller.
pub const TOP_COLLABORATOR_LIMIT: usize = 8;

/// `(name, papers shared)`, serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator(pub String, pub usize);

impl Collaborator {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> usize {
        self.1
    }
}

/// Count, per co-author name, the papers it shares with the target author.
///
/// Entries carrying the target's id and entries without a name are skipped.
/// A name listed twice on one paper counts once for that paper.
pub fn tally_collaborators(papers: &[Paper], target_id: &str) -> HashMap<String, usize> {
    let mut tally: HashMap<String, usize> = HashMap::new();

    for paper in papers {
        let Some(authors) = &paper.authors else {
            continue;
        };

        let mut seen: HashSet<&str> = HashSet::new();
        for author in authors {
            if author.author_id.as_deref() == Some(target_id) {
                continue;
            }
            let Some(name) = author.name.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            if seen.insert(name) {
                *tally.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }

    tally
}

/// The [`TOP_COLLABORATOR_LIMIT`] most frequent co-authors, most frequent
/// first. Equal counts are ordered by name.
pub fn top_collaborators(papers: &[Paper], target_id: &str) -> Vec<Collaborator> {
    let mut ranked: Vec<Collaborator> = tally_collaborators(papers, target_id)
        .into_iter()
        .map(|(name, count)| Collaborator(name, count))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_COLLABORATOR_LIMIT);
    ranked
}
