//! Author and paper records as returned by Semantic Scholar.
//!
//! Every scalar is optional because upstream omits or nulls fields freely.
//! Absent values are skipped on serialization so records are relayed to
//! the front-end in the shape they arrived.

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A search hit from `/author/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_index: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,
}

/// A full author record from `/author/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_index: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub papers: Vec<Paper>,
}

impl Author {
    /// First listed affiliation, `Unknown` when there is none.
    pub fn primary_affiliation(&self) -> &str {
        self.affiliations
            .first()
            .map(String::as_str)
            .filter(|a| !a.is_empty())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields_of_study: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<AuthorRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Paper {
    /// Citation count used for ranking; missing counts rank as zero.
    pub fn citations_or_zero(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }
}

/// Co-author reference inside a paper's author list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    #[serde(default)]
    pub author_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_tolerates_nulls_and_missing_fields() {
        let raw = r#"{
            "authorId": "1741101",
            "name": "Ada Example",
            "affiliations": [],
            "hIndex": null,
            "papers": [
                {"paperId": "p1", "title": "On Things", "year": null, "authors": [{"authorId": null, "name": "B. Coauthor"}]},
                {"paperId": "p2"}
            ]
        }"#;

        let author: Author = serde_json::from_str(raw).unwrap();
        assert_eq!(author.name.as_deref(), Some("Ada Example"));
        assert_eq!(author.h_index, None);
        assert_eq!(author.papers.len(), 2);
        assert_eq!(author.papers[1].citations_or_zero(), 0);
        assert_eq!(author.primary_affiliation(), "Unknown");

        let coauthors = author.papers[0].authors.as_ref().unwrap();
        assert_eq!(coauthors[0].author_id, None);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let hit: AuthorSummary =
            serde_json::from_str(r#"{"authorId": "1", "name": "X", "affiliations": null}"#).unwrap();
        assert!(hit.affiliations.is_empty());

        let author: Author = serde_json::from_str(
            r#"{"authorId": "1", "name": "X", "affiliations": null, "papers": null}"#,
        )
        .unwrap();
        assert!(author.affiliations.is_empty());
        assert!(author.papers.is_empty());
        assert_eq!(author.primary_affiliation(), "Unknown");
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let paper = Paper {
            title: Some("Only Title".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&paper).unwrap();
        assert_eq!(value, serde_json::json!({"title": "Only Title"}));
    }

    #[test]
    fn test_primary_affiliation() {
        let author = Author {
            affiliations: vec!["MIT".to_string(), "Harvard".to_string()],
            ..Default::default()
        };
        assert_eq!(author.primary_affiliation(), "MIT");

        let blank = Author {
            affiliations: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(blank.primary_affiliation(), "Unknown");
    }
}
