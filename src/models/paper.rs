use serde::{Deserialize, Serialize};

/// A bibliographic record returned by the search collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub publication_date: String,
    pub pmid: String,
    pub doi: String,
    pub pubmed_url: String,
}

impl Paper {
    /// Lower-cased title + abstract, the haystack both scorers search.
    pub fn content_lower(&self) -> String {
        format!(
            "{} {}",
            self.title.to_lowercase(),
            self.abstract_text.to_lowercase()
        )
    }
}

/// A paper annotated with its relevance to one specific query.
///
/// Scores are per-request: the same paper scores differently against a
/// different query and is never cached across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPaper {
    #[serde(flatten)]
    pub paper: Paper,
    pub relevance_score: f64,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_lower_joins_title_and_abstract() {
        let paper = Paper {
            title: "Spinal Cord Stimulation".into(),
            abstract_text: "Chronic Pain outcomes".into(),
            ..Default::default()
        };
        assert_eq!(paper.content_lower(), "spinal cord stimulation chronic pain outcomes");
    }

    #[test]
    fn abstract_field_renames_on_serialization() {
        let paper = Paper {
            abstract_text: "text".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json["abstract"], "text");
    }
}
