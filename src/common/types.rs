use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::author::{parse_authors, AuthorEntry};
use crate::extract::{
    clean_title, compute_paper_key, detect_artifacts, extract_venue_from_authors_venue, parse_year, Artifacts,
};

/// One listing row as handed over by the scraper. Everything is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaperRecord {
    pub title: String,
    #[serde(alias = "authorsVenueRaw")]
    pub authors_venue: String,
    pub venue: Option<String>,
    /// Number or string; the first plausible year is used
    pub year: Option<Value>,
    /// Number or string ("1,234", "Cited by 12"); anything else is unknown
    #[serde(alias = "citationCount", alias = "citedBy")]
    pub citations: Option<Value>,
    #[serde(alias = "cid")]
    pub cluster_id: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
    pub links: Vec<String>,
}

/// Paper with identity, venue, year and author list resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub key: String,
    pub title: String,
    pub authors_venue_raw: String,
    pub venue: Option<String>,
    pub year: Option<i32>,
    pub citation_count: Option<u64>,
    pub cluster_id: Option<String>,
    #[serde(skip)]
    pub authors: Vec<AuthorEntry>,
    pub artifacts: Artifacts,
}

fn record_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()).filter(|y| (1900..2100).contains(y)),
        Value::String(s) => parse_year(s),
        _ => None,
    }
}

fn record_citations(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|c| c.is_finite() && *c >= 0.0).map(|c| c as u64)),
        Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

impl Paper {
    /// Resolve a raw record. A missing venue or year is recovered from the
    /// author/venue line when possible.
    pub fn from_record(record: &PaperRecord) -> Self {
        let title = clean_title(&record.title);
        let authors_venue = record.authors_venue.trim().to_string();

        let venue = non_empty(&record.venue).or_else(|| {
            let extracted = extract_venue_from_authors_venue(&authors_venue);
            (!extracted.is_empty()).then_some(extracted)
        });
        let year = record
            .year
            .as_ref()
            .and_then(record_year)
            .or_else(|| parse_year(&authors_venue));
        let cluster_id = non_empty(&record.cluster_id);
        let url = non_empty(&record.url);

        let key = compute_paper_key(cluster_id.as_deref(), url.as_deref(), &title, &authors_venue, year);

        let mut texts: Vec<&str> = record.links.iter().map(String::as_str).collect();
        if let Some(snippet) = record.snippet.as_deref() {
            texts.push(snippet);
        }

        Self {
            key,
            authors: parse_authors(&authors_venue),
            artifacts: detect_artifacts(&texts),
            title,
            authors_venue_raw: authors_venue,
            venue,
            year,
            citation_count: record.citations.as_ref().and_then(record_citations),
            cluster_id,
        }
    }

    /// Number of listed authors, at least one
    pub fn team_size(&self) -> usize {
        self.authors.len().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_aliases() {
        let record: PaperRecord = serde_json::from_value(json!({
            "title": "[PDF] Deep Learning for Cyber Threat Intelligence",
            "authorsVenueRaw": "BM Ampel, S Samtani, H Chen - MIS Quarterly, 2023 - misq.org",
            "citationCount": 42,
            "clusterId": "987"
        }))
        .unwrap();
        let paper = Paper::from_record(&record);
        assert_eq!(paper.key, "cid:987");
        assert_eq!(paper.title, "Deep Learning for Cyber Threat Intelligence");
        assert_eq!(paper.venue.as_deref(), Some("MIS Quarterly"));
        assert_eq!(paper.year, Some(2023));
        assert_eq!(paper.citation_count, Some(42));
        assert_eq!(paper.authors.len(), 3);
        assert_eq!(paper.team_size(), 3);
    }

    #[test]
    fn test_explicit_fields_win() {
        let record: PaperRecord = serde_json::from_value(json!({
            "title": "T",
            "authorsVenue": "H Chen - Decision Support Systems, 2019",
            "venue": "Information Systems Research",
            "year": "2021"
        }))
        .unwrap();
        let paper = Paper::from_record(&record);
        assert_eq!(paper.venue.as_deref(), Some("Information Systems Research"));
        assert_eq!(paper.year, Some(2021));
        assert!(paper.key.starts_with("fp:t|h chen"));
    }

    #[test]
    fn test_partial_record() {
        let paper = Paper::from_record(&PaperRecord::default());
        assert_eq!(paper.venue, None);
        assert_eq!(paper.year, None);
        assert_eq!(paper.citation_count, None);
        assert_eq!(paper.team_size(), 1);
        assert_eq!(paper.key, "fp:");
    }

    #[test]
    fn test_citation_count_forms() {
        let count = |value: Value| {
            let record: PaperRecord = serde_json::from_value(json!({ "title": "A", "citations": value })).unwrap();
            Paper::from_record(&record).citation_count
        };
        assert_eq!(count(json!(12)), Some(12));
        assert_eq!(count(json!("1,234")), Some(1234));
        assert_eq!(count(json!("Cited by 12")), Some(12));
        assert_eq!(count(json!("n/a")), None);
        assert_eq!(count(json!(-3)), None);
        assert_eq!(count(json!(null)), None);
    }

    #[test]
    fn test_artifacts_from_links_and_snippet() {
        let record = PaperRecord {
            links: vec!["https://github.com/x/y".to_string()],
            snippet: Some("The dataset is public.".to_string()),
            ..Default::default()
        };
        let paper = Paper::from_record(&record);
        assert!(paper.artifacts.code);
        assert!(paper.artifacts.data);
    }
}
