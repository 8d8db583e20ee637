use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap();
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    /// "[PDF] Title", "[HTML][HTML] Title"
    static ref TITLE_TAGS: Regex = Regex::new(r"^(?:\[[^\]]+\]\s*)+").unwrap();

    static ref CODE_PATTERNS: Vec<Regex> = [
        r"(?i)github\.com",
        r"(?i)gitlab\.com",
        r"(?i)bitbucket\.org",
        r"(?i)\bcode\s+repository\b",
        r"(?i)\breplication\s+package\b",
        r"(?i)\bcode\s+available\b",
        r"(?i)\bsource\s+code\b",
        r"(?i)\bsoftware\s+availability\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();

    static ref DATA_PATTERNS: Vec<Regex> = [
        r"(?i)zenodo\.org",
        r"(?i)osf\.io",
        r"(?i)figshare\.com",
        r"(?i)\bopen\s+science\s+framework\b",
        r"(?i)\bdataset\b",
        r"(?i)\bsupplementary\s+(?:material|data|information)?\b",
        r"(?i)\bdata\s+availability\b",
        r"(?i)\bdata\s+available\b",
        r"(?i)\bdata\s+and\s+code\b",
        r"(?i)\breplication\s+data\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Longest fingerprint kept in a paper key, after the `fp:` prefix
pub const MAX_FINGERPRINT_LEN: usize = 200;

/// First plausible publication year (1900-2099) in free text
pub fn parse_year(text: &str) -> Option<i32> {
    YEAR.captures(text).and_then(|c| c[1].parse().ok())
}

/// Drop leading "[PDF]"-style result tags from a title
pub fn clean_title(title: &str) -> String {
    TITLE_TAGS.replace(title.trim(), "").trim().to_string()
}

fn fingerprint_part(value: &str) -> String {
    NON_ALNUM.replace_all(&value.to_lowercase(), " ").trim().to_string()
}

/// Stable identity for a listed paper.
///
/// Cluster id wins, then the result URL, then a fingerprint of the normalized
/// title, author line and year. Punctuation and case never change the key.
pub fn compute_paper_key(
    cluster_id: Option<&str>,
    url: Option<&str>,
    title: &str,
    authors: &str,
    year: Option<i32>,
) -> String {
    if let Some(cid) = cluster_id.filter(|c| !c.is_empty()) {
        return format!("cid:{}", cid);
    }
    if let Some(url) = url.filter(|u| !u.is_empty()) {
        return format!("url:{}", url);
    }

    let year = year.map(|y| y.to_string()).unwrap_or_default();
    let fingerprint = [title, authors, year.as_str()]
        .iter()
        .map(|part| fingerprint_part(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("|");
    // ASCII only after normalization, so byte truncation is safe
    let end = fingerprint.len().min(MAX_FINGERPRINT_LEN);
    format!("fp:{}", &fingerprint[..end])
}

/// Code and data artifacts mentioned alongside a paper
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    pub code: bool,
    pub data: bool,
}

impl Artifacts {
    pub fn any(&self) -> bool {
        self.code || self.data
    }
}

/// Look for repository hosts and availability phrases in snippets, link
/// targets and link texts.
pub fn detect_artifacts<S: AsRef<str>>(texts: &[S]) -> Artifacts {
    let haystack = texts.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ");
    Artifacts {
        code: CODE_PATTERNS.iter().any(|p| p.is_match(&haystack)),
        data: DATA_PATTERNS.iter().any(|p| p.is_match(&haystack)),
    }
}
