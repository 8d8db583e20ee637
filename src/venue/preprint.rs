use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Pre-print hosts, checked in order against the raw (un-normalized) venue string.
    /// First hit wins.
    static ref PREPRINT_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)ssrn\.com|paper\.ssrn|\.ssrn\b|\bssrn\b").unwrap(), "SSRN"),
        (Regex::new(r"(?i)arxiv\.org|\barxiv\b").unwrap(), "arXiv"),
        (Regex::new(r"(?i)biorxiv\.org|\bbiorxiv\b").unwrap(), "bioRxiv"),
        (Regex::new(r"(?i)medrxiv\.org|\bmedrxiv\b").unwrap(), "medRxiv"),
        (Regex::new(r"(?i)research\s*square|researchsquare\.com").unwrap(), "Research Square"),
        (Regex::new(r"(?i)socarxiv\.org|\bsocarxiv\b").unwrap(), "SocArXiv"),
        (Regex::new(r"(?i)psyarxiv\.org|\bpsyarxiv\b").unwrap(), "PsyArXiv"),
        (Regex::new(r"(?i)chemrxiv\.org|\bchemrxiv\b").unwrap(), "ChemRxiv"),
        (Regex::new(r"(?i)edarxiv\.org|\bedarxiv\b").unwrap(), "EdArXiv"),
        (Regex::new(r"(?i)osf\.io/preprints|osf\s*preprints").unwrap(), "OSF Preprints"),
        (Regex::new(r"(?i)preprints\.org").unwrap(), "Preprints.org"),
        (Regex::new(r"(?i)zenodo\.org").unwrap(), "Zenodo"),
    ];
}

/// Label of the pre-print server a raw venue string points at, if any
pub fn preprint_server(venue_raw: &str) -> Option<&'static str> {
    PREPRINT_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(venue_raw))
        .map(|(_, label)| *label)
}

/// True if the venue is a pre-print server (arXiv, SSRN, ...)
pub fn is_preprint_venue(venue_raw: &str) -> bool {
    preprint_server(venue_raw).is_some()
}
