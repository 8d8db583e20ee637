use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CITED_BY: Regex = Regex::new(r"(?i)\s*Cited by \d+\s*").unwrap();
    static ref ALL_VERSIONS: Regex = Regex::new(r"(?i)\s*All \d+ versions?\s*").unwrap();

    /// "Journal Name, 2019" / "MIS Quarterly 41 (1), 236-265, 2024"
    static ref VENUE_BEFORE_YEAR: Regex = Regex::new(r"^(.+?),\s*(19\d{2}|20\d{2})\b").unwrap();
    /// "Venue · Publisher"
    static ref VENUE_BEFORE_PUBLISHER: Regex = Regex::new(r"^(.+?)\s*·\s*").unwrap();

    static ref TRAILING_PAGES: Regex = Regex::new(r",\s*\d+[-–]\d+$").unwrap();
    static ref VOLUME: Regex = Regex::new(r"(?i)\s*\b(?:Vol\.?|Volume|V\.?)\s*\d+").unwrap();
    static ref ISSUE: Regex = Regex::new(r"(?i)\s*\b(?:No\.?|Number|Issue|Iss\.?)\s*\d+").unwrap();
    static ref VOLUME_ISSUE: Regex = Regex::new(r"\s*\d+\s*\([^)]*\)").unwrap();
    static ref BARE_ISSUE: Regex = Regex::new(r"\s*\(\d+\)").unwrap();
    static ref TRAILING_PUBLISHER: Regex = Regex::new(r"\s*·\s*[^·]+$").unwrap();

    /// Listing-style author: "H Chen", "BM Ampel", "K Lee…"
    static ref LISTED_AUTHOR: Regex = Regex::new(r"^(?:\p{Lu}{1,3}\s+\p{Lu}[\p{L}'\-]+)?\s*(?:…|\.\.\.)?$").unwrap();
}

/// Two or more comma-separated listing-style author names and nothing else
fn is_author_list(text: &str) -> bool {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    parts.len() >= 2 && parts.iter().all(|p| !p.is_empty() && LISTED_AUTHOR.is_match(p))
}

/// Strip volume, issue, page and publisher decorations from a venue segment
fn clean_venue_segment(segment: &str) -> String {
    let mut venue = TRAILING_PAGES.replace(segment.trim(), "").into_owned();
    for pattern in [&*VOLUME, &*ISSUE, &*VOLUME_ISSUE, &*BARE_ISSUE, &*TRAILING_PUBLISHER] {
        venue = pattern.replace_all(&venue, "").into_owned();
    }
    venue.trim().trim_end_matches(',').trim().to_string()
}

fn venue_from_segment(segment: &str) -> String {
    if let Some(caps) = VENUE_BEFORE_YEAR.captures(segment) {
        return clean_venue_segment(&caps[1]);
    }
    let head = segment.split(" · ").next().unwrap_or_default();
    clean_venue_segment(head)
}

/// Pull the venue out of a listing's author/venue line.
///
/// Search listings read `Authors - Venue, Year - Publisher`; profile listings
/// put the venue alone on the line (`MIS Quarterly 41 (1), 236-265, 2024` or
/// `Venue · Publisher`). "Cited by N" and "All N versions" noise is removed
/// first. Returns an empty string when nothing venue-like is left.
pub fn extract_venue_from_authors_venue(authors_venue: &str) -> String {
    let text = CITED_BY.replace_all(authors_venue, " ");
    let text = ALL_VERSIONS.replace_all(&text, " ");

    let parts: Vec<&str> = text.split(" - ").map(str::trim).filter(|p| !p.is_empty()).collect();

    match parts.len() {
        0 => String::new(),
        1 => {
            let only = parts[0];
            if is_author_list(only) {
                return String::new();
            }
            if let Some(caps) = VENUE_BEFORE_YEAR.captures(only) {
                clean_venue_segment(&caps[1])
            } else if let Some(caps) = VENUE_BEFORE_PUBLISHER.captures(only) {
                clean_venue_segment(&caps[1])
            } else {
                clean_venue_segment(only)
            }
        }
        _ => venue_from_segment(parts[1]),
    }
}
